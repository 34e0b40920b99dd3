//! Runtime configuration: environment variables plus command-line flags.
//!
//! Flags win over environment variables; both fall back to the built-in game
//! defaults.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

use crate::core::GameConfig;

pub const ENV_SEED: &str = "OPTOTYPE_SEED";
pub const ENV_LOG_PATH: &str = "OPTOTYPE_LOG_PATH";
pub const ENV_SYMBOLS: &str = "OPTOTYPE_SYMBOLS";
pub const ENV_DURATION: &str = "OPTOTYPE_DURATION";

pub const USAGE: &str = "\
Usage: tui-optotype [OPTIONS]

Options:
  --seed <n>          RNG seed (default: derived from the clock)
  --symbols <n>       Symbols per run (default: 200)
  --duration <s>      Seconds of play (default: 30)
  --countdown <s>     Seconds of countdown (default: 3)
  --debounce-ms <ms>  Minimum gap between accepted inputs (default: 80)
  --log <path>        Append game events as JSON lines to <path>
  -h, --help          Print this help

Environment:
  OPTOTYPE_SEED, OPTOTYPE_SYMBOLS, OPTOTYPE_DURATION, OPTOTYPE_LOG_PATH
";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Fixed seed; `None` means seed from the clock.
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub game: GameConfig,
    pub show_help: bool,
}

impl AppConfig {
    /// Build from the process environment and `args` (without the program name).
    pub fn load(args: &[String]) -> Result<Self> {
        Self::parse(args, |key| std::env::var(key).ok())
    }

    /// Build from `args` and an environment lookup.
    pub fn parse(args: &[String], env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::from_env(env);

        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "-h" | "--help" => config.show_help = true,
                "--seed" => config.seed = Some(flag_value(args, &mut i, flag)?),
                "--symbols" => config.game.symbol_count = flag_value(args, &mut i, flag)?,
                "--duration" => config.game.game_duration_seconds = flag_value(args, &mut i, flag)?,
                "--countdown" => config.game.countdown_seconds = flag_value(args, &mut i, flag)?,
                "--debounce-ms" => config.game.debounce_ms = flag_value(args, &mut i, flag)?,
                "--log" => {
                    let path: String = flag_value(args, &mut i, flag)?;
                    config.log_path = Some(PathBuf::from(path));
                }
                other => bail!("unknown argument: {}", other),
            }
            i += 1;
        }

        config.validate()?;
        Ok(config)
    }

    fn from_env(env: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str| env(key).and_then(|s| s.trim().parse::<u32>().ok());

        let mut game = GameConfig::default();
        if let Some(n) = number(ENV_SYMBOLS) {
            game.symbol_count = n;
        }
        if let Some(n) = number(ENV_DURATION) {
            game.game_duration_seconds = n;
        }

        let log_path = env(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            seed: number(ENV_SEED),
            log_path,
            game,
            show_help: false,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.game.symbol_count == 0 {
            bail!("symbol count must be at least 1");
        }
        if self.game.game_duration_seconds == 0 {
            bail!("duration must be at least 1 second");
        }
        if self.game.countdown_seconds == 0 {
            bail!("countdown must be at least 1 second");
        }
        Ok(())
    }
}

fn flag_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let v = args
        .get(*i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::parse(&[], no_env).unwrap();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.game, GameConfig::default());
        assert!(!cfg.show_help);
    }

    #[test]
    fn test_flags() {
        let cfg = AppConfig::parse(
            &args(&[
                "--seed",
                "7",
                "--symbols",
                "50",
                "--duration",
                "10",
                "--countdown",
                "1",
                "--debounce-ms",
                "0",
                "--log",
                "/tmp/run.jsonl",
            ]),
            no_env,
        )
        .unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.game.symbol_count, 50);
        assert_eq!(cfg.game.game_duration_seconds, 10);
        assert_eq!(cfg.game.countdown_seconds, 1);
        assert_eq!(cfg.game.debounce_ms, 0);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/run.jsonl")));
    }

    #[test]
    fn test_env_is_read_and_flags_take_precedence() {
        let env = |key: &str| match key {
            ENV_SEED => Some("11".to_string()),
            ENV_SYMBOLS => Some(" 40 ".to_string()),
            ENV_DURATION => Some("not-a-number".to_string()),
            ENV_LOG_PATH => Some("/tmp/env.jsonl".to_string()),
            _ => None,
        };
        let cfg = AppConfig::parse(&args(&["--seed", "12"]), env).unwrap();
        assert_eq!(cfg.seed, Some(12));
        assert_eq!(cfg.game.symbol_count, 40);
        // Unparseable environment values fall back to the default.
        assert_eq!(cfg.game.game_duration_seconds, 30);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/env.jsonl")));
    }

    #[test]
    fn test_blank_log_path_is_ignored() {
        let env = |key: &str| (key == ENV_LOG_PATH).then(|| "  ".to_string());
        let cfg = AppConfig::parse(&[], env).unwrap();
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn test_help_flag() {
        assert!(AppConfig::parse(&args(&["--help"]), no_env).unwrap().show_help);
        assert!(AppConfig::parse(&args(&["-h"]), no_env).unwrap().show_help);
    }

    #[test]
    fn test_errors() {
        let err = AppConfig::parse(&args(&["--seed"]), no_env).unwrap_err();
        assert!(err.to_string().contains("missing value for --seed"));

        let err = AppConfig::parse(&args(&["--symbols", "many"]), no_env).unwrap_err();
        assert!(err.to_string().contains("invalid --symbols value"));

        let err = AppConfig::parse(&args(&["--fast"]), no_env).unwrap_err();
        assert!(err.to_string().contains("unknown argument"));

        assert!(AppConfig::parse(&args(&["--symbols", "0"]), no_env).is_err());
        assert!(AppConfig::parse(&args(&["--duration", "0"]), no_env).is_err());
        assert!(AppConfig::parse(&args(&["--countdown", "0"]), no_env).is_err());
    }
}
