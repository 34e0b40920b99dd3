//! Session log: game events appended to a file as JSON lines.
//!
//! Each line is one object with a local timestamp and an `event` tag, e.g.
//!
//! ```text
//! {"ts":"2026-10-16T09:30:01.250+02:00","event":"input_judged","index":4,"expected":"up","input":"up","correct":true}
//! ```
//!
//! A failed write disables the log for the rest of the session; the game keeps
//! running.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::core::{GameConfig, GameEvent, GameObserver};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    SessionStarted {
        seed: u32,
        symbol_count: u32,
        countdown_seconds: u32,
        game_duration_seconds: u32,
        debounce_ms: u64,
    },
    PhaseChanged {
        from: &'static str,
        to: &'static str,
    },
    GameStarted {
        episode_id: u32,
        symbol_count: u32,
    },
    InputJudged {
        index: u32,
        expected: &'static str,
        input: &'static str,
        correct: bool,
    },
    InputDebounced {
        input: &'static str,
    },
    TutorialAdvanced {
        step: u8,
        target: &'static str,
    },
    ClockTicked {
        phase: &'static str,
        time_left: u32,
    },
    GameFinished {
        correct: u32,
        errors: u32,
        score: i64,
    },
}

impl LogEvent {
    /// Log form of a game event; `None` for events not worth a line.
    pub fn from_game_event(event: &GameEvent) -> Option<Self> {
        Some(match *event {
            GameEvent::PhaseChanged { from, to } => LogEvent::PhaseChanged {
                from: from.as_str(),
                to: to.as_str(),
            },
            GameEvent::GameStarted {
                episode_id,
                symbol_count,
            } => LogEvent::GameStarted {
                episode_id,
                symbol_count,
            },
            GameEvent::InputJudged {
                index,
                expected,
                input,
                correct,
            } => LogEvent::InputJudged {
                index,
                expected: expected.as_str(),
                input: input.as_str(),
                correct,
            },
            GameEvent::InputDebounced { input } => LogEvent::InputDebounced {
                input: input.as_str(),
            },
            GameEvent::TutorialAdvanced { step, target } => LogEvent::TutorialAdvanced {
                step,
                target: target.as_str(),
            },
            GameEvent::ClockTicked { phase, time_left } => LogEvent::ClockTicked {
                phase: phase.as_str(),
                time_left,
            },
            // Implied by the surrounding input_judged lines.
            GameEvent::CurrentIndexChanged { .. } => return None,
        })
    }
}

#[derive(Serialize)]
struct LogRecord<'a> {
    ts: String,
    #[serde(flatten)]
    event: &'a LogEvent,
}

pub struct SessionLog {
    writer: Option<BufWriter<File>>,
    buf: Vec<u8>,
    correct: u32,
    errors: u32,
}

impl SessionLog {
    /// A log that drops everything.
    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::new(),
            correct: 0,
            errors: 0,
        }
    }

    /// Open `path` for appending, or return a disabled log when `path` is `None`.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open session log {}", path.display()))?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(256),
            correct: 0,
            errors: 0,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Record the parameters needed to replay this session.
    pub fn session_started(&mut self, seed: u32, config: &GameConfig) {
        self.write(&LogEvent::SessionStarted {
            seed,
            symbol_count: config.symbol_count,
            countdown_seconds: config.countdown_seconds,
            game_duration_seconds: config.game_duration_seconds,
            debounce_ms: config.debounce_ms,
        });
    }

    pub fn write(&mut self, event: &LogEvent) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        let record = LogRecord {
            ts: Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            event,
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        let ok = writer.write_all(&self.buf).is_ok() && writer.flush().is_ok();
        if !ok {
            self.writer = None;
        }
    }
}

impl GameObserver for SessionLog {
    fn on_event(&mut self, event: &GameEvent) {
        if !self.is_enabled() {
            return;
        }

        match *event {
            GameEvent::GameStarted { .. } => {
                self.correct = 0;
                self.errors = 0;
            }
            GameEvent::InputJudged { correct: true, .. } => self.correct += 1,
            GameEvent::InputJudged { correct: false, .. } => self.errors += 1,
            _ => {}
        }

        if let Some(line) = LogEvent::from_game_event(event) {
            self.write(&line);
        }

        if let GameEvent::PhaseChanged {
            to: crate::types::GamePhase::Finished,
            ..
        } = *event
        {
            let summary = LogEvent::GameFinished {
                correct: self.correct,
                errors: self.errors,
                score: self.correct as i64 - self.errors as i64,
            };
            self.write(&summary);
        }
    }
}
