//! Terminal optotype runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no widget toolkit).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;

use tui_optotype::config::{AppConfig, USAGE};
use tui_optotype::core::{GameConfig, GameObserver, GameState};
use tui_optotype::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_optotype::session_log::SessionLog;
use tui_optotype::term::{
    frame_fingerprint, FrameBuffer, GameView, RenderThrottle, ScrollFollow, TerminalRenderer,
    Viewport,
};
use tui_optotype::types::TICK_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::load(&args)?;
    if config.show_help {
        print!("{}", USAGE);
        return Ok(());
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut log = SessionLog::open(config.log_path.as_deref())?;
    log.session_started(seed, &config.game);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut log, seed, config.game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(
    term: &mut TerminalRenderer,
    log: &mut SessionLog,
    seed: u32,
    game_config: GameConfig,
) -> Result<()> {
    let mut game = GameState::with_config(seed, game_config);
    let view = GameView::default();
    let mut scroll = ScrollFollow::new();
    let mut throttle = RenderThrottle::default();
    let mut fb = FrameBuffer::new(0, 0);

    let (w, h) = terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    relayout(&view, viewport, &mut scroll);

    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        {
            let snap = game.snapshot();
            let top_row = scroll.top_row();
            if throttle.should_render(now_ms(), frame_fingerprint(&snap, viewport, top_row)) {
                view.render_into(&snap, top_row, viewport, &mut fb);
                term.draw(&mut fb)?;
            }
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action, now_ms());
                    }
                }
                Event::Mouse(mouse) => {
                    let action = view
                        .control_pad(game.phase(), viewport)
                        .and_then(|pad| handle_mouse_event(mouse, &pad));
                    if let Some(action) = action {
                        game.apply_action(action, now_ms());
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    relayout(&view, viewport, &mut scroll);
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }

        let mut observers: [&mut dyn GameObserver; 2] = [&mut *log, &mut scroll];
        game.dispatch_events(&mut observers);
    }

    game.shutdown();
    Ok(())
}

fn relayout(view: &GameView, viewport: Viewport, scroll: &mut ScrollFollow) {
    let grid = view.grid_layout(viewport);
    scroll.set_layout(grid.columns, grid.visible_rows);
}
