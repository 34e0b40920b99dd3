use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_optotype::core::{generate_symbols, GameState, SimpleRng};
use tui_optotype::term::{FrameBuffer, GameView, Viewport};
use tui_optotype::types::{GameAction, SYMBOL_COUNT};

fn playing(seed: u32) -> GameState {
    let mut state = GameState::new(seed);
    state.apply_action(GameAction::Start, 0);
    state.tick(3000);
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = playing(12345);

    c.bench_function("game_tick_50ms", |b| {
        b.iter(|| {
            state.tick(black_box(50));
            if state.time_left() == 0 {
                state.apply_action(GameAction::Restart, 0);
                state.tick(3000);
            }
            state.take_events();
        })
    });
}

fn bench_generate_symbols(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_200_symbols", |b| {
        b.iter(|| generate_symbols(black_box(SYMBOL_COUNT), 1, &mut rng))
    });
}

fn bench_answer(c: &mut Criterion) {
    let mut state = playing(12345);
    let mut now = 0u64;

    c.bench_function("answer_symbol", |b| {
        b.iter(|| {
            now += 100;
            match state.current_symbol() {
                Some(sym) => {
                    let dir = sym.direction;
                    state.handle_input(dir, now);
                }
                None => {
                    state.apply_action(GameAction::Restart, now);
                    state.tick(3000);
                }
            }
            state.take_events();
        })
    });
}

fn bench_render_playing(c: &mut Criterion) {
    let state = playing(12345);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_playing_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&state.snapshot()), 0, vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_generate_symbols,
    bench_answer,
    bench_render_playing
);
criterion_main!(benches);
