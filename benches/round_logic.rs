use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{Board, GameRng, Round, RoundConfig, RoundSnapshot};
use tui_memory::term::{FrameBuffer, RoundView, Viewport};
use tui_memory::types::{DisplayMode, GridSize, EXTENDED_PALETTE, TICK_MS};

fn bench_deal(c: &mut Criterion) {
    let mut rng = GameRng::new(12345);
    c.bench_function("deal_8x8", |b| {
        b.iter(|| Board::generate(8, 8, black_box(&EXTENDED_PALETTE), &mut rng))
    });
}

fn bench_advance(c: &mut Criterion) {
    let config = RoundConfig::new(GridSize::Large, DisplayMode::Dark).with_seed(12345);
    let mut round = Round::new(config).unwrap();
    round.handle_select(0);
    round.handle_select(1);

    c.bench_function("advance_16ms_8x8", |b| {
        b.iter(|| {
            round.advance(black_box(TICK_MS));
        })
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("play_4x4_round", |b| {
        b.iter(|| {
            let config = RoundConfig::new(GridSize::Small, DisplayMode::Dark).with_seed(7);
            let mut round = Round::new(config).unwrap();
            let colors: Vec<_> = round.cards().iter().map(|c| c.color()).collect();
            for i in 0..colors.len() {
                if round.cards()[i].is_matched() {
                    continue;
                }
                let Some(j) = (i + 1..colors.len()).find(|&j| colors[j] == colors[i]) else {
                    continue;
                };
                round.handle_select(i);
                round.handle_select(j);
                for _ in 0..10 {
                    round.advance(TICK_MS);
                }
            }
            black_box(round.score())
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let config = RoundConfig::new(GridSize::Large, DisplayMode::Dark).with_seed(12345);
    let round = Round::new(config).unwrap();
    let mut snap = RoundSnapshot::default();

    c.bench_function("snapshot_into_8x8", |b| {
        b.iter(|| {
            round.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let config = RoundConfig::new(GridSize::Large, DisplayMode::Light).with_seed(12345);
    let round = Round::new(config).unwrap();
    let snap = round.snapshot();
    let view = RoundView::new();
    let vp = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_round_8x8", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Some(0), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_advance,
    bench_full_round,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
