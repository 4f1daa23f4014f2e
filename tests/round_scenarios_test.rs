//! End-to-end round scenarios through the facade crate.

use tui_memory::core::{
    Board, CardState, ConfigError, EventLog, EventSink, GameRng, Round, RoundConfig,
};
use tui_memory::types::{DisplayMode, GridSize, Rgb, RoundEvent, CLASSIC_PALETTE, TICK_MS};

const RED: Rgb = CLASSIC_PALETTE[0];
const BLUE: Rgb = CLASSIC_PALETTE[2];

/// 4x4 board: cells 0,1 RED; 2,3 BLUE; then six more pairs side by side.
fn seeded_board() -> Board {
    let mut colors = vec![RED, RED, BLUE, BLUE];
    for c in [1, 3, 4, 5, 6, 7] {
        colors.push(CLASSIC_PALETTE[c]);
        colors.push(CLASSIC_PALETTE[c]);
    }
    Board::from_colors(4, 4, colors).unwrap()
}

fn seeded_round() -> Round {
    Round::from_board(
        RoundConfig::new(GridSize::Small, DisplayMode::Dark),
        seeded_board(),
    )
    .unwrap()
}

fn run_ms(round: &mut Round, ms: u32) {
    for _ in 0..ms / TICK_MS {
        round.advance(TICK_MS);
    }
}

#[test]
fn matching_pair_scores_ten() {
    let mut round = seeded_round();
    assert!(round.handle_select(0));
    assert!(round.handle_select(1));
    run_ms(&mut round, 160);

    assert_eq!(round.score(), 10);
    assert_eq!(round.moves(), 1);
    assert_eq!(round.cards()[0].state(), CardState::Matched);
    assert_eq!(round.cards()[1].state(), CardState::Matched);
    assert!(round.accepting_input());
}

#[test]
fn mismatch_flips_back_after_delay() {
    let mut round = seeded_round();
    assert!(round.handle_select(0));
    assert!(round.handle_select(2));

    let mut reopened_at = None;
    let mut t = 0;
    while t < 2000 {
        round.advance(TICK_MS);
        t += TICK_MS;
        if round.accepting_input() && reopened_at.is_none() {
            reopened_at = Some(t);
        }
        if t == 480 {
            // Resolved, but still showing both faces during the pause.
            assert_eq!(round.moves(), 1);
            assert_eq!(round.cards()[0].state(), CardState::FaceUp);
            assert_eq!(round.cards()[2].state(), CardState::FaceUp);
            assert!(!round.accepting_input());
        }
    }

    let reopened_at = reopened_at.unwrap();
    // reveal 160ms + pause 500ms + flip back 160ms
    assert!(reopened_at >= 820, "input reopened too early at {reopened_at}ms");
    assert!(reopened_at <= 820 + 2 * TICK_MS);
    assert_eq!(round.score(), -1);
    assert_eq!(round.moves(), 1);
    assert_eq!(round.cards()[0].state(), CardState::FaceDown);
    assert_eq!(round.cards()[2].state(), CardState::FaceDown);
}

#[test]
fn input_ignored_while_two_cards_in_flight() {
    let mut round = seeded_round();
    round.handle_select(0);
    round.handle_select(2);
    assert!(!round.handle_select(4));
    run_ms(&mut round, 400);
    assert!(!round.handle_select(4));
    assert_eq!(round.in_flight_count(), 2);
}

#[test]
fn twenty_pairs_exceed_classic_palette() {
    let mut rng = GameRng::new(1);
    let err = Board::generate(5, 8, &CLASSIC_PALETTE, &mut rng).unwrap_err();
    assert_eq!(
        err,
        ConfigError::NotEnoughColors {
            pairs: 20,
            available: 16
        }
    );
    assert!(err.to_string().contains("20"));
}

#[test]
fn classic_palette_rejects_medium_grid() {
    let config = RoundConfig::new(GridSize::Medium, DisplayMode::Light)
        .with_palette(tui_memory::core::Palette::Classic);
    assert!(matches!(
        Round::new(config),
        Err(ConfigError::NotEnoughColors { pairs: 18, .. })
    ));
}

#[test]
fn every_grid_deals_with_default_palette() {
    for grid in GridSize::ALL {
        let round = Round::new(RoundConfig::new(grid, DisplayMode::Dark).with_seed(99)).unwrap();
        assert_eq!(round.cards().len(), grid.cells());
        assert!(round.board().color_counts().values().all(|&n| n == 2));
    }
}

#[test]
fn full_round_event_stream() {
    let mut round = Round::from_board(
        RoundConfig::new(GridSize::Small, DisplayMode::Dark),
        seeded_board(),
    )
    .unwrap();
    let log = std::rc::Rc::new(std::cell::RefCell::new(EventLog::new()));
    let sink_log = std::rc::Rc::clone(&log);
    round.set_sink(move |e: RoundEvent| sink_log.borrow_mut().notify(e));

    // One mismatch, then clear the board pair by pair.
    round.handle_select(0);
    round.handle_select(2);
    run_ms(&mut round, 1000);
    for pair in 0..8 {
        assert!(round.handle_select(pair * 2));
        assert!(round.handle_select(pair * 2 + 1));
        run_ms(&mut round, 160);
    }

    assert!(round.is_complete());
    assert_eq!(round.score(), 79);
    assert_eq!(round.moves(), 9);

    let events = log.borrow();
    let events = events.events();
    assert_eq!(
        events[..3],
        [
            RoundEvent::Flip { index: 0 },
            RoundEvent::Flip { index: 2 },
            RoundEvent::Mismatch { first: 0, second: 2 },
        ]
    );
    assert_eq!(events.last(), Some(&RoundEvent::Complete));
    assert_eq!(
        events.iter().filter(|e| matches!(e, RoundEvent::Match { .. })).count(),
        8
    );
}

#[test]
fn completed_round_freezes_clock() {
    let mut round = seeded_round();
    for pair in 0..8 {
        round.handle_select(pair * 2);
        round.handle_select(pair * 2 + 1);
        run_ms(&mut round, 160);
    }
    assert!(round.is_complete());
    let frozen = round.elapsed_ms();
    run_ms(&mut round, 5000);
    assert_eq!(round.elapsed_ms(), frozen);
    assert!(!round.handle_select(0));
}

#[test]
fn prebuilt_board_must_match_grid_size() {
    let small = Board::from_colors(2, 2, vec![RED, BLUE, BLUE, RED]).unwrap();
    let err = Round::from_board(RoundConfig::new(GridSize::Large, DisplayMode::Dark), small)
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::GridMismatch {
            side: 8,
            rows: 2,
            cols: 2
        }
    );

    let round = seeded_round();
    assert_eq!(round.grid(), GridSize::Small);
    assert_eq!(round.snapshot().rows, GridSize::Small.side());
    assert_eq!(round.seed(), None);
}
