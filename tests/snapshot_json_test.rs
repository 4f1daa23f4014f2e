use tui_memory::core::{Round, RoundConfig};
use tui_memory::types::{DisplayMode, GridSize, RoundEvent, TICK_MS};

fn round() -> Round {
    Round::new(RoundConfig::new(GridSize::Small, DisplayMode::Light).with_seed(42)).unwrap()
}

#[test]
fn snapshot_serializes_to_json() {
    let mut r = round();
    r.handle_select(3);
    r.advance(TICK_MS * 5);

    let v = serde_json::to_value(r.snapshot()).unwrap();
    assert_eq!(v["seed"], 42);
    assert_eq!(v["grid"], "Small");
    assert_eq!(v["rows"], 4);
    assert_eq!(v["cards"].as_array().unwrap().len(), 16);
    assert_eq!(v["pending"][0], 3);
    assert!(v["pending"][1].is_null());
    assert_eq!(v["accepting_input"], true);

    let card = &v["cards"][3];
    assert_eq!(card["state"]["state"], "flipping");
    assert_eq!(card["state"]["progress_ms"], 80);
    assert!(card["color"]["r"].is_u64());
}

#[test]
fn events_use_tagged_snake_case() {
    let v = serde_json::to_value(RoundEvent::Mismatch { first: 1, second: 5 }).unwrap();
    assert_eq!(v, serde_json::json!({"type": "mismatch", "first": 1, "second": 5}));

    let back: RoundEvent = serde_json::from_value(serde_json::json!({"type": "complete"})).unwrap();
    assert_eq!(back, RoundEvent::Complete);
}

#[test]
fn snapshot_into_reuses_buffer() {
    let r = round();
    let mut snap = r.snapshot();
    let cap = snap.cards.capacity();
    r.snapshot_into(&mut snap);
    assert_eq!(snap.cards.capacity(), cap);
    assert_eq!(snap, r.snapshot());
}
