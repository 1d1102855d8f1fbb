use std::sync::Once;

use sentinel_core::{
    update, AppState, DashboardSnapshot, Effect, HistoryRecord, Msg,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(sentinel_logging::initialize_for_tests);
}

fn record(name: &str) -> HistoryRecord {
    HistoryRecord {
        time: Some("21:14:05".to_string()),
        name: name.to_string(),
        rating: Some("92%".to_string()),
        sk_price: "¥120".to_string(),
        py_price: "¥98".to_string(),
        profit: "¥22".to_string(),
        roi: "18%".to_string(),
        status: "✅ arbitrage".to_string(),
        reason: None,
        url: "https://example.com/listing/1".to_string(),
    }
}

fn snapshot(mission: &str, count: u64, history: Vec<HistoryRecord>) -> DashboardSnapshot {
    DashboardSnapshot {
        current_mission: mission.to_string(),
        scanned_count: count,
        history,
    }
}

#[test]
fn poll_tick_emits_exactly_one_fetch() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::PollTick);
    assert_eq!(effects, vec![Effect::FetchHistory]);
}

#[test]
fn snapshot_updates_header_and_mounts_table() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(
        state,
        Msg::HistoryArrived(snapshot("full-discount sweep", 3, vec![record("Elden Ring")])),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.current_mission, "full-discount sweep");
    assert_eq!(view.scan_count_line, "scan #3");
    assert_eq!(view.table_revision, 1);
    assert!(view.table_markup.contains("Elden Ring"));
    assert!(state.consume_dirty());
}

#[test]
fn unchanged_snapshot_does_not_rewrite_mounted_table() {
    init_logging();
    let state = AppState::new();
    let first = snapshot("cruise", 5, vec![record("Elden Ring")]);
    let second = first.clone();

    let (mut state, _) = update(state, Msg::HistoryArrived(first));
    assert!(state.consume_dirty());
    let revision = state.view().table_revision;

    let (mut state, _) = update(state, Msg::HistoryArrived(second));

    // Identical payload: no write, no dirty view, no revision bump.
    assert_eq!(state.view().table_revision, revision);
    assert!(!state.consume_dirty());
}

#[test]
fn scalar_change_alone_does_not_touch_the_table() {
    init_logging();
    let state = AppState::new();
    let history = vec![record("Elden Ring")];

    let (state, _) = update(
        state,
        Msg::HistoryArrived(snapshot("cruise", 5, history.clone())),
    );
    let revision = state.view().table_revision;

    let (mut state, _) = update(
        state,
        Msg::HistoryArrived(snapshot("cooling down", 6, history)),
    );

    let view = state.view();
    assert_eq!(view.current_mission, "cooling down");
    assert_eq!(view.scan_count_line, "scan #6");
    assert_eq!(view.table_revision, revision);
    assert!(state.consume_dirty());
}

#[test]
fn history_growth_replaces_the_table_once() {
    init_logging();
    let state = AppState::new();

    let (state, _) = update(
        state,
        Msg::HistoryArrived(snapshot("cruise", 1, vec![record("Elden Ring")])),
    );
    let (state, _) = update(
        state,
        Msg::HistoryArrived(snapshot(
            "cruise",
            1,
            vec![record("Elden Ring"), record("Hades II")],
        )),
    );

    assert_eq!(state.view().table_revision, 2);
    assert!(state.view().table_markup.contains("Hades II"));
}

#[test]
fn rows_survive_ticks_without_messages() {
    init_logging();
    // A failed poll never reaches the core; the host drops it. The mounted
    // markup therefore persists untouched until the next successful tick.
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::HistoryArrived(snapshot("cruise", 2, vec![record("Elden Ring")])),
    );
    let markup = state.view().table_markup;

    let (state, effects) = update(state, Msg::PollTick);
    assert_eq!(effects, vec![Effect::FetchHistory]);
    assert_eq!(state.view().table_markup, markup);

    let (state, _) = update(
        state,
        Msg::HistoryArrived(snapshot("cruise", 3, vec![record("Elden Ring")])),
    );
    assert_eq!(state.view().table_markup, markup);
}
