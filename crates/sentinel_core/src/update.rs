use std::time::Duration;

use crate::state::{CONNECTIVITY_FAILURE_TEXT, LISTING_SENDING_TEXT, SYNC_ACK_TEXT};
use crate::{AppState, Effect, Msg, NoticeTone};

/// Fixed re-enable delay for the sync trigger, measured from invocation.
pub const SYNC_COOLDOWN: Duration = Duration::from_millis(5000);

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SyncAllClicked => {
            // The disabled trigger is the only duplicate-submission guard.
            if state.sync_busy() {
                return (state, Vec::new());
            }
            vec![Effect::ConfirmSyncAll]
        }
        Msg::SyncAllConfirmed => {
            if state.sync_busy() {
                return (state, Vec::new());
            }
            state.begin_sync();
            // The cooldown arms now, not on completion: the trigger comes
            // back even if the request is still pending.
            vec![
                Effect::PostSyncAll,
                Effect::StartSyncCooldown {
                    duration: SYNC_COOLDOWN,
                },
            ]
        }
        Msg::SyncAllDeclined => Vec::new(),
        Msg::SyncAllResponded(result) => {
            match result {
                Ok(reply) if reply.is_success() => {
                    let text = reply.msg.unwrap_or_else(|| SYNC_ACK_TEXT.to_string());
                    state.set_notice(text, NoticeTone::Success);
                }
                Ok(reply) => {
                    let msg = reply.msg.unwrap_or_default();
                    state.set_notice(format!("❌ Failed: {msg}"), NoticeTone::Failure);
                }
                Err(_) => {
                    state.set_notice(CONNECTIVITY_FAILURE_TEXT, NoticeTone::Failure);
                }
            }
            Vec::new()
        }
        Msg::SyncCooldownElapsed => {
            state.end_sync_cooldown();
            Vec::new()
        }
        Msg::ListingSubmitted { game, key, price } => {
            // No guard, no validation, no cooldown; repeat submissions may
            // overlap and the backend sorts out malformed values.
            state.set_listing_status(LISTING_SENDING_TEXT, None);
            vec![Effect::PostListing { game, key, price }]
        }
        Msg::ListingResponded(result) => {
            match result {
                Ok(reply) => {
                    let tone = if reply.is_success() {
                        NoticeTone::Success
                    } else {
                        NoticeTone::Failure
                    };
                    state.set_listing_status(reply.msg.unwrap_or_default(), Some(tone));
                }
                Err(_) => {
                    state.set_listing_status(CONNECTIVITY_FAILURE_TEXT, None);
                }
            }
            Vec::new()
        }
        Msg::ProfitCheckSubmitted(name) => {
            // Empty input is a silent no-op: no request, panel untouched.
            if name.is_empty() || state.check_busy() {
                return (state, Vec::new());
            }
            let request = state.begin_check();
            vec![Effect::FetchProfitCheck { request, name }]
        }
        Msg::ProfitCheckResponded { request, result } => {
            let text = match result {
                Ok(report) => report,
                Err(_) => CONNECTIVITY_FAILURE_TEXT.to_string(),
            };
            state.finish_check(request, text);
            Vec::new()
        }
        Msg::PollTick => vec![Effect::FetchHistory],
        Msg::HistoryArrived(snapshot) => {
            state.apply_snapshot(snapshot);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
