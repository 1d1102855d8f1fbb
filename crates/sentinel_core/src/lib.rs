//! Sentinel core: pure command/poll state machine and markup reconciler.
mod effect;
mod msg;
mod render;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{CommandReply, DashboardSnapshot, HistoryRecord, Msg, TransportFailure};
pub use render::{render_history, STATUS_SUCCESS_MARKER, TABLE_COLUMNS};
pub use state::{
    AppState, CheckRequestId, Notice, NoticeTone, StatusLine, CHECK_BUSY_LABEL, CHECK_IDLE_LABEL,
    CHECK_WAITING_TEXT, CONNECTIVITY_FAILURE_TEXT, LISTING_SENDING_TEXT, SYNC_ACK_TEXT,
    SYNC_BUSY_LABEL, SYNC_CONFIRM_TEXT, SYNC_IDLE_LABEL,
};
pub use update::{update, SYNC_COOLDOWN};
pub use view_model::{AppViewModel, TriggerView};
