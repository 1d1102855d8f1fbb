use std::time::Duration;

use crate::state::CheckRequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the blocking yes/no prompt for the sync command.
    ConfirmSyncAll,
    /// Issue `POST /api/sync_all`.
    PostSyncAll,
    /// Arm the unconditional re-enable timer for the sync trigger.
    StartSyncCooldown { duration: Duration },
    /// Issue `POST /web_post` with the submitted fields.
    PostListing {
        game: String,
        key: String,
        price: String,
    },
    /// Issue `GET /check?name=...`; the id ties the response to this request.
    FetchProfitCheck {
        request: CheckRequestId,
        name: String,
    },
    /// Issue `GET /api/history`.
    FetchHistory,
}
