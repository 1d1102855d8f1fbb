use crate::state::CheckRequestId;

/// Uniform `{status, msg}` envelope returned by the command endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub status: String,
    pub msg: Option<String>,
}

impl CommandReply {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// A network, timeout, or decode failure; the detail string is diagnostic
/// only and never shown verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub detail: String,
}

impl TransportFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// One completed cross-platform price evaluation, exactly as the backend
/// reported it. Ordering is backend-determined; the client never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryRecord {
    pub time: Option<String>,
    pub name: String,
    pub rating: Option<String>,
    pub sk_price: String,
    pub py_price: String,
    pub profit: String,
    pub roi: String,
    pub status: String,
    pub reason: Option<String>,
    pub url: String,
}

/// Wholesale replacement of the backend's current cycle state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardSnapshot {
    pub current_mission: String,
    pub scanned_count: u64,
    pub history: Vec<HistoryRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User activated the sync-all trigger.
    SyncAllClicked,
    /// User answered yes to the sync confirmation prompt.
    SyncAllConfirmed,
    /// User answered no; must leave no trace.
    SyncAllDeclined,
    /// The `/api/sync_all` request completed.
    SyncAllResponded(Result<CommandReply, TransportFailure>),
    /// The fixed post-invocation cooldown ran out.
    SyncCooldownElapsed,
    /// User submitted the manual listing form; fields are free text.
    ListingSubmitted {
        game: String,
        key: String,
        price: String,
    },
    /// The `/web_post` request completed.
    ListingResponded(Result<CommandReply, TransportFailure>),
    /// User submitted a game name for a profit check.
    ProfitCheckSubmitted(String),
    /// The `/check` request completed; `result` carries the verbatim report.
    ProfitCheckResponded {
        request: CheckRequestId,
        result: Result<String, TransportFailure>,
    },
    /// Poll timer fired (the host fires the first one at startup).
    PollTick,
    /// A `/api/history` poll succeeded. Failed polls never become messages.
    HistoryArrived(DashboardSnapshot),
    /// Fallback for placeholder wiring.
    NoOp,
}
