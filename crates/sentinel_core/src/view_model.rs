use crate::state::StatusLine;

/// State of one trigger control: the guard against duplicate submission is
/// exactly `enabled == false`, not a semaphore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    pub enabled: bool,
    pub label: &'static str,
    pub dimmed: bool,
}

/// Full render snapshot derived from `AppState::view`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub sync_trigger: TriggerView,
    pub check_trigger: TriggerView,
    pub listing_status: Option<StatusLine>,
    pub panel_visible: bool,
    pub panel_text: String,
    pub current_mission: String,
    pub scan_count_line: String,
    /// Mounted table-body markup; only replaced when it textually changed.
    pub table_markup: String,
    /// Bumps once per actual replacement; the no-op-write detector.
    pub table_revision: u64,
    pub superseded_checks: u64,
    pub dirty: bool,
}
