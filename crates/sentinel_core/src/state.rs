use crate::msg::DashboardSnapshot;
use crate::render::render_history;
use crate::view_model::{AppViewModel, TriggerView};

pub type CheckRequestId = u64;

pub const SYNC_IDLE_LABEL: &str = "🔄 Sync all platforms";
pub const SYNC_BUSY_LABEL: &str = "⏳ Command queued...";
pub const SYNC_CONFIRM_TEXT: &str =
    "⚠️ Sync takes over the browser for a full audit run (1-3 minutes). Continue?";
pub const SYNC_ACK_TEXT: &str =
    "🛰️ Command dispatched! The mothership syncs in the background; a receipt follows.";

pub const CHECK_IDLE_LABEL: &str = "Start recon";
pub const CHECK_BUSY_LABEL: &str = "🛰️ Tasking satellites...";
pub const CHECK_WAITING_TEXT: &str =
    "Calling multi-platform interfaces and running version matching, hold on...";

pub const LISTING_SENDING_TEXT: &str = "📡 Sending command...";
pub const CONNECTIVITY_FAILURE_TEXT: &str = "🚨 Signal lost: cannot reach the command server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Failure,
}

/// One-shot acknowledgment or error surfaced to the invoking user only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: NoticeTone,
}

/// Persistent status line under the listing form. `tone: None` renders
/// neutral (the "sending" note and the connectivity fallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Option<NoticeTone>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    sync_busy: bool,
    check_busy: bool,
    notice: Option<Notice>,
    listing_status: Option<StatusLine>,
    panel_visible: bool,
    panel_text: String,
    current_mission: String,
    scanned_count: u64,
    table_markup: String,
    table_revision: u64,
    next_check_request: CheckRequestId,
    latest_check_request: Option<CheckRequestId>,
    superseded_checks: u64,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sync_busy: false,
            check_busy: false,
            notice: None,
            listing_status: None,
            panel_visible: false,
            panel_text: String::new(),
            current_mission: String::new(),
            scanned_count: 0,
            table_markup: String::new(),
            table_revision: 0,
            next_check_request: 1,
            latest_check_request: None,
            superseded_checks: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            sync_trigger: TriggerView {
                enabled: !self.sync_busy,
                label: if self.sync_busy {
                    SYNC_BUSY_LABEL
                } else {
                    SYNC_IDLE_LABEL
                },
                dimmed: self.sync_busy,
            },
            check_trigger: TriggerView {
                enabled: !self.check_busy,
                label: if self.check_busy {
                    CHECK_BUSY_LABEL
                } else {
                    CHECK_IDLE_LABEL
                },
                dimmed: false,
            },
            listing_status: self.listing_status.clone(),
            panel_visible: self.panel_visible,
            panel_text: self.panel_text.clone(),
            current_mission: self.current_mission.clone(),
            scan_count_line: format!("scan #{}", self.scanned_count),
            table_markup: self.table_markup.clone(),
            table_revision: self.table_revision,
            superseded_checks: self.superseded_checks,
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag; the host coalesces renders on it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Returns and clears the one-shot notice (the alert analog).
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn sync_busy(&self) -> bool {
        self.sync_busy
    }

    pub fn check_busy(&self) -> bool {
        self.check_busy
    }

    pub(crate) fn begin_sync(&mut self) {
        self.sync_busy = true;
        self.dirty = true;
    }

    /// Unconditional restore; runs whether or not a response ever arrived.
    pub(crate) fn end_sync_cooldown(&mut self) {
        self.sync_busy = false;
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, text: impl Into<String>, tone: NoticeTone) {
        self.notice = Some(Notice {
            text: text.into(),
            tone,
        });
        self.dirty = true;
    }

    pub(crate) fn set_listing_status(&mut self, text: impl Into<String>, tone: Option<NoticeTone>) {
        self.listing_status = Some(StatusLine {
            text: text.into(),
            tone,
        });
        self.dirty = true;
    }

    pub(crate) fn begin_check(&mut self) -> CheckRequestId {
        let request = self.next_check_request;
        self.next_check_request += 1;
        self.latest_check_request = Some(request);
        self.check_busy = true;
        self.panel_visible = true;
        self.panel_text = CHECK_WAITING_TEXT.to_string();
        self.dirty = true;
        request
    }

    /// Applies a check outcome. A response for anything but the latest
    /// request is stale; its text still lands (the accepted race) but it
    /// is counted and does not re-enable the trigger, which belongs to
    /// the newest in-flight request.
    pub(crate) fn finish_check(&mut self, request: CheckRequestId, text: String) {
        if self.latest_check_request == Some(request) {
            self.check_busy = false;
        } else {
            self.superseded_checks += 1;
        }
        self.panel_text = text;
        self.dirty = true;
    }

    pub(crate) fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        if self.current_mission != snapshot.current_mission {
            self.current_mission = snapshot.current_mission;
            self.dirty = true;
        }
        if self.scanned_count != snapshot.scanned_count {
            self.scanned_count = snapshot.scanned_count;
            self.dirty = true;
        }
        // The string comparison is a correctness property, not an
        // optimization: unchanged data must not rewrite the mounted table.
        let markup = render_history(&snapshot.history);
        if markup != self.table_markup {
            self.table_markup = markup;
            self.table_revision += 1;
            self.dirty = true;
        }
    }
}
