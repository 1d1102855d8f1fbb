use serde::Deserialize;
use thiserror::Error;

/// Uniform `{status, msg}` reply envelope of the command endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandEnvelope {
    pub status: String,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Reply of `GET /check`; the report is opaque text shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckReport {
    pub report: String,
}

/// One history record as the backend serializes it. The optional fields
/// really do go missing in practice; extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireHistoryRecord {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub sk_price: String,
    #[serde(default)]
    pub py_price: String,
    #[serde(default)]
    pub profit: String,
    #[serde(default)]
    pub roi: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub url: String,
}

/// Reply of `GET /api/history`. The backend's state blob carries more
/// fields (`last_update`, `is_running`, `active_game`); only these three
/// are part of the client contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardWire {
    pub current_mission: String,
    pub scanned_count: u64,
    #[serde(default)]
    pub history: Vec<WireHistoryRecord>,
}

/// Transport-level failure taxonomy. Logical failures travel inside the
/// envelope; a non-2xx status never carries a decodable envelope here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("http status {status}")]
    HttpStatus { status: u16 },
    #[error("decode error: {0}")]
    Decode(String),
}

/// Completion events reported back through the gateway handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    SyncAllCompleted {
        result: Result<CommandEnvelope, GatewayError>,
    },
    ListingCompleted {
        result: Result<CommandEnvelope, GatewayError>,
    },
    CheckCompleted {
        request: u64,
        result: Result<String, GatewayError>,
    },
    HistoryFetched {
        result: Result<DashboardWire, GatewayError>,
    },
}
