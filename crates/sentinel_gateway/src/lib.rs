//! Sentinel gateway: async HTTP client for the backend command endpoints.
mod client;
mod handle;
mod types;

pub use client::{Gateway, GatewaySettings, ReqwestGateway};
pub use handle::GatewayHandle;
pub use types::{
    CheckReport, CommandEnvelope, DashboardWire, GatewayError, GatewayEvent, WireHistoryRecord,
};
