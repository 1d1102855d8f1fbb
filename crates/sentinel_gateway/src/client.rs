use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::types::{CheckReport, CommandEnvelope, DashboardWire, GatewayError};

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl GatewaySettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The four backend calls the dashboard relies on. A trait seam so tests
/// and the handle can substitute a fake backend.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    async fn sync_all(&self) -> Result<CommandEnvelope, GatewayError>;
    async fn post_listing(
        &self,
        game: &str,
        key: &str,
        price: &str,
    ) -> Result<CommandEnvelope, GatewayError>;
    async fn check_profit(&self, name: &str) -> Result<String, GatewayError>;
    async fn fetch_history(&self) -> Result<DashboardWire, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Gateway for ReqwestGateway {
    async fn sync_all(&self) -> Result<CommandEnvelope, GatewayError> {
        let response = self
            .client
            .post(self.endpoint("/api/sync_all"))
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::decode(response).await
    }

    async fn post_listing(
        &self,
        game: &str,
        key: &str,
        price: &str,
    ) -> Result<CommandEnvelope, GatewayError> {
        let body = serde_json::json!({
            "game": game,
            "key": key,
            "price": price,
        });
        let response = self
            .client
            .post(self.endpoint("/web_post"))
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::decode(response).await
    }

    async fn check_profit(&self, name: &str) -> Result<String, GatewayError> {
        let response = self
            .client
            .get(self.endpoint("/check"))
            .query(&[("name", name)])
            .send()
            .await
            .map_err(map_transport_error)?;
        let report: CheckReport = Self::decode(response).await?;
        Ok(report.report)
    }

    async fn fetch_history(&self) -> Result<DashboardWire, GatewayError> {
        let response = self
            .client
            .get(self.endpoint("/api/history"))
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::decode(response).await
    }
}

fn map_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Timeout(err.to_string());
    }
    if err.is_decode() {
        return GatewayError::Decode(err.to_string());
    }
    GatewayError::Network(err.to_string())
}
