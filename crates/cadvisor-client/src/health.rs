//! Service health probe

use serde::Deserialize;

use cadvisor_core::prelude::*;

use crate::AdvisorClient;

/// Result of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub ok: bool,
    /// Model identifier the service is configured with.
    #[serde(default)]
    pub model: Option<String>,
}

impl AdvisorClient {
    /// Probe the advisory service once.
    ///
    /// Used for the home-view online indicator only; a failure is
    /// non-fatal and never blocks the form flow.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.url("health");

        let resp = self
            .http()
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::connection(&url, e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Error::api(resp.status().as_u16(), String::new()));
        }

        resp.json::<HealthStatus>()
            .await
            .map_err(|e| Error::connection(&url, e.to_string()))
    }
}
