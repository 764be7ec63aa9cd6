//! # cadvisor-client - Advisory Service Access
//!
//! HTTP client for the two advisory endpoints consumed (not implemented)
//! by this application:
//!
//! - `POST /career-advice` - one-shot profile to advice request
//! - `POST /chat` - one conversational turn with full accumulated history
//!
//! plus the service's `GET /health` probe. Outcome classification lives in
//! free functions (`classify_advice_body`, `parse_chat_body`) so the
//! request lifecycle can be tested without a live service.
//!
//! The client is transport only: input-lock discipline, stale-response
//! guards and retry policy (there is none) belong to `cadvisor-app`.

pub mod advice;
pub mod chat;
pub mod health;

pub use advice::classify_advice_body;
pub use chat::{parse_chat_body, ChatRequest};
pub use health::HealthStatus;

/// HTTP client bound to one advisory service base URL.
///
/// Cheap to clone; the underlying `reqwest::Client` is a shared connection
/// pool.
#[derive(Debug, Clone)]
pub struct AdvisorClient {
    client: reqwest::Client,
    base_url: String,
}

impl AdvisorClient {
    /// Create a client for the given base URL (trailing slashes stripped).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = AdvisorClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(client.url("chat"), "http://127.0.0.1:8000/chat");
    }
}
