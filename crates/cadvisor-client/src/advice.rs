//! One-shot profile to advice request

use cadvisor_core::prelude::*;
use cadvisor_core::{AdvicePayload, Profile};

use crate::AdvisorClient;

impl AdvisorClient {
    /// Request career advice for one profile.
    ///
    /// The profile is the entire request body. At most one call is made
    /// per form submission; the caller abandons the submission on any
    /// failure, so there is nothing to retry here.
    pub async fn request_advice(&self, profile: &Profile) -> Result<AdvicePayload> {
        let url = self.url("career-advice");
        debug!("POST {url}");

        let resp = self
            .http()
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(|e| Error::connection(&url, e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::connection(&url, e.to_string()))?;

        if !status.is_success() {
            warn!("career-advice returned {status}");
            return Err(Error::api(status.as_u16(), body));
        }

        classify_advice_body(&body)
    }
}

/// Classify a transport-level successful response body.
///
/// The service reports domain-level failures through a 200 by attaching an
/// `error` field (and usually the model's `raw` output) to the payload;
/// such a body must fail the call even though the transport succeeded. The
/// raw text is preferred as the diagnostic because the `error` field alone
/// ("Model returned invalid JSON") says nothing about what the model did.
pub fn classify_advice_body(body: &str) -> Result<AdvicePayload> {
    let payload: AdvicePayload = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("unparseable advice body: {e}");
            return Err(Error::api(200, body.to_string()));
        }
    };

    if let Some(error) = payload.error {
        let message = payload.raw.unwrap_or(error);
        return Err(Error::advisor(message));
    }

    Ok(payload)
}
