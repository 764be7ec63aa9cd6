//! One conversational turn against the chat endpoint

use serde::{Deserialize, Serialize};

use cadvisor_core::prelude::*;
use cadvisor_core::ConversationTurn;

use crate::AdvisorClient;

/// Wire body for `POST /chat`: the full accumulated history plus the new
/// message. The history already contains the new message as its final
/// user turn; the service expects to receive both.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub history: &'a [ConversationTurn],
    pub new_message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<String>,
}

impl AdvisorClient {
    /// Send one chat turn.
    ///
    /// Returns `Ok(None)` when the service answered successfully but
    /// without a reply (it reports its own failures that way); the caller
    /// substitutes the fixed fallback text and keeps it as context. At
    /// most one call is in flight per conversation session, enforced by
    /// the input lock in `cadvisor-app`, not here.
    pub async fn send_turn(
        &self,
        history: &[ConversationTurn],
        new_message: &str,
    ) -> Result<Option<String>> {
        let url = self.url("chat");
        debug!("POST {url} ({} turns of context)", history.len());

        let resp = self
            .http()
            .post(&url)
            .json(&ChatRequest {
                history,
                new_message,
            })
            .send()
            .await
            .map_err(|e| Error::connection(&url, e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::connection(&url, e.to_string()))?;

        if !status.is_success() {
            warn!("chat returned {status}");
            return Err(Error::api(status.as_u16(), body));
        }

        parse_chat_body(&body)
    }
}

/// Parse a transport-level successful chat body into an optional reply.
pub fn parse_chat_body(body: &str) -> Result<Option<String>> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| Error::api(200, format!("{e}: {body}")))?;
    Ok(response.reply)
}
