//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use tracing::{debug, warn};

use cadvisor_client::AdvisorClient;

use crate::handler::{Task, UpdateAction};
use crate::message::Message;

/// Execute an action by spawning a background task.
///
/// Each task performs exactly one HTTP request and reports back with a
/// single completion message; the update loop decides what (if anything)
/// that completion still means.
pub fn handle_action(action: UpdateAction, client: AdvisorClient, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, client, msg_tx).await;
            });
        }
    }
}

async fn execute_task(task: Task, client: AdvisorClient, msg_tx: mpsc::Sender<Message>) {
    let message = match task {
        Task::RequestAdvice { epoch, profile } => {
            let result = client.request_advice(&profile).await;
            Message::AdviceArrived {
                epoch,
                profile,
                result,
            }
        }

        Task::SendChat {
            epoch,
            history,
            new_message,
        } => {
            let result = client.send_turn(&history, &new_message).await;
            Message::ChatReplyArrived { epoch, result }
        }

        Task::CheckHealth => match client.health().await {
            Ok(status) => Message::HealthChecked {
                ok: status.ok,
                model: status.model,
            },
            Err(e) => {
                debug!("health probe failed: {e}");
                Message::HealthChecked {
                    ok: false,
                    model: None,
                }
            }
        },
    };

    if msg_tx.send(message).await.is_err() {
        warn!("message channel closed before task completion");
    }
}
