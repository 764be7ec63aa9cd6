//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: entry point that owns the terminal for the process lifetime
//! - `run_loop`: main event loop processing terminal events and task
//!   completions

use tokio::sync::mpsc;

use cadvisor_app::actions;
use cadvisor_app::config::Settings;
use cadvisor_app::handler::{update, Task, UpdateAction};
use cadvisor_app::message::Message;
use cadvisor_app::state::AppState;
use cadvisor_app::AdvisorClient;
use cadvisor_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI application until the user quits.
pub async fn run(settings: Settings, client: AdvisorClient) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new(settings);

    // Unified message channel for background task completions
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    // Probe the service once so the home view can show its status
    actions::handle_action(
        UpdateAction::SpawnTask(Task::CheckHealth),
        client.clone(),
        msg_tx.clone(),
    );

    // Run the main loop
    let result = run_loop(&mut term, &mut state, &mut msg_rx, &msg_tx, &client);

    // Restore terminal
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    client: &AdvisorClient,
) -> Result<()> {
    while !state.should_quit() {
        // Process completions from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, client, msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (blocks up to the tick timeout)
        if let Some(message) = event::poll()? {
            process_message(state, message, client, msg_tx);
        }
    }

    info!("quitting");
    Ok(())
}

/// Feed one message through update(), spawning any requested background
/// task and chasing follow-up messages until the chain settles.
fn process_message(
    state: &mut AppState,
    message: Message,
    client: &AdvisorClient,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);

        if let Some(action) = result.action {
            actions::handle_action(action, client.clone(), msg_tx.clone());
        }
        next = result.message;
    }
}
