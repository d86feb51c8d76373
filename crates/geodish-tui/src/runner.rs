//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use geodish_api::GeoDishClient;
use geodish_app::config::Settings;
use geodish_app::handler::UpdateAction;
use geodish_app::message::Message;
use geodish_app::{actions, update, ActionContext, AppState};
use geodish_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application.
///
/// Owns the terminal for its whole lifetime and restores it on exit.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let client = GeoDishClient::new(&settings.server.base_url)
        .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

    let mut term = ratatui::init();

    let (msg_tx, msg_rx) = mpsc::unbounded_channel::<Message>();
    let ctx = ActionContext {
        client,
        user_id: settings.server.user_id.clone(),
        msg_tx,
    };

    let mut state = AppState::new(settings);
    info!(base_url = %ctx.client.base_url(), user = %ctx.user_id, "GeoDish starting");

    // Kick off the initial loads before the first frame
    actions::handle_action(&ctx, UpdateAction::LoadCountries, &state.settings);
    actions::handle_action(&ctx, UpdateAction::LoadRecipes, &state.settings);

    let result = run_loop(&mut term, &mut state, msg_rx, &ctx);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::UnboundedReceiver<Message>,
    ctx: &ActionContext,
) -> Result<()> {
    while !state.should_quit {
        // Drain gateway results before drawing
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, ctx);
        }

        // Tick every iteration so alert expiry does not wait for an
        // input pause
        process_message(state, Message::Tick, ctx);

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, ctx);
        }
    }

    Ok(())
}

/// Fold a message into the state, chaining follow-up messages and
/// dispatching side-effect actions.
fn process_message(state: &mut AppState, message: Message, ctx: &ActionContext) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);
        if let Some(action) = result.action {
            actions::handle_action(ctx, action, &state.settings);
        }
        next = result.message;
    }
}
