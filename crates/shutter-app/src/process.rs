//! Message processing: runs the TEA update loop and dispatches its actions

use std::path::Path;

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::UnboundedSender<Message>,
    config_path: &Path,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), config_path);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
