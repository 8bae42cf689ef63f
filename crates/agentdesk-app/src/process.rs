//! Message processing: runs the update loop and dispatches actions

use tokio::sync::mpsc;

use crate::handler::{self, UpdateResult};
use crate::message::Message;
use crate::state::AppState;
use crate::timers::Timers;

use super::actions::handle_action;

/// Process a message through the TEA update function, following every
/// follow-up message until the chain settles.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    timers: &mut Timers,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let UpdateResult { message, action } = handler::update(state, m);

        if let Some(action) = action {
            handle_action(action, msg_tx, timers);
        }

        msg = message;
    }
}
