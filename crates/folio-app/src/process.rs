//! Message processing
//!
//! Runs a message through the TEA update function, following up on chained
//! messages and performing the resulting actions.

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, state);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
