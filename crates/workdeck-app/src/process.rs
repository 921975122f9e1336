//! Message processing through the TEA update loop

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::services::Services;
use crate::state::AppState;

/// Process a message and every follow-up it produces, dispatching actions
pub fn process_message(
    state: &mut AppState,
    message: Message,
    services: &Services,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m, services);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone());
        }

        msg = result.message;
    }
}
