//! Conversation history shared between the card and the view

use std::sync::{Arc, RwLock};

use workdeck_core::ChatMessage;

use super::ConversationStore;

/// Oldest messages are dropped once `limit` is reached
#[derive(Debug, Clone)]
pub struct SharedConversation {
    messages: Arc<RwLock<Vec<ChatMessage>>>,
    limit: usize,
}

impl SharedConversation {
    pub fn new(limit: usize) -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            limit: limit.max(1),
        }
    }

    /// Copy of the current history, oldest first
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        match self.messages.read() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.messages.read() {
            Ok(messages) => messages.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ConversationStore for SharedConversation {
    fn add_user_message(&self, message: ChatMessage) {
        let mut messages = match self.messages.write() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(message);
        if messages.len() > self.limit {
            let excess = messages.len() - self.limit;
            messages.drain(..excess);
        }
    }
}
