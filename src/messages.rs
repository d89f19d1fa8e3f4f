//! Conversation turns and the role-tagged message sequence sent to the
//! completion provider.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message on the completion wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// One completed exchange: a user message and the assistant's reply.
///
/// The chat surface owns the history and supplies it fresh on every request;
/// the core never stores or mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

/// Flatten the conversation into the provider message list:
/// system prompt, then each turn as a user/assistant pair in order, then the
/// new user message. A history of N turns always yields 2N + 2 messages.
pub fn build_messages(
    system_prompt: &str,
    history: &[Turn],
    new_message: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(2 * history.len() + 2);
    messages.push(ChatMessage::new(Role::System, system_prompt));
    for turn in history {
        messages.push(ChatMessage::new(Role::User, turn.user.clone()));
        messages.push(ChatMessage::new(Role::Assistant, turn.assistant.clone()));
    }
    messages.push(ChatMessage::new(Role::User, new_message));
    messages
}
