pub mod chat;
pub mod completion;
pub mod constants;
pub mod dataset;
pub mod messages;
pub mod prompt;
pub mod web_server;

pub use chat::Assistant;
pub use completion::{CompletionClient, CompletionError};
pub use messages::{build_messages, ChatMessage, Role, Turn};
pub use prompt::build_system_prompt;
