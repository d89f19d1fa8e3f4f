// Chat core: the one entry point both surfaces (web and terminal) call per
// conversation turn.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::completion::{CompletionClient, CompletionError};
use crate::messages::{build_messages, Turn};

/// The assistant core: the system prompt built once at startup plus the
/// completion client. Stateless per request; the caller owns the history.
pub struct Assistant {
    system_prompt: Arc<String>,
    client: CompletionClient,
}

impl Assistant {
    pub fn new(system_prompt: Arc<String>, client: CompletionClient) -> Self {
        Self {
            system_prompt,
            client,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Answer one message given the conversation so far.
    ///
    /// Blocks the current turn until the provider responds; errors are
    /// classified (`CompletionError`) for the surface to present.
    pub async fn respond(
        &self,
        message: &str,
        history: &[Turn],
    ) -> Result<String, CompletionError> {
        let messages = build_messages(&self.system_prompt, history, message);
        debug!(turns = history.len(), messages = messages.len(), "Built message sequence");
        self.client.complete(&messages).await
    }
}

/// Terminal chat session: same core as the web surface, with the history held
/// locally and re-supplied on every turn.
pub async fn run_terminal_chat(assistant: &Assistant) -> Result<()> {
    info!("Starting terminal chat session");
    println!("MEU Logistics Assistant. Ask a question, or press Ctrl-D to exit.");

    let stdin = io::stdin();
    let mut history: Vec<Turn> = Vec::new();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?
            == 0
        {
            break; // EOF
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        let reply = assistant
            .respond(message, &history)
            .await
            .context("Completion request failed")?;
        println!("{reply}\n");

        history.push(Turn {
            user: message.to_string(),
            assistant: reply,
        });
    }

    info!("Terminal chat session finished");
    Ok(())
}
