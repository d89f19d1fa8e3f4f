use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use meulog::chat::{self, Assistant};
use meulog::completion::CompletionClient;
use meulog::{constants, dataset, prompt, web_server};

// Define the command-line interface structure using clap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Start the web chat server.
    Serve {
        #[arg(long, default_value_t = 9900, help = "Port for the web server.")]
        port: u16,
        #[arg(long, help = "Path to the logistics data CSV (defaults to MEU_DATA_PATH).")]
        data: Option<PathBuf>,
    },
    /// Ask questions from the terminal instead of the browser.
    Chat {
        #[arg(long, help = "Path to the logistics data CSV (defaults to MEU_DATA_PATH).")]
        data: Option<PathBuf>,
    },
}

/// Load the dataset and build the process-wide assistant.
///
/// The system prompt is constructed exactly once here and shared read-only
/// for the rest of the process lifetime.
fn build_assistant(data: Option<PathBuf>) -> Result<Arc<Assistant>> {
    let path = data.unwrap_or_else(|| PathBuf::from(constants::DATA_PATH.as_str()));
    let dataset =
        dataset::load_dataset(&path).context("Failed to load logistics dataset")?;
    let system_prompt = Arc::new(prompt::build_system_prompt(&dataset));
    Ok(Arc::new(Assistant::new(
        system_prompt,
        CompletionClient::from_env(),
    )))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (for environment variables like API keys)
    dotenvy::dotenv().ok();

    // Reads log level from RUST_LOG environment variable (e.g., RUST_LOG=info,meulog=debug)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!("MEU logistics assistant starting with command: {:?}", cli.command);

    match cli.command {
        Commands::Serve { port, data } => {
            let assistant = build_assistant(data)?;

            let mut server_handle = tokio::spawn(async move {
                if let Err(e) = web_server::start_web_server(port, assistant).await {
                    error!("Web server failed: {:?}", e);
                }
            });

            // Wait for Ctrl-C or the server task ending, whichever comes first
            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);

            tokio::select! {
                _ = &mut ctrl_c => {
                    info!("Ctrl-C received, initiating shutdown...");
                }
                res = &mut server_handle => {
                    match res {
                        Ok(_) => info!("Web server task completed unexpectedly."),
                        Err(e) if e.is_panic() => error!("Web server task panicked: {:?}", e),
                        Err(e) => error!("Web server task failed: {:?}", e),
                    }
                }
            }

            if !server_handle.is_finished() {
                server_handle.abort();
            }
            info!("Shutdown complete.");
        }
        Commands::Chat { data } => {
            let assistant = build_assistant(data)?;
            chat::run_terminal_chat(&assistant)
                .await
                .context("Chat session failed")?;
            info!("Chat session finished.");
        }
    }

    Ok(())
}
