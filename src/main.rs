//! Intake Chat - terminal client for the guided document-intake conversation
//!
//! Drives a session against the conversation backend: sends typed text or
//! uploaded documents, renders the replies, and tracks which document the
//! backend expects next.

mod artifact;
mod backend;
mod config;
mod controller;
mod session;
mod terminal;

use artifact::{encode_file, ArtifactError};
use backend::{HttpBackend, LoggingBackend};
use config::ClientConfig;
use controller::{TurnController, UserInput};
use terminal::{Command, TerminalRenderer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; stderr keeps it out of the conversation on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intake_chat=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Configuration
    let config = ClientConfig::from_env();
    tracing::info!(
        endpoint = %config.endpoint,
        user_id = %config.user_id,
        timeout = ?config.timeout,
        "Starting intake session"
    );

    let backend = LoggingBackend::new(HttpBackend::new(&config.endpoint, config.timeout)?);
    let controller = TurnController::new(backend, &config.user_id, &config.greeting);

    // Render instructions as they are emitted so the busy indicator shows
    // while the backend is thinking
    let mut render_rx = controller.subscribe();
    let render_task = tokio::spawn(async move {
        let mut renderer = TerminalRenderer::new(std::io::stdout());
        loop {
            match render_rx.recv().await {
                Ok(instruction) => {
                    if let Err(e) = renderer.apply(&instruction) {
                        tracing::error!(error = %e, "Failed to write to terminal");
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Renderer fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    if let Err(e) = controller.start().await {
        tracing::warn!(error = %e, "Bootstrap turn refused");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = match Command::parse(&line) {
            None => continue,
            Some(Command::Quit) => break,
            Some(Command::Say(input)) => input,
            Some(Command::Upload(path)) => {
                match encode_file(path.as_deref(), config.max_artifact_bytes).await {
                    Ok(uri) => UserInput::artifact(uri),
                    Err(ArtifactError::NoArtifactSelected) => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, "Artifact rejected");
                        eprintln!("{e}");
                        continue;
                    }
                }
            }
        };

        if let Err(e) = controller.submit(input).await {
            tracing::warn!(error = %e, "Turn refused");
        }
    }

    // Closing the channel lets the renderer drain and exit
    drop(controller);
    render_task.await?;

    Ok(())
}
