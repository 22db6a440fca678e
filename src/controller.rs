//! Turn orchestration
//!
//! One turn: accept an input, call the backend, emit render instructions,
//! then advance the session state. At most one turn runs per controller.

mod input;

pub use input::{InputError, UserInput};

use crate::backend::{ChatBackend, ChatRequest};
use crate::session::{transition, RenderInstruction, SessionState};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::Instrument;

/// Capacity of the live render channel
const RENDER_CHANNEL_CAPACITY: usize = 64;

/// Reasons a turn was refused before it started
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("A turn is already in progress for this session")]
    TurnInProgress,
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Drives the intake conversation for one session
pub struct TurnController<B: ChatBackend> {
    backend: B,
    user_id: String,
    greeting: String,
    /// Held for the whole turn; a second `submit` cannot take it
    state: Mutex<SessionState>,
    render_tx: broadcast::Sender<RenderInstruction>,
}

impl<B: ChatBackend> TurnController<B> {
    pub fn new(backend: B, user_id: impl Into<String>, greeting: impl Into<String>) -> Self {
        let (render_tx, _) = broadcast::channel(RENDER_CHANNEL_CAPACITY);
        Self {
            backend,
            user_id: user_id.into(),
            greeting: greeting.into(),
            state: Mutex::new(SessionState::initial()),
            render_tx,
        }
    }

    /// Receive every instruction as it is emitted
    pub fn subscribe(&self) -> broadcast::Receiver<RenderInstruction> {
        self.render_tx.subscribe()
    }

    /// Current session state, after any in-flight turn completes
    pub async fn state(&self) -> SessionState {
        *self.state.lock().await
    }

    /// Bootstrap turn that primes the backend with the greeting
    pub async fn start(&self) -> Result<Vec<RenderInstruction>, TurnError> {
        let greeting = UserInput::text(&self.greeting)?;
        self.submit(greeting).await
    }

    /// Run one turn to completion.
    ///
    /// Refused with [`TurnError::TurnInProgress`] while another turn is
    /// outstanding. Transport failures are not errors here: they come back
    /// as a `ShowNetworkError` instruction and leave the state unchanged.
    pub async fn submit(&self, input: UserInput) -> Result<Vec<RenderInstruction>, TurnError> {
        let mut state = self
            .state
            .try_lock()
            .map_err(|_| TurnError::TurnInProgress)?;

        let turn_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!(
            "turn",
            %turn_id,
            binary = input.is_binary_artifact(),
            input_bytes = input.payload().len(),
        );

        let instructions = self.run_turn(&mut state, input).instrument(span).await;
        Ok(instructions)
    }

    async fn run_turn(&self, state: &mut SessionState, input: UserInput) -> Vec<RenderInstruction> {
        let mut emitted = Vec::new();
        self.emit(&mut emitted, RenderInstruction::SetBusy(true));

        // Label reflects the state at submission, not after the reply
        let label = match &input {
            UserInput::Text(text) => text.clone(),
            UserInput::Artifact(_) => state.expectation().artifact_label().to_string(),
        };

        let request = ChatRequest::new(&self.user_id, input.into_payload());
        let response = match self.backend.send(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, kind = ?e.kind, "Turn failed, state unchanged");
                self.emit(&mut emitted, RenderInstruction::SetBusy(false));
                self.emit(&mut emitted, RenderInstruction::network_error(e.to_string()));
                return emitted;
            }
        };

        self.emit(&mut emitted, RenderInstruction::user_message(label));
        if let Some(text) = response.bot_message() {
            self.emit(&mut emitted, RenderInstruction::bot_message(text));
        }
        if let Some(html) = response.html_fragment() {
            self.emit(&mut emitted, RenderInstruction::html_fragment(html));
        }
        self.emit(&mut emitted, RenderInstruction::SetBusy(false));

        let next = transition(
            *state,
            response.bot_message().unwrap_or_default(),
            response.has_structured_fields(),
        );
        if next != *state {
            tracing::debug!(from = ?*state, to = ?next, "Session expectation changed");
        }
        *state = next;

        emitted
    }

    fn emit(&self, emitted: &mut Vec<RenderInstruction>, instruction: RenderInstruction) {
        // No subscribers is fine; the returned vector is authoritative
        let _ = self.render_tx.send(instruction.clone());
        emitted.push(instruction);
    }
}
