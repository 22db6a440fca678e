//! Render instructions produced by a turn

use serde::Serialize;

/// Ordered directive for the presentation layer.
///
/// A successful turn emits `SetBusy(true)`, the user message, the optional
/// bot message and HTML fragment, then `SetBusy(false)`. A failed turn emits
/// `SetBusy(true)`, `SetBusy(false)`, `ShowNetworkError`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RenderInstruction {
    /// Plain text bubble for the user's turn
    ShowUserMessage(String),
    /// Bot reply; may contain lightweight markdown
    ShowBotMessage(String),
    /// Pre-rendered HTML inserted verbatim, not escaped
    ShowRawHtmlFragment(String),
    /// Transport failure description, shown inline in the bot's voice
    ShowNetworkError(String),
    /// Busy indicator on/off
    SetBusy(bool),
}

impl RenderInstruction {
    pub fn user_message(label: impl Into<String>) -> Self {
        RenderInstruction::ShowUserMessage(label.into())
    }

    pub fn bot_message(text: impl Into<String>) -> Self {
        RenderInstruction::ShowBotMessage(text.into())
    }

    pub fn html_fragment(html: impl Into<String>) -> Self {
        RenderInstruction::ShowRawHtmlFragment(html.into())
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        RenderInstruction::ShowNetworkError(message.into())
    }
}
