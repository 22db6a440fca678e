//! Terminal presentation layer
//!
//! Executes render instructions against any `Write` and parses the
//! line-oriented commands typed by the user.

use crate::controller::UserInput;
use crate::session::RenderInstruction;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::PathBuf;

const USER_PREFIX: &str = "you> ";
const BOT_PREFIX: &str = "bot> ";
const BUSY_INDICATOR: &str = "...";

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text for the next turn
    Say(UserInput),
    /// `/upload [path]`; no path means nothing was selected
    Upload(Option<PathBuf>),
    /// `/quit`
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed == "/quit" {
            return Some(Command::Quit);
        }
        if trimmed == "/upload" {
            return Some(Command::Upload(None));
        }
        if let Some(path) = trimmed.strip_prefix("/upload ") {
            let path = path.trim();
            return Some(Command::Upload(
                (!path.is_empty()).then(|| PathBuf::from(path)),
            ));
        }
        UserInput::text(trimmed).ok().map(Command::Say)
    }
}

/// Writes render instructions as plain terminal text
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn apply(&mut self, instruction: &RenderInstruction) -> io::Result<()> {
        match instruction {
            RenderInstruction::SetBusy(true) => writeln!(self.out, "{BUSY_INDICATOR}")?,
            RenderInstruction::SetBusy(false) => {}
            RenderInstruction::ShowUserMessage(label) => {
                writeln!(self.out, "{USER_PREFIX}{label}")?;
            }
            RenderInstruction::ShowBotMessage(markdown) => {
                self.write_bot(&markdown_to_plain(markdown))?;
            }
            RenderInstruction::ShowRawHtmlFragment(html) => {
                writeln!(self.out, "{}", html.trim())?;
            }
            RenderInstruction::ShowNetworkError(message) => {
                self.write_bot(&format!("Network error: {message}"))?;
            }
        }
        self.out.flush()
    }

    #[allow(dead_code)] // Used by tests to inspect output
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prefix the first line, indent the rest under it
    fn write_bot(&mut self, text: &str) -> io::Result<()> {
        let indent = " ".repeat(BOT_PREFIX.len());
        for (i, line) in text.lines().enumerate() {
            if i == 0 {
                writeln!(self.out, "{BOT_PREFIX}{line}")?;
            } else if line.is_empty() {
                writeln!(self.out)?;
            } else {
                writeln!(self.out, "{indent}{line}")?;
            }
        }
        if text.is_empty() {
            writeln!(self.out, "{}", BOT_PREFIX.trim_end())?;
        }
        Ok(())
    }
}

/// Flatten bot markdown into plain text: emphasis dropped, lists bulleted
pub fn markdown_to_plain(markdown: &str) -> String {
    let mut out = String::new();
    // One entry per open list; `Some(n)` is the next ordinal
    let mut lists: Vec<Option<u64>> = Vec::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::List(first)) => lists.push(first),
            Event::End(TagEnd::List(_)) => {
                lists.pop();
                end_block(&mut out, !lists.is_empty());
            }
            Event::Start(Tag::Item) => {
                start_line(&mut out);
                out.push_str(&"  ".repeat(lists.len().saturating_sub(1)));
                match lists.last_mut() {
                    Some(Some(n)) => {
                        let _ = write!(out, "{n}. ");
                        *n += 1;
                    }
                    _ => out.push_str("- "),
                }
            }
            Event::Text(text) | Event::Code(text) | Event::Html(text) | Event::InlineHtml(text) => {
                out.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::CodeBlock) => {
                end_block(&mut out, !lists.is_empty());
            }
            Event::Rule => {
                start_line(&mut out);
                out.push_str("---");
                end_block(&mut out, false);
            }
            _ => {}
        }
    }

    out.trim_end().to_string()
}

fn start_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Blocks are separated by a blank line, except inside lists
fn end_block(out: &mut String, in_list: bool) {
    start_line(out);
    if !in_list && !out.is_empty() && !out.ends_with("\n\n") {
        out.push('\n');
    }
}
