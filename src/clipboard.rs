//! Clipboard support for the share link
//!
//! Writes to the system clipboard first, then falls back to the OSC 52
//! terminal escape sequence.

use base64::Engine as _;
use copypasta::{ClipboardContext, ClipboardProvider};
use std::cell::RefCell;
use std::error::Error as StdError;
use std::io::{self, Write};
use thiserror::Error;

type SystemResult = Result<(), Box<dyn StdError + Send + Sync>>;

// Kept alive for the whole session: an X11 selection is lost once its owner
// is dropped.
thread_local!(static SYSTEM_CLIPBOARD: RefCell<Option<ClipboardContext>> = RefCell::new(None));

/// How the text reached the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    System,
    Osc52,
}

impl CopyMethod {
    pub fn name(&self) -> &'static str {
        match self {
            CopyMethod::System => "system",
            CopyMethod::Osc52 => "osc52",
        }
    }
}

#[derive(Debug, Error)]
#[error("Could not copy to the clipboard: {0}")]
pub struct ClipboardError(#[source] pub io::Error);

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<CopyMethod, ClipboardError> {
    copy_with(set_system_clipboard, &mut io::stdout(), text)
}

fn set_system_clipboard(text: &str) -> SystemResult {
    SYSTEM_CLIPBOARD.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(ClipboardContext::new()?);
        }
        match slot.as_mut() {
            Some(ctx) => ctx.set_contents(text.to_string()),
            None => Ok(()),
        }
    })
}

fn copy_with<F, W>(system: F, terminal: &mut W, text: &str) -> Result<CopyMethod, ClipboardError>
where
    F: FnOnce(&str) -> SystemResult,
    W: Write,
{
    match system(text) {
        Ok(()) => return Ok(CopyMethod::System),
        Err(e) => tracing::debug!(error = %e, "System clipboard unavailable"),
    }

    terminal
        .write_all(osc52_sequence(text).as_bytes())
        .and_then(|_| terminal.flush())
        .map(|_| CopyMethod::Osc52)
        .map_err(ClipboardError)
}

/// OSC 52 "set clipboard" escape sequence for `text`
pub fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", payload)
}
