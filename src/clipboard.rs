//! Clipboard support with system and OSC 52 backends.
//!
//! The system backend talks to the desktop clipboard through arboard; the
//! OSC 52 backend emits a terminal escape sequence, which keeps copying
//! functional over SSH and inside tmux. `auto` tries the system clipboard
//! first and falls back to OSC 52.

use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

use crate::config::ClipboardBackend;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No system clipboard available")]
    SystemUnavailable,

    #[error("Failed to write to clipboard")]
    WriteFailed,
}

pub type ClipboardResult = Result<(), ClipboardError>;

/// Copy text using the configured backend.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => copy_system(text),
        ClipboardBackend::Osc52 => copy_osc52(text),
        ClipboardBackend::Auto => copy_system(text).or_else(|_| copy_osc52(text)),
    }
}

fn copy_system(text: &str) -> ClipboardResult {
    arboard::Clipboard::new()
        .map_err(|_| ClipboardError::SystemUnavailable)?
        .set_text(text)
        .map_err(|_| ClipboardError::WriteFailed)
}

fn copy_osc52(text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text);

    let mut stdout = io::stdout();
    stdout
        .write_all(sequence.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|_| ClipboardError::WriteFailed)
}

/// Encode text for OSC 52.
///
/// Format: `\x1b]52;c;{base64}\x07` - introducer, clipboard selection,
/// base64 payload, BEL terminator.
fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
