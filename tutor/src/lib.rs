//! Shared message model for the parent-frame boundary.
//!
//! This crate owns the JSON contract between an embedded lab and the document
//! hosting it. Outbound traffic is a fire-and-forget `tutorMessage` broadcast;
//! the only inbound traffic is a language switch. Message text is rendered
//! from the [`catalog`] at send time, and [`channel`] keeps the last notice so
//! a language switch can re-send it translated.

pub mod catalog;
pub mod channel;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Language;

/// Error returned by [`parse_inbound`].
#[derive(Debug, thiserror::Error)]
pub enum InboundError {
    /// The payload was not valid JSON or did not match a known message shape.
    #[error("failed to parse host message: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Whether a notice reports a completed step or prompts the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// A step was completed; the host may celebrate.
    Success,
    /// A prompt telling the child what to do next.
    Instruction,
}

/// Message posted from the lab to the hosting document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Outbound {
    /// Progress or instruction notice for the tutor UI.
    #[serde(rename = "tutorMessage", rename_all = "camelCase")]
    Tutor {
        message_type: NoticeKind,
        /// Text rendered in the channel's active language.
        content: String,
        /// Structured payload for the host (exercise number, score, ...).
        data: Value,
    },
}

/// Message received from the hosting document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Inbound {
    /// Switch the display language. The last notice is re-sent translated.
    #[serde(rename = "setFlowLanguage", rename_all = "camelCase")]
    SetFlowLanguage { language_code: Language },
}

/// Parse a raw JSON string received from the host.
///
/// # Errors
///
/// Returns [`InboundError::Parse`] for malformed JSON, unknown message types,
/// and unsupported language codes.
pub fn parse_inbound(raw: &str) -> Result<Inbound, InboundError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
