//! Outbound notice channel with last-message caching.
//!
//! The channel renders catalog keys into the active language, hands the
//! finished envelope to an injected [`Notifier`], and remembers what it last
//! sent. When the host switches language the cached notice is re-rendered and
//! re-sent, which is the whole of the re-translation contract.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{Language, MessageKey};
use crate::{NoticeKind, Outbound};

/// Capability for delivering an envelope to the hosting document.
///
/// Delivery is best-effort and fire-and-forget; implementations swallow
/// transport failures.
pub trait Notifier {
    fn notify(&mut self, envelope: &Outbound);
}

/// What the flow asks the channel to send: a catalog key plus payload.
///
/// Content is deliberately absent; it is rendered at send time so the active
/// language always wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub key: MessageKey,
    pub data: Value,
}

/// Channel to the hosting document.
pub struct TutorChannel {
    notifier: Box<dyn Notifier>,
    language: Language,
    last: Option<Notice>,
}

impl TutorChannel {
    #[must_use]
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self { notifier, language: Language::default(), last: None }
    }

    /// The language notices are currently rendered in.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// The last notice sent, if any.
    #[must_use]
    pub fn last_sent(&self) -> Option<&Notice> {
        self.last.as_ref()
    }

    /// Render and deliver a notice, caching it as the last one sent.
    pub fn send(&mut self, notice: Notice) {
        let envelope = Outbound::Tutor {
            message_type: notice.kind,
            content: notice.key.render(self.language).to_owned(),
            data: notice.data.clone(),
        };
        self.notifier.notify(&envelope);
        self.last = Some(notice);
    }

    /// Switch language and re-send the cached notice translated.
    ///
    /// The re-send happens even when the language is unchanged; the host
    /// treats the message stream as idempotent display state.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Some(last) = self.last.clone() {
            self.send(last);
        }
    }
}
