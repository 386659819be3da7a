//! Browser host boundary.
//!
//! The wrappers here are what the embedding page talks to. They translate
//! DOM-originated calls into engine events and broadcast tutor envelopes to
//! `window.parent` via `postMessage`. Delivery is untargeted and
//! fire-and-forget; a missing or cross-origin parent is not an error.

use wasm_bindgen::prelude::*;

use tutor::Outbound;
use tutor::channel::Notifier;

use crate::engine::LabCore;
use crate::exercise::Relation;
use crate::flow::Event;
use crate::grid::Cell;
use crate::logic::{ChallengeKind, LogicSession};

/// Notifier that broadcasts envelopes to the parent document.
pub struct PostMessageNotifier;

impl Notifier for PostMessageNotifier {
    fn notify(&mut self, envelope: &Outbound) {
        let Ok(json) = serde_json::to_string(envelope) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(parent)) = window.parent() else {
            return;
        };
        let Ok(value) = js_sys::JSON::parse(&json) else {
            return;
        };
        if parent.post_message(&value, "*").is_err() {
            tracing::warn!("postMessage to parent failed");
        }
    }
}

/// The Shape Lab engine as exposed to the embedding page.
#[wasm_bindgen]
pub struct ShapeLab {
    core: LabCore,
}

#[wasm_bindgen]
impl ShapeLab {
    /// Create a session and announce it to the host.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> ShapeLab {
        let mut core = LabCore::new(Box::new(PostMessageNotifier));
        core.start();
        ShapeLab { core }
    }

    /// Leave the welcome screen.
    pub fn begin(&mut self) {
        self.core.apply(Event::Begin);
    }

    /// Toggle the cell under a click.
    pub fn on_cell_click(&mut self, col: i32, row: i32) {
        self.core.apply(Event::ToggleCell { cell: Cell::new(col, row) });
    }

    /// Pick a numeric multiple-choice answer.
    pub fn choose_count(&mut self, value: u32) {
        self.core.apply(Event::ChooseCount { value });
    }

    /// Pick a relation answer (`"same_area"`, `"same_perimeter"`, `"both"`,
    /// `"neither"`). Unknown spellings are ignored.
    pub fn choose_relation(&mut self, relation: &str) {
        if let Some(relation) = Relation::parse(relation) {
            self.core.apply(Event::ChooseRelation { relation });
        } else {
            tracing::warn!(relation, "unknown relation choice");
        }
    }

    /// Grade the current draft. Returns the verdict as JSON, or `None` when
    /// nothing was gradeable.
    pub fn submit(&mut self) -> Option<String> {
        let verdict = self.core.apply(Event::Submit)?;
        serde_json::to_string(&verdict).ok()
    }

    /// The success celebration finished; advance.
    pub fn celebration_done(&mut self) {
        self.core.apply(Event::CelebrationDone);
    }

    /// Start the whole flow over.
    pub fn reset(&mut self) {
        self.core.apply(Event::Reset);
    }

    /// Handle a raw message event payload from the hosting document.
    pub fn on_host_message(&mut self, raw: &str) {
        if let Err(err) = self.core.on_host_message(raw) {
            tracing::warn!(error = %err, "ignoring host message");
        }
    }

    /// Current session snapshot as JSON for rendering.
    #[must_use]
    pub fn state_json(&self) -> String {
        serde_json::to_string(self.core.state()).unwrap_or_default()
    }

    /// Fixed exercise definitions as JSON for rendering.
    #[must_use]
    pub fn exercises_json(&self) -> String {
        serde_json::to_string(self.core.exercises()).unwrap_or_default()
    }

    /// Live counter for the current exercise, if it has one.
    #[must_use]
    pub fn readout(&self) -> Option<u32> {
        self.core.readout()
    }
}

impl Default for ShapeLab {
    fn default() -> Self {
        Self::new()
    }
}

/// One Logic Lab challenge set as exposed to the embedding page.
#[wasm_bindgen]
pub struct LogicLab {
    session: LogicSession,
}

#[wasm_bindgen]
impl LogicLab {
    /// Create a session for `"grid"`, `"pattern"`, or `"sequence"`.
    ///
    /// # Errors
    ///
    /// Rejects unknown kind names.
    #[wasm_bindgen(constructor)]
    pub fn new(kind: &str) -> Result<LogicLab, JsError> {
        let kind = match kind {
            "grid" => ChallengeKind::Grid,
            "pattern" => ChallengeKind::Pattern,
            "sequence" => ChallengeKind::Sequence,
            other => return Err(JsError::new(&format!("unknown challenge kind: {other}"))),
        };
        Ok(LogicLab { session: LogicSession::new(kind) })
    }

    /// Current challenge as JSON, or `None` when the set is finished.
    #[must_use]
    pub fn current_json(&self) -> Option<String> {
        let value = self.session.current()?;
        serde_json::to_string(&value).ok()
    }

    /// Grade a raw answer and advance. Returns whether it was correct.
    ///
    /// # Errors
    ///
    /// Surfaces [`crate::logic::AnswerError`] as a JS error.
    pub fn submit(&mut self, raw: &str) -> Result<bool, JsError> {
        self.session.submit(raw).map_err(|err| JsError::new(&err.to_string()))
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.run().score()
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        self.session.run().percent()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.run().is_finished()
    }
}
