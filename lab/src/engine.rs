//! Top-level engine: owns the session snapshot and the tutor channel.
//!
//! [`LabCore`] is everything that does not touch the browser, so the whole
//! flow can be driven and observed in plain tests. The WASM wrapper in
//! [`crate::host`] feeds it DOM-originated events and hands it a notifier
//! that reaches the parent document.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde_json::json;
use tutor::catalog::{Language, MessageKey};
use tutor::channel::{Notice, Notifier, TutorChannel};
use tutor::{Inbound, InboundError, NoticeKind};
use uuid::Uuid;

use crate::exercise::{Exercises, Verdict};
use crate::flow::{self, Draft, Event, Effect, ExerciseId, FlowState, Phase};
use crate::metrics;

/// Core engine state for one Shape Lab session.
pub struct LabCore {
    session_id: Uuid,
    exercises: Exercises,
    state: FlowState,
    channel: TutorChannel,
}

impl LabCore {
    #[must_use]
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            exercises: Exercises::standard(),
            state: FlowState::new(),
            channel: TutorChannel::new(notifier),
        }
    }

    /// Announce the session to the host. Called once after mounting.
    pub fn start(&mut self) {
        tracing::info!(session = %self.session_id, "shape lab session started");
        self.channel.send(Notice {
            kind: NoticeKind::Instruction,
            key: MessageKey::Welcome,
            data: json!({"session": self.session_id}),
        });
    }

    /// Feed one event through the reducer and execute its effects.
    ///
    /// Returns the verdict when the event graded a submission.
    pub fn apply(&mut self, event: Event) -> Option<Verdict> {
        let (next, effects) = flow::reduce(&self.exercises, &self.state, event);
        self.state = next;

        let mut verdict = None;
        for effect in effects {
            match effect {
                Effect::Notify(notice) => {
                    tracing::debug!(key = notice.key.id(), "notice to host");
                    self.channel.send(notice);
                }
                Effect::Graded(v) => {
                    tracing::info!(verdict = ?v, "submission graded");
                    verdict = Some(v);
                }
            }
        }
        verdict
    }

    /// Handle a raw JSON message from the hosting document.
    ///
    /// # Errors
    ///
    /// Returns [`InboundError`] when the payload is not a known host message.
    pub fn on_host_message(&mut self, raw: &str) -> Result<(), InboundError> {
        match tutor::parse_inbound(raw)? {
            Inbound::SetFlowLanguage { language_code } => {
                tracing::info!(language = ?language_code, "flow language changed");
                self.channel.set_language(language_code);
            }
        }
        Ok(())
    }

    // --- Queries for the embedding UI ---

    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    #[must_use]
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    #[must_use]
    pub fn exercises(&self) -> &Exercises {
        &self.exercises
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.channel.language()
    }

    /// Live counter shown beneath the grid for the current exercise:
    /// cells counted, metric measured so far, or cells traced.
    #[must_use]
    pub fn readout(&self) -> Option<u32> {
        let Phase::Exercise { current, .. } = self.state.phase else {
            return None;
        };
        match (&self.state.draft, current) {
            (Draft::Counting { counted, .. }, _) => Some(metrics::area(counted)),
            (Draft::Building { placed }, ExerciseId::AreaBuilding) => {
                Some(self.exercises.area_building.measure(placed))
            }
            (Draft::Building { placed }, ExerciseId::PerimeterBuilding) => {
                Some(self.exercises.perimeter_building.measure(placed))
            }
            (Draft::Tracing { traced, .. }, _) => Some(metrics::area(traced)),
            _ => None,
        }
    }
}
