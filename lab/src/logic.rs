//! Logic Lab challenge sets: logic grids, pattern completion, and number
//! sequences.
//!
//! Challenge data is fixed, grading is equality against the stored solution,
//! and all three kinds share one progression: one point per correct answer,
//! advance on every graded submission, finished after the last challenge.

#[cfg(test)]
#[path = "logic_test.rs"]
mod logic_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One logic-grid puzzle: pair each item with a category under the clues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridChallenge {
    pub clues: &'static [&'static str],
    pub items: &'static [&'static str],
    pub categories: &'static [&'static str],
    /// Correct item → category pairing.
    pub solution: &'static [(&'static str, &'static str)],
}

impl GridChallenge {
    /// Whether the assignment pairs every item with a category.
    #[must_use]
    pub fn is_complete(&self, assignment: &BTreeMap<String, String>) -> bool {
        self.items.iter().all(|item| assignment.contains_key(*item))
    }

    /// Whether a complete assignment matches the solution.
    #[must_use]
    pub fn is_solved(&self, assignment: &BTreeMap<String, String>) -> bool {
        self.is_complete(assignment)
            && self.solution.iter().all(|(item, category)| {
                assignment.get(*item).is_some_and(|assigned| assigned == category)
            })
    }
}

/// A symbol sequence with one hole and three candidate fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PatternChallenge {
    /// Displayed sequence; `"?"` marks the hole.
    pub sequence: &'static [&'static str],
    pub options: &'static [&'static str],
    pub answer: &'static str,
    /// Shown to the child after grading.
    pub explanation: &'static str,
}

impl PatternChallenge {
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.answer
    }
}

/// One slot of a number sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Value(i64),
    Hole,
}

/// A numeric sequence with one hole and three candidate fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SequenceChallenge {
    pub sequence: &'static [Slot],
    pub options: &'static [i64],
    pub answer: i64,
    /// Name of the rule, shown after grading.
    pub rule: &'static str,
}

impl SequenceChallenge {
    #[must_use]
    pub fn is_correct(&self, choice: i64) -> bool {
        choice == self.answer
    }
}

pub const GRID_CHALLENGES: [GridChallenge; 3] = [
    GridChallenge {
        clues: &["🐕 doesn't like 🍎", "🐱 likes 🍌"],
        items: &["🐕", "🐱", "🐰"],
        categories: &["🍎", "🍌", "🥕"],
        solution: &[("🐕", "🥕"), ("🐱", "🍌"), ("🐰", "🍎")],
    },
    GridChallenge {
        clues: &["🚗 isn't 🔴", "🚲 is 🟡"],
        items: &["🚗", "🚲", "🚌"],
        categories: &["🔴", "🟡", "🔵"],
        solution: &[("🚗", "🔵"), ("🚲", "🟡"), ("🚌", "🔴")],
    },
    GridChallenge {
        clues: &["👦 plays ⚽", "👧 doesn't play 🏀"],
        items: &["👦", "👧", "👶"],
        categories: &["⚽", "🏀", "🎾"],
        solution: &[("👦", "⚽"), ("👧", "🎾"), ("👶", "🏀")],
    },
];

pub const PATTERN_CHALLENGES: [PatternChallenge; 3] = [
    PatternChallenge {
        sequence: &["◼︎", "◼︎", "◻︎", "◼︎", "◼︎", "◻︎", "?"],
        options: &["◼︎", "◻︎", "◇"],
        answer: "◼︎",
        explanation: "Two black, one white pattern!",
    },
    PatternChallenge {
        sequence: &["🔴", "🟠", "🟡", "🔴", "🟠", "?"],
        options: &["🟡", "🟢", "🔵"],
        answer: "🟡",
        explanation: "Red, orange, yellow repeating!",
    },
    PatternChallenge {
        sequence: &["🔴▲", "🟠▲", "🟡◼︎", "🔴▲", "🟠▲", "?"],
        options: &["🟡◼︎", "🔵◼︎", "🟢▲"],
        answer: "🟡◼︎",
        explanation: "Color and shape pattern!",
    },
];

pub const SEQUENCE_CHALLENGES: [SequenceChallenge; 3] = [
    SequenceChallenge {
        sequence: &[Slot::Value(2), Slot::Value(4), Slot::Value(6), Slot::Hole],
        options: &[7, 8, 10],
        answer: 8,
        rule: "+2 Rule",
    },
    SequenceChallenge {
        sequence: &[Slot::Value(5), Slot::Value(10), Slot::Hole, Slot::Value(20)],
        options: &[12, 15, 18],
        answer: 15,
        rule: "+5 Rule",
    },
    SequenceChallenge {
        sequence: &[Slot::Value(81), Slot::Value(27), Slot::Value(9), Slot::Hole],
        options: &[3, 6, 9],
        answer: 3,
        rule: "÷3 Rule",
    },
];

/// Progress through a fixed list of challenges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRun {
    total: u32,
    index: u32,
    score: u32,
}

impl ChallengeRun {
    #[must_use]
    pub fn new(total: u32) -> Self {
        Self { total, index: 0, score: 0 }
    }

    /// Index of the current challenge.
    #[must_use]
    pub fn index(self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn score(self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.index >= self.total
    }

    /// Record a graded answer and advance. No-op once finished.
    pub fn record(&mut self, correct: bool) {
        if self.is_finished() {
            return;
        }
        if correct {
            self.score += 1;
        }
        self.index += 1;
    }

    /// Share of challenges answered correctly, as a whole percentage.
    #[must_use]
    pub fn percent(self) -> u32 {
        if self.total == 0 { 0 } else { self.score * 100 / self.total }
    }
}

/// Which challenge set a session plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeKind {
    Grid,
    Pattern,
    Sequence,
}

/// Error returned by [`LogicSession::submit`].
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// Every challenge in the set has already been answered.
    #[error("challenge set already finished")]
    Finished,
    /// A grid answer must pair every item with a category before grading.
    #[error("assignment does not cover every item")]
    Incomplete,
    /// A grid answer that is not a JSON object of item → category.
    #[error("invalid assignment payload: {0}")]
    Assignment(#[from] serde_json::Error),
    /// A sequence answer that is not an integer.
    #[error("invalid number answer: {0}")]
    Number(#[from] std::num::ParseIntError),
}

/// One play-through of a challenge set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogicSession {
    kind: ChallengeKind,
    run: ChallengeRun,
}

impl LogicSession {
    #[must_use]
    pub fn new(kind: ChallengeKind) -> Self {
        let total = match kind {
            ChallengeKind::Grid => GRID_CHALLENGES.len(),
            ChallengeKind::Pattern => PATTERN_CHALLENGES.len(),
            ChallengeKind::Sequence => SEQUENCE_CHALLENGES.len(),
        };
        Self { kind, run: ChallengeRun::new(u32::try_from(total).unwrap_or(0)) }
    }

    #[must_use]
    pub fn kind(&self) -> ChallengeKind {
        self.kind
    }

    #[must_use]
    pub fn run(&self) -> ChallengeRun {
        self.run
    }

    /// The current challenge serialized for the host; `None` when finished.
    #[must_use]
    pub fn current(&self) -> Option<Value> {
        let idx = self.run.index() as usize;
        let value = match self.kind {
            ChallengeKind::Grid => serde_json::to_value(GRID_CHALLENGES.get(idx)?),
            ChallengeKind::Pattern => serde_json::to_value(PATTERN_CHALLENGES.get(idx)?),
            ChallengeKind::Sequence => serde_json::to_value(SEQUENCE_CHALLENGES.get(idx)?),
        };
        Some(value.unwrap_or(Value::Null))
    }

    /// Grade a raw answer for the current challenge and advance.
    ///
    /// Grid answers are a JSON object of item → category, pattern answers
    /// are the chosen symbol, sequence answers are the chosen number.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::Finished`] after the last challenge,
    /// [`AnswerError::Incomplete`] for a partial grid assignment, and a
    /// parse error when the payload does not fit the challenge kind.
    pub fn submit(&mut self, raw: &str) -> Result<bool, AnswerError> {
        let idx = self.run.index() as usize;
        let correct = match self.kind {
            ChallengeKind::Grid => {
                let challenge = GRID_CHALLENGES.get(idx).ok_or(AnswerError::Finished)?;
                let assignment: BTreeMap<String, String> = serde_json::from_str(raw)?;
                if !challenge.is_complete(&assignment) {
                    return Err(AnswerError::Incomplete);
                }
                challenge.is_solved(&assignment)
            }
            ChallengeKind::Pattern => {
                let challenge = PATTERN_CHALLENGES.get(idx).ok_or(AnswerError::Finished)?;
                challenge.is_correct(raw.trim())
            }
            ChallengeKind::Sequence => {
                let challenge = SEQUENCE_CHALLENGES.get(idx).ok_or(AnswerError::Finished)?;
                challenge.is_correct(raw.trim().parse()?)
            }
        };
        self.run.record(correct);
        Ok(correct)
    }
}
