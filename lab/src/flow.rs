//! Session state machine for the shape flow.
//!
//! The session is an immutable snapshot ([`FlowState`]) advanced by a pure
//! reducer. Every user input is an [`Event`]; [`reduce`] returns the next
//! snapshot plus the [`Effect`]s the engine must execute (notices to the
//! host, grading verdicts for the UI). Events that do not apply in the
//! current phase return the state unchanged with no effects, so the reducer
//! is total and replayable.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tutor::NoticeKind;
use tutor::catalog::MessageKey;
use tutor::channel::Notice;

use crate::consts;
use crate::exercise::{Exercises, Relation, Verdict};
use crate::grid::{Cell, Shape};

/// The five stations of the shape flow, in play order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseId {
    AreaCounting,
    AreaBuilding,
    PerimeterTracing,
    Comparison,
    PerimeterBuilding,
}

impl ExerciseId {
    pub const ALL: [ExerciseId; 5] = [
        Self::AreaCounting,
        Self::AreaBuilding,
        Self::PerimeterTracing,
        Self::Comparison,
        Self::PerimeterBuilding,
    ];

    /// 1-based position in the flow, as shown on the progress dots.
    #[must_use]
    pub fn number(self) -> u32 {
        match self {
            Self::AreaCounting => 1,
            Self::AreaBuilding => 2,
            Self::PerimeterTracing => 3,
            Self::Comparison => 4,
            Self::PerimeterBuilding => 5,
        }
    }

    /// The station after this one, if any.
    #[must_use]
    pub fn next(self) -> Option<ExerciseId> {
        match self {
            Self::AreaCounting => Some(Self::AreaBuilding),
            Self::AreaBuilding => Some(Self::PerimeterTracing),
            Self::PerimeterTracing => Some(Self::Comparison),
            Self::Comparison => Some(Self::PerimeterBuilding),
            Self::PerimeterBuilding => None,
        }
    }

    fn index(self) -> usize {
        (self.number() - 1) as usize
    }

    fn intro_key(self) -> MessageKey {
        match self {
            Self::AreaCounting => MessageKey::CountingIntro,
            Self::AreaBuilding => MessageKey::AreaBuildingIntro,
            Self::PerimeterTracing => MessageKey::TracingIntro,
            Self::Comparison => MessageKey::ComparisonIntro,
            Self::PerimeterBuilding => MessageKey::PerimeterBuildingIntro,
        }
    }

    fn success_key(self) -> MessageKey {
        match self {
            Self::AreaCounting => MessageKey::CountingDone,
            Self::AreaBuilding => MessageKey::AreaBuildingDone,
            Self::PerimeterTracing => MessageKey::TracingDone,
            Self::Comparison => MessageKey::ComparisonDone,
            Self::PerimeterBuilding => MessageKey::Mastery,
        }
    }
}

/// In-progress answer for the current exercise. Rebuilt on entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "draft", rename_all = "snake_case")]
pub enum Draft {
    /// Cells ticked off while counting, plus the chosen area answer.
    Counting { counted: Shape, choice: Option<u32> },
    /// Cells placed on a build grid.
    Building { placed: Shape },
    /// Cells traced along the figure, plus the chosen perimeter answer.
    Tracing { traced: Shape, choice: Option<u32> },
    /// The chosen relation between the two comparison figures.
    Comparing { choice: Option<Relation> },
}

impl Draft {
    fn for_exercise(id: ExerciseId) -> Draft {
        match id {
            ExerciseId::AreaCounting => Draft::Counting { counted: Shape::new(), choice: None },
            ExerciseId::AreaBuilding | ExerciseId::PerimeterBuilding => {
                Draft::Building { placed: Shape::new() }
            }
            ExerciseId::PerimeterTracing => Draft::Tracing { traced: Shape::new(), choice: None },
            ExerciseId::Comparison => Draft::Comparing { choice: None },
        }
    }
}

/// Completion and score for one station.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: bool,
    pub score: u32,
}

/// Which screen the session is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Welcome screen before the first exercise.
    Tutorial,
    /// An exercise is on screen; `celebrating` while the success animation
    /// plays, during which inputs are ignored.
    Exercise { current: ExerciseId, celebrating: bool },
    /// All five stations completed.
    Completion,
}

/// Immutable session snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowState {
    pub phase: Phase,
    /// Per-station completion and score, in flow order.
    pub progress: [Progress; 5],
    /// Answer under construction for the current exercise.
    pub draft: Draft,
}

impl FlowState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Tutorial,
            progress: [Progress::default(); 5],
            draft: Draft::for_exercise(ExerciseId::AreaCounting),
        }
    }

    /// Sum of scores across all stations.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.progress.iter().map(|p| p.score).sum()
    }

    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.progress.iter().all(|p| p.completed)
    }
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new()
    }
}

/// User and host inputs consumed by [`reduce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Leave the welcome screen and start the first exercise.
    Begin,
    /// Toggle one grid cell in the current draft.
    ToggleCell { cell: Cell },
    /// Pick a numeric multiple-choice answer.
    ChooseCount { value: u32 },
    /// Pick a relation answer on the comparison exercise.
    ChooseRelation { relation: Relation },
    /// Grade the current draft.
    Submit,
    /// The success celebration finished; advance to the next station.
    CelebrationDone,
    /// Start the whole flow over from the first exercise.
    Reset,
}

/// Side effects requested by [`reduce`]; the engine executes them.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Send a notice to the hosting document.
    Notify(Notice),
    /// Surface a grading verdict to the embedding UI.
    Graded(Verdict),
}

/// Advance the session by one event.
#[must_use]
pub fn reduce(exercises: &Exercises, state: &FlowState, event: Event) -> (FlowState, Vec<Effect>) {
    match event {
        Event::Begin => begin(state),
        Event::ToggleCell { cell } => toggle(exercises, state, cell),
        Event::ChooseCount { value } => choose_count(state, value),
        Event::ChooseRelation { relation } => choose_relation(state, relation),
        Event::Submit => submit(exercises, state),
        Event::CelebrationDone => celebration_done(state),
        Event::Reset => enter([Progress::default(); 5], ExerciseId::AreaCounting),
    }
}

fn unchanged(state: &FlowState) -> (FlowState, Vec<Effect>) {
    (state.clone(), Vec::new())
}

/// Enter a station with a fresh draft, announcing it to the host.
fn enter(progress: [Progress; 5], id: ExerciseId) -> (FlowState, Vec<Effect>) {
    let state = FlowState {
        phase: Phase::Exercise { current: id, celebrating: false },
        progress,
        draft: Draft::for_exercise(id),
    };
    let notice = Notice {
        kind: NoticeKind::Instruction,
        key: id.intro_key(),
        data: json!({"exercise": id.number()}),
    };
    (state, vec![Effect::Notify(notice)])
}

fn begin(state: &FlowState) -> (FlowState, Vec<Effect>) {
    if state.phase == Phase::Tutorial {
        enter(state.progress, ExerciseId::AreaCounting)
    } else {
        unchanged(state)
    }
}

fn toggle(exercises: &Exercises, state: &FlowState, cell: Cell) -> (FlowState, Vec<Effect>) {
    let Phase::Exercise { current, celebrating: false } = state.phase else {
        return unchanged(state);
    };

    let mut next = state.clone();
    match (current, &mut next.draft) {
        (ExerciseId::AreaCounting, Draft::Counting { counted, .. })
            if exercises.counting.figure.contains(cell) =>
        {
            counted.toggle(cell);
        }
        (ExerciseId::AreaBuilding, Draft::Building { placed })
            if exercises.area_building.grid.contains(cell) =>
        {
            placed.toggle(cell);
        }
        (ExerciseId::PerimeterTracing, Draft::Tracing { traced, .. })
            if exercises.tracing.figure.contains(cell) =>
        {
            traced.toggle(cell);
        }
        (ExerciseId::PerimeterBuilding, Draft::Building { placed })
            if exercises.perimeter_building.grid.contains(cell) =>
        {
            placed.toggle(cell);
        }
        _ => return unchanged(state),
    }
    (next, Vec::new())
}

fn choose_count(state: &FlowState, value: u32) -> (FlowState, Vec<Effect>) {
    let Phase::Exercise { celebrating: false, .. } = state.phase else {
        return unchanged(state);
    };

    let mut next = state.clone();
    match &mut next.draft {
        Draft::Counting { choice, .. } | Draft::Tracing { choice, .. } => *choice = Some(value),
        Draft::Building { .. } | Draft::Comparing { .. } => return unchanged(state),
    }
    (next, Vec::new())
}

fn choose_relation(state: &FlowState, relation: Relation) -> (FlowState, Vec<Effect>) {
    let Phase::Exercise { celebrating: false, .. } = state.phase else {
        return unchanged(state);
    };

    let mut next = state.clone();
    match &mut next.draft {
        Draft::Comparing { choice } => *choice = Some(relation),
        _ => return unchanged(state),
    }
    (next, Vec::new())
}

fn submit(exercises: &Exercises, state: &FlowState) -> (FlowState, Vec<Effect>) {
    let Phase::Exercise { current, celebrating: false } = state.phase else {
        return unchanged(state);
    };

    // A station with nothing selected or nothing placed is not gradeable.
    let verdict = match (current, &state.draft) {
        (ExerciseId::AreaCounting, Draft::Counting { choice: Some(choice), .. }) => {
            exercises.counting.grade(*choice)
        }
        (ExerciseId::AreaBuilding, Draft::Building { placed }) if !placed.is_empty() => {
            exercises.area_building.grade(placed)
        }
        (ExerciseId::PerimeterTracing, Draft::Tracing { choice: Some(choice), .. }) => {
            exercises.tracing.grade(*choice)
        }
        (ExerciseId::Comparison, Draft::Comparing { choice: Some(choice) }) => {
            exercises.comparison.grade(*choice)
        }
        (ExerciseId::PerimeterBuilding, Draft::Building { placed }) if !placed.is_empty() => {
            exercises.perimeter_building.grade(placed)
        }
        _ => return unchanged(state),
    };

    let mut next = state.clone();
    let mut effects = vec![Effect::Graded(verdict)];

    if verdict.is_correct() {
        next.progress[current.index()] =
            Progress { completed: true, score: consts::EXERCISE_SCORE };
        next.phase = Phase::Exercise { current, celebrating: true };
        effects.push(Effect::Notify(success_notice(current, &next)));
    } else {
        clear_for_retry(&mut next.draft);
    }

    (next, effects)
}

fn success_notice(current: ExerciseId, state: &FlowState) -> Notice {
    let total = state.total_score();
    let data = if current.next().is_none() {
        json!({"totalScore": total})
    } else {
        json!({
            "exercise": current.number(),
            "score": consts::EXERCISE_SCORE,
            "totalScore": total,
        })
    };
    Notice { kind: NoticeKind::Success, key: current.success_key(), data }
}

/// Reset the parts of a draft a wrong answer invalidates. Placed cells on
/// the build grids survive so the child can correct the shape in place.
fn clear_for_retry(draft: &mut Draft) {
    match draft {
        Draft::Counting { counted, choice } => {
            counted.clear();
            *choice = None;
        }
        Draft::Tracing { traced, choice } => {
            traced.clear();
            *choice = None;
        }
        Draft::Comparing { choice } => *choice = None,
        Draft::Building { .. } => {}
    }
}

fn celebration_done(state: &FlowState) -> (FlowState, Vec<Effect>) {
    let Phase::Exercise { current, celebrating: true } = state.phase else {
        return unchanged(state);
    };

    match current.next() {
        Some(next_id) => enter(state.progress, next_id),
        None => {
            let mut next = state.clone();
            next.phase = Phase::Completion;
            (next, Vec::new())
        }
    }
}
