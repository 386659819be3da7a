//! Fixed exercise definitions and grading.
//!
//! Every exercise grades against its own figures through the general metrics
//! rather than a precomputed literal, so the stored figures are the single
//! source of truth for what counts as correct.

#[cfg(test)]
#[path = "exercise_test.rs"]
mod exercise_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::grid::{GridSpec, Shape};
use crate::metrics;

/// Outcome of grading a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The submission matches the target.
    Correct { score: u32 },
    /// The measured value falls short of the target by `deficit`.
    TooSmall { deficit: u32 },
    /// The measured value exceeds the target by `excess`.
    TooBig { excess: u32 },
    /// A multiple-choice answer that does not match.
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// How two figures relate on area and perimeter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    SameArea,
    SamePerimeter,
    Both,
    Neither,
}

impl Relation {
    /// Parse the wire spelling used by choice events (`"same_area"`, ...).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "same_area" => Some(Self::SameArea),
            "same_perimeter" => Some(Self::SamePerimeter),
            "both" => Some(Self::Both),
            "neither" => Some(Self::Neither),
            _ => None,
        }
    }
}

/// Measure how two shapes relate on both metrics.
#[must_use]
pub fn relation(a: &Shape, b: &Shape) -> Relation {
    let same_area = metrics::area(a) == metrics::area(b);
    let same_perimeter = metrics::perimeter(a) == metrics::perimeter(b);
    match (same_area, same_perimeter) {
        (true, true) => Relation::Both,
        (true, false) => Relation::SameArea,
        (false, true) => Relation::SamePerimeter,
        (false, false) => Relation::Neither,
    }
}

/// Count the cells of a fixed figure, then answer from multiple choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingExercise {
    pub grid: GridSpec,
    /// The highlighted figure the child counts.
    pub figure: Shape,
    pub options: [u32; 3],
}

impl CountingExercise {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            grid: GridSpec::from_dims(consts::COUNTING_GRID),
            figure: Shape::from_pairs(&consts::COUNTING_FIGURE),
            options: consts::COUNTING_OPTIONS,
        }
    }

    /// The correct choice: the figure's measured area.
    #[must_use]
    pub fn answer(&self) -> u32 {
        metrics::area(&self.figure)
    }

    #[must_use]
    pub fn grade(&self, choice: u32) -> Verdict {
        if choice == self.answer() {
            Verdict::Correct { score: consts::EXERCISE_SCORE }
        } else {
            Verdict::Incorrect
        }
    }
}

/// Which metric a build exercise targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildTarget {
    Area(u32),
    Perimeter(u32),
}

/// Build a free-form shape matching a metric target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildExercise {
    pub grid: GridSpec,
    pub target: BuildTarget,
}

impl BuildExercise {
    /// The area-building station: 5×5 grid, target 10 square units.
    #[must_use]
    pub fn area_standard() -> Self {
        Self {
            grid: GridSpec::from_dims(consts::AREA_BUILD_GRID),
            target: BuildTarget::Area(consts::AREA_TARGET),
        }
    }

    /// The perimeter-building station: 6×6 grid, target 14 units.
    #[must_use]
    pub fn perimeter_standard() -> Self {
        Self {
            grid: GridSpec::from_dims(consts::PERIMETER_BUILD_GRID),
            target: BuildTarget::Perimeter(consts::PERIMETER_TARGET),
        }
    }

    /// The targeted metric measured over the placed cells; drives the live
    /// counter under the grid.
    #[must_use]
    pub fn measure(&self, placed: &Shape) -> u32 {
        match self.target {
            BuildTarget::Area(_) => metrics::area(placed),
            BuildTarget::Perimeter(_) => metrics::perimeter(placed),
        }
    }

    #[must_use]
    pub fn goal(&self) -> u32 {
        match self.target {
            BuildTarget::Area(goal) | BuildTarget::Perimeter(goal) => goal,
        }
    }

    #[must_use]
    pub fn grade(&self, placed: &Shape) -> Verdict {
        let measured = self.measure(placed);
        let goal = self.goal();
        if measured == goal {
            Verdict::Correct { score: consts::EXERCISE_SCORE }
        } else if measured < goal {
            Verdict::TooSmall { deficit: goal - measured }
        } else {
            Verdict::TooBig { excess: measured - goal }
        }
    }
}

/// Trace a fixed figure's outline, then answer its perimeter from multiple
/// choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingExercise {
    pub grid: GridSpec,
    /// The figure whose edge is traced; toggles are restricted to it.
    pub figure: Shape,
    pub options: [u32; 3],
}

impl TracingExercise {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            grid: GridSpec::from_dims(consts::TRACING_GRID),
            figure: Shape::from_pairs(&consts::TRACING_FIGURE),
            options: consts::TRACING_OPTIONS,
        }
    }

    /// The correct choice: the figure's measured perimeter.
    #[must_use]
    pub fn answer(&self) -> u32 {
        metrics::perimeter(&self.figure)
    }

    #[must_use]
    pub fn grade(&self, choice: u32) -> Verdict {
        if choice == self.answer() {
            Verdict::Correct { score: consts::EXERCISE_SCORE }
        } else {
            Verdict::Incorrect
        }
    }
}

/// Decide how two fixed figures relate on area and perimeter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonExercise {
    pub left_grid: GridSpec,
    pub left: Shape,
    pub right_grid: GridSpec,
    pub right: Shape,
}

impl ComparisonExercise {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            left_grid: GridSpec::from_dims(consts::COMPARISON_LEFT_GRID),
            left: Shape::from_pairs(&consts::COMPARISON_LEFT),
            right_grid: GridSpec::from_dims(consts::COMPARISON_RIGHT_GRID),
            right: Shape::from_pairs(&consts::COMPARISON_RIGHT),
        }
    }

    /// The correct choice, derived from the figures' measured metrics.
    #[must_use]
    pub fn answer(&self) -> Relation {
        relation(&self.left, &self.right)
    }

    #[must_use]
    pub fn grade(&self, choice: Relation) -> Verdict {
        if choice == self.answer() {
            Verdict::Correct { score: consts::EXERCISE_SCORE }
        } else {
            Verdict::Incorrect
        }
    }
}

/// The full fixed exercise set for one session, in play order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercises {
    pub counting: CountingExercise,
    pub area_building: BuildExercise,
    pub tracing: TracingExercise,
    pub comparison: ComparisonExercise,
    pub perimeter_building: BuildExercise,
}

impl Exercises {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            counting: CountingExercise::standard(),
            area_building: BuildExercise::area_standard(),
            tracing: TracingExercise::standard(),
            comparison: ComparisonExercise::standard(),
            perimeter_building: BuildExercise::perimeter_standard(),
        }
    }
}

impl Default for Exercises {
    fn default() -> Self {
        Self::standard()
    }
}
