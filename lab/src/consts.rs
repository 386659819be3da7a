//! Fixed figures, grid sizes, and targets for the shape exercises.

// ── Scoring ─────────────────────────────────────────────────────

/// Points awarded for solving one exercise.
pub const EXERCISE_SCORE: u32 = 100;

// ── Grids (columns × rows, 1-indexed inclusive) ─────────────────

/// Play area for the area-counting exercise.
pub const COUNTING_GRID: (i32, i32) = (6, 5);

/// Play area for the area-building exercise.
pub const AREA_BUILD_GRID: (i32, i32) = (5, 5);

/// Play area for the perimeter-tracing exercise.
pub const TRACING_GRID: (i32, i32) = (6, 5);

/// Play areas the two comparison figures are shown on.
pub const COMPARISON_LEFT_GRID: (i32, i32) = (4, 5);
pub const COMPARISON_RIGHT_GRID: (i32, i32) = (5, 5);

/// Play area for the perimeter-building exercise.
pub const PERIMETER_BUILD_GRID: (i32, i32) = (6, 6);

// ── Targets and answer options ──────────────────────────────────

/// Area the child must build in the area-building exercise.
pub const AREA_TARGET: u32 = 10;

/// Perimeter the child must build in the perimeter-building exercise.
pub const PERIMETER_TARGET: u32 = 14;

/// Multiple-choice options offered for the counting exercise.
pub const COUNTING_OPTIONS: [u32; 3] = [9, 10, 12];

/// Multiple-choice options offered for the tracing exercise.
pub const TRACING_OPTIONS: [u32; 3] = [8, 10, 12];

// ── Fixed figures, as (column, row) pairs ───────────────────────

/// 4×3 rectangle counted in the first exercise.
pub const COUNTING_FIGURE: [(i32, i32); 12] = [
    (1, 1), (2, 1), (3, 1), (4, 1),
    (1, 2), (2, 2), (3, 2), (4, 2),
    (1, 3), (2, 3), (3, 3), (4, 3),
];

/// 3×2 rectangle whose perimeter is traced in the third exercise.
pub const TRACING_FIGURE: [(i32, i32); 6] = [
    (2, 2), (3, 2), (4, 2),
    (2, 3), (3, 3), (4, 3),
];

/// 3×4 rectangle on the left of the comparison exercise.
pub const COMPARISON_LEFT: [(i32, i32); 12] = [
    (1, 1), (2, 1), (3, 1),
    (1, 2), (2, 2), (3, 2),
    (1, 3), (2, 3), (3, 3),
    (1, 4), (2, 4), (3, 4),
];

/// L-shaped figure on the right of the comparison exercise. Same area as
/// the rectangle, different perimeter.
pub const COMPARISON_RIGHT: [(i32, i32); 12] = [
    (1, 1), (2, 1), (3, 1), (4, 1),
    (1, 2), (2, 2),
    (1, 3), (2, 3),
    (1, 4), (2, 4), (3, 4), (4, 4),
];
