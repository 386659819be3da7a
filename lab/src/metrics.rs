//! Shape metrics: area and perimeter of a set of occupied unit cells.
//!
//! Both functions are pure and total. Perimeter is computed by edge
//! exposure: every cell contributes one unit for each of its four neighbors
//! that is not itself occupied. Edges shared by two occupied cells are never
//! counted, so the result is the standard lattice-polyomino perimeter, and
//! connectivity of the input is irrelevant.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use crate::grid::Shape;

/// Number of occupied cells.
#[must_use]
pub fn area(shape: &Shape) -> u32 {
    u32::try_from(shape.len()).unwrap_or(u32::MAX)
}

/// Number of occupied-cell edges bordering an unoccupied cell.
///
/// An empty shape has no cells to examine and measures 0.
#[must_use]
pub fn perimeter(shape: &Shape) -> u32 {
    let mut exposed = 0;
    for cell in shape.iter() {
        for neighbor in cell.neighbors() {
            if !shape.contains(neighbor) {
                exposed += 1;
            }
        }
    }
    exposed
}
