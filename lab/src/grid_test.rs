use super::*;

#[test]
fn new_shape_is_empty() {
    let shape = Shape::new();
    assert!(shape.is_empty());
    assert_eq!(shape.len(), 0);
}

#[test]
fn toggle_adds_then_removes() {
    let mut shape = Shape::new();
    let cell = Cell::new(2, 3);

    assert!(shape.toggle(cell));
    assert!(shape.contains(cell));
    assert_eq!(shape.len(), 1);

    assert!(!shape.toggle(cell));
    assert!(!shape.contains(cell));
    assert!(shape.is_empty());
}

#[test]
fn toggle_twice_restores_prior_state() {
    let mut shape = Shape::from_pairs(&[(1, 1), (2, 1), (3, 1)]);
    let before = shape.clone();

    shape.toggle(Cell::new(5, 5));
    shape.toggle(Cell::new(5, 5));

    assert_eq!(shape, before);
}

#[test]
fn insert_is_idempotent_on_duplicates() {
    let mut shape = Shape::new();
    assert!(shape.insert(Cell::new(1, 1)));
    assert!(!shape.insert(Cell::new(1, 1)));
    assert_eq!(shape.len(), 1);
}

#[test]
fn remove_missing_cell_reports_false() {
    let mut shape = Shape::new();
    assert!(!shape.remove(Cell::new(9, 9)));
}

#[test]
fn from_pairs_collapses_duplicates() {
    let shape = Shape::from_pairs(&[(1, 1), (2, 2), (1, 1)]);
    assert_eq!(shape.len(), 2);
}

#[test]
fn insertion_order_is_irrelevant() {
    let a = Shape::from_pairs(&[(1, 1), (2, 1), (3, 1)]);
    let b = Shape::from_pairs(&[(3, 1), (1, 1), (2, 1)]);
    assert_eq!(a, b);
}

#[test]
fn clear_empties_the_shape() {
    let mut shape = Shape::from_pairs(&[(1, 1), (2, 2)]);
    shape.clear();
    assert!(shape.is_empty());
}

#[test]
fn neighbors_are_the_four_axis_aligned_cells() {
    let cell = Cell::new(3, 3);
    let neighbors = cell.neighbors();
    assert!(neighbors.contains(&Cell::new(3, 2)));
    assert!(neighbors.contains(&Cell::new(3, 4)));
    assert!(neighbors.contains(&Cell::new(2, 3)));
    assert!(neighbors.contains(&Cell::new(4, 3)));
}

#[test]
fn neighbors_step_past_the_grid_origin() {
    let neighbors = Cell::new(1, 1).neighbors();
    assert!(neighbors.contains(&Cell::new(0, 1)));
    assert!(neighbors.contains(&Cell::new(1, 0)));
}

#[test]
fn grid_spec_contains_is_one_indexed_inclusive() {
    let grid = GridSpec::new(5, 5);
    assert!(grid.contains(Cell::new(1, 1)));
    assert!(grid.contains(Cell::new(5, 5)));
    assert!(!grid.contains(Cell::new(0, 1)));
    assert!(!grid.contains(Cell::new(6, 5)));
    assert!(!grid.contains(Cell::new(3, 0)));
}

#[test]
fn cell_serde_round_trip() {
    let cell = Cell::new(4, 2);
    let json = serde_json::to_string(&cell).unwrap();
    assert_eq!(json, r#"{"col":4,"row":2}"#);
    let restored: Cell = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, cell);
}

#[test]
fn shape_serde_round_trip() {
    let shape = Shape::from_pairs(&[(1, 1), (2, 1)]);
    let json = serde_json::to_string(&shape).unwrap();
    let restored: Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, shape);
}
