//! Grid tests - toroidal wrap, indexing and adjacency

use tui_snake::core::grid::{contains, from_index, neighbors4, to_index, wrap};
use tui_snake::types::{GridSize, Point, DEFAULT_COLS, DEFAULT_ROWS};

fn default_size() -> GridSize {
    GridSize::new(DEFAULT_ROWS, DEFAULT_COLS).unwrap()
}

#[test]
fn test_wrap_lands_in_bounds_for_all_one_step_overshoots() {
    let bounds = default_size();
    for row in -1..=DEFAULT_ROWS {
        for col in -1..=DEFAULT_COLS {
            let p = wrap(Point::new(row, col), bounds);
            assert!(
                (0..DEFAULT_ROWS).contains(&p.row) && (0..DEFAULT_COLS).contains(&p.col),
                "({}, {}) wrapped to {}",
                row,
                col,
                p
            );
        }
    }
}

#[test]
fn test_wrap_is_identity_inside_grid() {
    let bounds = default_size();
    for idx in 0..bounds.cell_count() {
        let p = from_index(idx, bounds);
        assert!(contains(p, bounds));
        assert_eq!(wrap(p, bounds), p);
        assert_eq!(to_index(p, bounds), idx);
    }
}

#[test]
fn test_neighbors_are_adjacent_and_distinct() {
    let bounds = default_size();
    let center = bounds.center();
    let n = neighbors4(center, bounds);

    assert!(n.contains(&Point::new(center.row - 1, center.col)));
    assert!(n.contains(&Point::new(center.row + 1, center.col)));
    assert!(n.contains(&Point::new(center.row, center.col - 1)));
    assert!(n.contains(&Point::new(center.row, center.col + 1)));
    assert!(!n.contains(&center));
}

#[test]
fn test_neighbors_wrap_on_far_corner() {
    let bounds = default_size();
    let n = neighbors4(Point::new(9, 49), bounds);
    assert!(n.contains(&Point::new(0, 49)));
    assert!(n.contains(&Point::new(9, 0)));
    assert!(n.contains(&Point::new(8, 49)));
    assert!(n.contains(&Point::new(9, 48)));
}
