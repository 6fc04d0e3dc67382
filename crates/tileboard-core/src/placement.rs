//! Placement of newly created tiles on the grid.

use crate::grid::{self, GridCell, MARGIN};
use crate::project::Project;
use kurbo::Point;

/// Position for a new tile: the cell after the last occupied one, in
/// row-major reading order.
///
/// Scans the derived cell of every existing tile, takes the maximum row and
/// the maximum column within that row, and appends after it, wrapping to the
/// next row when the column count is exceeded. Cells freed by deleting a
/// tile from the middle of the grid are never reused; the layout only grows
/// at the end.
pub fn next_free_position(projects: &[Project], viewport_width: f64) -> Point {
    let cols = grid::columns_for(viewport_width) as i64;

    if projects.is_empty() {
        return Point::new(MARGIN, MARGIN);
    }

    let mut max_row = 0i64;
    let mut max_col_in_bottom_row = -1i64;

    for project in projects {
        let cell = grid::cell_of(project.position);
        if cell.row > max_row {
            max_row = cell.row;
            max_col_in_bottom_row = cell.col;
        } else if cell.row == max_row && cell.col > max_col_in_bottom_row {
            max_col_in_bottom_row = cell.col;
        }
    }

    let mut next_col = max_col_in_bottom_row + 1;
    let mut next_row = max_row;
    if next_col >= cols {
        next_col = 0;
        next_row = max_row + 1;
    }

    grid::cell_origin(GridCell::new(next_row, next_col))
}
