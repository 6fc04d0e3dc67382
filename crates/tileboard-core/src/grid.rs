//! Grid coordinate system: pixel/cell conversion, snapping, and clamping.

use kurbo::{Point, Size};

/// Tile edge length in pixels.
pub const TILE_SIZE: f64 = 150.0;
/// Grid pitch in pixels (tile size + spacing).
pub const GRID_SIZE: f64 = 180.0;
/// Inset from the viewport edges to the first cell origin.
pub const MARGIN: f64 = 30.0;

/// A discrete grid coordinate derived from a pixel position.
///
/// Cells are a computation over tile positions; they are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: i64,
    pub col: i64,
}

impl GridCell {
    /// Create a cell from row/col indices.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Number of grid columns that fit in the given viewport width.
///
/// Always at least 1: a degenerate viewport must not produce a
/// zero-column layout downstream.
pub fn columns_for(viewport_width: f64) -> usize {
    let cols = ((viewport_width - 2.0 * MARGIN) / GRID_SIZE).floor();
    if cols < 1.0 { 1 } else { cols as usize }
}

/// The cell whose origin is nearest to the given pixel position.
pub fn cell_of(position: Point) -> GridCell {
    GridCell {
        row: ((position.y - MARGIN) / GRID_SIZE).round() as i64,
        col: ((position.x - MARGIN) / GRID_SIZE).round() as i64,
    }
}

/// Pixel origin of a cell.
pub fn cell_origin(cell: GridCell) -> Point {
    Point::new(
        MARGIN + cell.col as f64 * GRID_SIZE,
        MARGIN + cell.row as f64 * GRID_SIZE,
    )
}

/// Snap a tile position to the nearest cell origin, bounded to the viewport.
///
/// Rounding is half-away-from-zero per axis. The result is held inside
/// `[MARGIN, viewport - TILE_SIZE - MARGIN]`; when the viewport is too small
/// to admit a cell the lower bound wins.
pub fn snap_to_grid(position: Point, viewport: Size) -> Point {
    let grid_x = ((position.x - MARGIN) / GRID_SIZE).round() * GRID_SIZE + MARGIN;
    let grid_y = ((position.y - MARGIN) / GRID_SIZE).round() * GRID_SIZE + MARGIN;

    let max_x = viewport.width - TILE_SIZE - MARGIN;
    let max_y = viewport.height - TILE_SIZE - MARGIN;

    Point::new(grid_x.min(max_x).max(MARGIN), grid_y.min(max_y).max(MARGIN))
}

/// Clamp a raw (unsnapped) tile position so the whole tile stays inside the
/// viewport. Used during live dragging; MARGIN is not enforced mid-drag.
pub fn clamp_to_viewport(position: Point, viewport: Size) -> Point {
    let max_x = viewport.width - TILE_SIZE;
    let max_y = viewport.height - TILE_SIZE;

    Point::new(position.x.min(max_x).max(0.0), position.y.min(max_y).max(0.0))
}
