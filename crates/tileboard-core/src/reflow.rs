//! Reflow of tile positions after a viewport resize.

use crate::grid;
use crate::project::{Project, ProjectId};
use kurbo::Size;

/// Re-snap every tile under the new viewport dimensions.
///
/// Each tile is remapped independently from its existing position; the list
/// is never reordered and no tiles are added or removed. A tile whose old
/// cell no longer exists in the new column count is pulled inside bounds by
/// the snap clamp, which can land two tiles on the same cell. That collision
/// is accepted and not corrected here.
///
/// Returns the ids of the tiles that actually moved. The new positions are
/// in-memory only; resize-triggered moves are not persisted.
pub fn reflow(projects: &mut [Project], viewport: Size) -> Vec<ProjectId> {
    let mut moved = Vec::new();

    for project in projects.iter_mut() {
        let snapped = grid::snap_to_grid(project.position, viewport);
        if snapped != project.position {
            project.position = snapped;
            moved.push(project.id);
        }
    }

    moved
}
