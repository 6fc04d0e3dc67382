//! Drag interaction state machine for dashboard tiles.
//!
//! Discriminates clicks from drags, streams viewport-clamped positions
//! while the pointer moves, and produces a single snapped position on
//! release.

use crate::grid;
use crate::input::{CaptureGuard, NoopCapture, PointerCapture};
use crate::project::ProjectId;
use kurbo::{Point, Size, Vec2};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A press shorter than this with no movement counts as a click.
pub const CLICK_MAX_DURATION: Duration = Duration::from_millis(200);

/// Phase of an in-flight interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragPhase {
    /// Button is down, no move event seen yet.
    Pressed,
    /// At least one move event has arrived.
    Dragging,
}

/// State for the one tile currently being dragged.
#[derive(Debug)]
struct ActiveDrag {
    project: ProjectId,
    /// Pointer position relative to the tile origin at press time.
    grab_offset: Vec2,
    pressed_at: Instant,
    phase: DragPhase,
    /// Live viewport-clamped tile origin.
    position: Point,
    _capture: CaptureGuard,
}

/// How a press on a tile resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Quick press with no movement: a selection, position untouched.
    Clicked(ProjectId),
    /// A real drag: the grid-snapped position to commit.
    Dropped { project: ProjectId, position: Point },
}

/// Per-tile pointer handling with a single active drag.
///
/// A press while another drag is in flight is ignored, so at most one tile
/// is ever in the `Pressed`/`Dragging` phases.
pub struct DragController {
    capture: Arc<dyn PointerCapture>,
    active: Option<ActiveDrag>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::headless()
    }
}

impl DragController {
    /// Create a controller that holds the given pointer capture while a
    /// drag is in flight.
    pub fn new(capture: Arc<dyn PointerCapture>) -> Self {
        Self {
            capture,
            active: None,
        }
    }

    /// Controller without a real capture backend.
    pub fn headless() -> Self {
        Self::new(Arc::new(NoopCapture))
    }

    /// Primary-button press on a tile. Records the grab offset and press
    /// time and acquires pointer capture. Returns false (and does nothing)
    /// if a drag is already active.
    pub fn pointer_down(
        &mut self,
        project: ProjectId,
        tile_origin: Point,
        pointer: Point,
        at: Instant,
    ) -> bool {
        if self.active.is_some() {
            return false;
        }

        self.active = Some(ActiveDrag {
            project,
            grab_offset: pointer - tile_origin,
            pressed_at: at,
            phase: DragPhase::Pressed,
            position: tile_origin,
            _capture: CaptureGuard::acquire(self.capture.clone()),
        });
        true
    }

    /// Pointer movement. Any move, however small, turns the press into a
    /// drag. Returns the clamped live tile origin to write into the shared
    /// project list, or None when no drag is active.
    pub fn pointer_move(&mut self, pointer: Point, viewport: Size) -> Option<(ProjectId, Point)> {
        let drag = self.active.as_mut()?;

        drag.phase = DragPhase::Dragging;
        drag.position = grid::clamp_to_viewport(pointer - drag.grab_offset, viewport);
        Some((drag.project, drag.position))
    }

    /// Pointer release. Resolves the interaction to a click or a snapped
    /// drop and releases pointer capture.
    pub fn pointer_up(&mut self, at: Instant, viewport: Size) -> Option<DragOutcome> {
        let drag = self.active.take()?;

        let elapsed = at.duration_since(drag.pressed_at);
        if drag.phase == DragPhase::Pressed && elapsed < CLICK_MAX_DURATION {
            log::debug!("tile {} clicked after {:?}", drag.project, elapsed);
            return Some(DragOutcome::Clicked(drag.project));
        }

        let position = grid::snap_to_grid(drag.position, viewport);
        log::debug!(
            "tile {} dropped at ({}, {})",
            drag.project,
            position.x,
            position.y
        );
        Some(DragOutcome::Dropped {
            project: drag.project,
            position,
        })
    }

    /// Abort the in-flight interaction, releasing capture and leaving the
    /// tile wherever the last move put it.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Whether a press or drag is in flight.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The tile currently being pressed or dragged.
    pub fn active_project(&self) -> Option<ProjectId> {
        self.active.as_ref().map(|drag| drag.project)
    }
}
