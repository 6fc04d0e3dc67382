//! Tileboard Core Library
//!
//! Spatial tile layout engine for the Tileboard dashboard: grid geometry,
//! click/drag discrimination, new-tile placement, resize reflow, and
//! optimistic position persistence.

pub mod board;
pub mod drag;
pub mod grid;
pub mod input;
pub mod placement;
pub mod project;
pub mod reflow;
pub mod store;
pub mod sync;
pub mod theme;

pub use board::{Dashboard, DashboardEvent};
pub use drag::{CLICK_MAX_DURATION, DragController, DragOutcome};
pub use grid::{GRID_SIZE, GridCell, MARGIN, TILE_SIZE, clamp_to_viewport, columns_for, snap_to_grid};
pub use input::{CaptureGuard, MouseButton, NoopCapture, PointerCapture};
pub use placement::next_free_position;
pub use project::{Project, ProjectCore, ProjectId, ProjectUpdate};
pub use reflow::reflow;
pub use store::{MemoryStore, ProjectStore, StoreError, StoreResult};
pub use sync::PositionSync;
pub use theme::Theme;

#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
