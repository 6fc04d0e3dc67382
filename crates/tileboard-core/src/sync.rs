//! Optimistic position synchronization.
//!
//! Applies layout changes to the in-memory project list immediately and
//! persists them through the store as detached tasks. A failed write is
//! logged and the optimistic state is kept; the next full reload surfaces
//! whatever the store last accepted.

use crate::project::{Project, ProjectId, ProjectUpdate};
use crate::store::ProjectStore;
use kurbo::Point;
use std::sync::Arc;

/// Commits tile positions: synchronously in memory, asynchronously to the
/// store.
///
/// Each commit spawns one persistence task and retains no handle to it.
/// In-flight writes are never cancelled and overlapping commits for the
/// same tile carry no ordering guarantee: the last store response to
/// complete wins, not the last commit issued.
pub struct PositionSync<S> {
    store: Arc<S>,
}

impl<S: ProjectStore + 'static> PositionSync<S> {
    /// Create a synchronizer over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Apply a new position to the list and request persistence for that
    /// single tile.
    ///
    /// Must be called from within a tokio runtime. Persistence failure is
    /// logged and the in-memory position is not rolled back.
    pub fn commit(&self, projects: &mut [Project], id: ProjectId, position: Point) {
        if let Some(project) = projects.iter_mut().find(|p| p.id == id) {
            project.position = position;
        }

        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            if let Err(e) = store.update(id, ProjectUpdate::position(position)).await {
                log::error!("Failed to persist position for project {}: {}", id, e);
            }
        });
    }
}
