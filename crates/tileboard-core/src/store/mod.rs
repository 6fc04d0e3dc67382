//! Project store abstraction for persistence.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

use crate::project::{Project, ProjectId, ProjectUpdate};
use kurbo::Point;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Store error: {0}")]
    Other(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Boxed future for async store operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for project store backends.
///
/// The layout engine creates projects with caller-supplied positions and
/// writes position-only partial updates on drag commits. Implementations
/// must return the list in insertion order.
pub trait ProjectStore: Send + Sync {
    /// List all projects, oldest first.
    fn list(&self) -> BoxFuture<'_, StoreResult<Vec<Project>>>;

    /// Create a project at the given position.
    fn create(&self, name: &str, position: Point) -> BoxFuture<'_, StoreResult<Project>>;

    /// Apply a partial update to a project and return the stored entity.
    fn update(&self, id: ProjectId, update: ProjectUpdate) -> BoxFuture<'_, StoreResult<Project>>;

    /// Delete a project.
    fn delete(&self, id: ProjectId) -> BoxFuture<'_, StoreResult<()>>;
}
