//! In-memory store implementation.

use super::{BoxFuture, ProjectStore, StoreError, StoreResult};
use crate::project::{Project, ProjectId, ProjectUpdate};
use kurbo::Point;
use std::sync::RwLock;

/// In-memory store for testing and ephemeral use.
///
/// Projects are kept in creation order, matching the insertion-order
/// contract of the trait.
#[derive(Default)]
pub struct MemoryStore {
    projects: RwLock<Vec<Project>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given projects.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects),
        }
    }
}

impl ProjectStore for MemoryStore {
    fn list(&self) -> BoxFuture<'_, StoreResult<Vec<Project>>> {
        Box::pin(async move {
            let projects = self
                .projects
                .read()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            Ok(projects.clone())
        })
    }

    fn create(&self, name: &str, position: Point) -> BoxFuture<'_, StoreResult<Project>> {
        let project = Project::new(name, position);
        Box::pin(async move {
            let mut projects = self
                .projects
                .write()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            projects.push(project.clone());
            Ok(project)
        })
    }

    fn update(&self, id: ProjectId, update: ProjectUpdate) -> BoxFuture<'_, StoreResult<Project>> {
        Box::pin(async move {
            let mut projects = self
                .projects
                .write()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            let project = projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(StoreError::NotFound(id))?;
            update.apply_to(project);
            Ok(project.clone())
        })
    }

    fn delete(&self, id: ProjectId) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let mut projects = self
                .projects
                .write()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            projects.retain(|p| p.id != id);
            Ok(())
        })
    }
}
