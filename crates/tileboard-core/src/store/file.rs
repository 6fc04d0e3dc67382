//! File-based store implementation for native platforms.

use super::{BoxFuture, ProjectStore, StoreError, StoreResult};
use crate::project::{Project, ProjectId, ProjectUpdate};
use kurbo::Point;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// File-based store for native platforms.
///
/// Persists the whole project list as one JSON file, preserving insertion
/// order across reloads. Operations serialize through a mutex so concurrent
/// persistence tasks never interleave partial writes.
pub struct FileStore {
    /// Path of the JSON file holding the board.
    path: PathBuf,
    io: Mutex<()>,
}

impl FileStore {
    /// Create a file store backed by the given file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn new(path: PathBuf) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Io(format!("Failed to create store directory: {}", e))
                })?;
            }
        }
        Ok(Self {
            path,
            io: Mutex::new(()),
        })
    }

    /// Create a file store in the default location.
    ///
    /// On Unix: `~/.local/share/tileboard/projects.json`.
    pub fn default_location() -> StoreResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StoreError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("tileboard").join("projects.json"))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_all(&self) -> StoreResult<Vec<Project>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Io(format!("Failed to read {}: {}", self.path.display(), e)))?;
        serde_json::from_str(&json).map_err(|e| {
            StoreError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write_all(&self, projects: &[Project]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(projects)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| StoreError::Io(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}

impl ProjectStore for FileStore {
    fn list(&self) -> BoxFuture<'_, StoreResult<Vec<Project>>> {
        Box::pin(async move {
            let _io = self
                .io
                .lock()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            self.read_all()
        })
    }

    fn create(&self, name: &str, position: Point) -> BoxFuture<'_, StoreResult<Project>> {
        let project = Project::new(name, position);
        Box::pin(async move {
            let _io = self
                .io
                .lock()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            let mut projects = self.read_all()?;
            projects.push(project.clone());
            self.write_all(&projects)?;
            Ok(project)
        })
    }

    fn update(&self, id: ProjectId, update: ProjectUpdate) -> BoxFuture<'_, StoreResult<Project>> {
        Box::pin(async move {
            let _io = self
                .io
                .lock()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            let mut projects = self.read_all()?;
            let project = projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(StoreError::NotFound(id))?;
            update.apply_to(project);
            let updated = project.clone();
            self.write_all(&projects)?;
            Ok(updated)
        })
    }

    fn delete(&self, id: ProjectId) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let _io = self
                .io
                .lock()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            let mut projects = self.read_all()?;
            projects.retain(|p| p.id != id);
            self.write_all(&projects)
        })
    }
}
