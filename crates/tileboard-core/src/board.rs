//! Dashboard runtime state: the shared project list plus the layout engine
//! wired around it.

use crate::drag::{DragController, DragOutcome};
use crate::input::{MouseButton, PointerCapture};
use crate::placement;
use crate::project::{Project, ProjectId, ProjectUpdate};
use crate::reflow;
use crate::store::{ProjectStore, StoreResult};
use crate::sync::PositionSync;
use crate::theme::Theme;
use kurbo::{Point, Size};
use std::sync::Arc;
use std::time::Instant;

/// Collaborator notifications produced by pointer handling.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// A tile was clicked (not dragged); carries the full entity.
    Selected(Project),
    /// Secondary-button press on a tile, with the pointer position.
    ContextMenu { project: Project, position: Point },
    /// A drag ended and the snapped position was committed.
    Moved { project: ProjectId, position: Point },
}

/// A dashboard of project tiles over a store.
///
/// Owns the in-memory project list; all mutation goes through one caller
/// (the shell's event loop). Persistence tasks only ever talk to the store,
/// never to this state.
pub struct Dashboard<S> {
    projects: Vec<Project>,
    viewport: Size,
    theme: Theme,
    drag: DragController,
    sync: PositionSync<S>,
}

impl<S: ProjectStore + 'static> Dashboard<S> {
    /// Create an empty dashboard over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            projects: Vec::new(),
            viewport: Size::new(800.0, 600.0),
            theme: Theme::default(),
            drag: DragController::headless(),
            sync: PositionSync::new(store),
        }
    }

    /// Create a dashboard whose drags hold the given pointer capture.
    pub fn with_capture(store: Arc<S>, capture: Arc<dyn PointerCapture>) -> Self {
        Self {
            drag: DragController::new(capture),
            ..Self::new(store)
        }
    }

    /// Replace the project list with the store's contents.
    pub async fn load(&mut self) -> StoreResult<()> {
        self.projects = self.sync.store().list().await?;
        log::info!("Loaded {} projects", self.projects.len());
        Ok(())
    }

    /// The shared project list, in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by id.
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Current viewport size.
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Set the viewport size without reflowing (initial layout).
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch the theme. The shell applies the class name itself.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Where the next created tile will land.
    pub fn next_tile_position(&self) -> Point {
        placement::next_free_position(&self.projects, self.viewport.width)
    }

    /// Create a project at the next free grid cell.
    ///
    /// Creation is awaited (not fire-and-forget): the tile only appears
    /// once the store has accepted it.
    pub async fn create_project(&mut self, name: &str) -> StoreResult<Project> {
        let position = self.next_tile_position();
        let project = self.sync.store().create(name, position).await?;
        self.projects.push(project.clone());
        Ok(project)
    }

    /// Rename a project, preserving its position and core content.
    pub async fn rename_project(&mut self, id: ProjectId, name: &str) -> StoreResult<()> {
        self.sync.store().update(id, ProjectUpdate::name(name)).await?;
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == id) {
            project.name = name.to_string();
        }
        Ok(())
    }

    /// Delete a project. The cell it occupied is left as a hole.
    pub async fn delete_project(&mut self, id: ProjectId) -> StoreResult<()> {
        self.sync.store().delete(id).await?;
        self.projects.retain(|p| p.id != id);
        if self.drag.active_project() == Some(id) {
            self.drag.cancel();
        }
        Ok(())
    }

    /// Button press on a tile.
    ///
    /// A secondary-button press raises the context menu and never enters
    /// the drag machine. A primary-button press arms a potential drag.
    pub fn pointer_down(
        &mut self,
        id: ProjectId,
        button: MouseButton,
        pointer: Point,
        at: Instant,
    ) -> Option<DashboardEvent> {
        let project = self.project(id)?.clone();

        match button {
            MouseButton::Right => Some(DashboardEvent::ContextMenu {
                project,
                position: pointer,
            }),
            MouseButton::Left => {
                self.drag.pointer_down(id, project.position, pointer, at);
                None
            }
            MouseButton::Middle => None,
        }
    }

    /// Pointer movement. While a drag is active, writes the clamped live
    /// position straight into the project list (optimistic, unsnapped,
    /// unpersisted). Returns whether a tile moved.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some((id, position)) = self.drag.pointer_move(pointer, self.viewport) else {
            return false;
        };
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == id) {
            project.position = position;
        }
        true
    }

    /// Pointer release: resolves to a selection or a committed move.
    ///
    /// Must be called from within a tokio runtime (commits spawn their
    /// persistence task).
    pub fn pointer_up(&mut self, at: Instant) -> Option<DashboardEvent> {
        match self.drag.pointer_up(at, self.viewport)? {
            DragOutcome::Clicked(id) => self.project(id).cloned().map(DashboardEvent::Selected),
            DragOutcome::Dropped { project, position } => {
                self.sync.commit(&mut self.projects, project, position);
                Some(DashboardEvent::Moved { project, position })
            }
        }
    }

    /// Viewport resize: re-snap every tile to the new grid.
    ///
    /// The remapped positions stay local; resize-triggered moves are not
    /// persisted. Returns the ids of the tiles that moved.
    pub fn handle_resize(&mut self, size: Size) -> Vec<ProjectId> {
        self.viewport = size;
        let moved = reflow::reflow(&mut self.projects, size);
        if !moved.is_empty() {
            log::debug!("Reflowed {} tiles after resize", moved.len());
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MARGIN;
    use crate::store::MemoryStore;
    use std::time::Duration;

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    async fn board_with(names: &[&str]) -> Dashboard<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        let mut board = Dashboard::new(store);
        board.set_viewport_size(Size::new(800.0, 600.0));
        for name in names {
            board.create_project(name).await.unwrap();
        }
        board
    }

    #[tokio::test]
    async fn test_create_places_on_grid() {
        let mut board = board_with(&[]).await;

        let first = board.create_project("a").await.unwrap();
        assert_eq!(first.position, Point::new(MARGIN, MARGIN));

        let second = board.create_project("b").await.unwrap();
        assert_eq!(second.position, Point::new(210.0, 30.0));

        // Both live in memory and in the store.
        assert_eq!(board.projects().len(), 2);
        assert_eq!(board.sync.store().list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_click_selects_without_moving() {
        let mut board = board_with(&["a"]).await;
        let id = board.projects()[0].id;
        let start = Instant::now();

        board.pointer_down(id, MouseButton::Left, Point::new(50.0, 50.0), start);
        let event = board.pointer_up(start + Duration::from_millis(100));

        match event {
            Some(DashboardEvent::Selected(project)) => {
                assert_eq!(project.id, id);
                assert_eq!(project.name, "a");
            }
            other => panic!("expected Selected, got {:?}", other),
        }

        settle().await;
        assert_eq!(board.projects()[0].position, Point::new(MARGIN, MARGIN));
        let stored = board.sync.store().list().await.unwrap();
        assert_eq!(stored[0].position, Point::new(MARGIN, MARGIN));
    }

    #[tokio::test]
    async fn test_drag_commits_snapped_position() {
        let mut board = board_with(&["a"]).await;
        let id = board.projects()[0].id;
        let start = Instant::now();

        // Grab the tile at its origin and drag it to (167, 95).
        board.pointer_down(id, MouseButton::Left, Point::new(30.0, 30.0), start);
        assert!(board.pointer_move(Point::new(167.0, 95.0)));
        // The live position is unsnapped.
        assert_eq!(board.projects()[0].position, Point::new(167.0, 95.0));

        let event = board.pointer_up(start + Duration::from_millis(400));
        assert_eq!(
            event,
            Some(DashboardEvent::Moved {
                project: id,
                position: Point::new(210.0, 30.0),
            })
        );
        assert_eq!(board.projects()[0].position, Point::new(210.0, 30.0));

        settle().await;
        let stored = board.sync.store().list().await.unwrap();
        assert_eq!(stored[0].position, Point::new(210.0, 30.0));
    }

    #[tokio::test]
    async fn test_drag_never_selects() {
        let mut board = board_with(&["a"]).await;
        let id = board.projects()[0].id;
        let start = Instant::now();

        board.pointer_down(id, MouseButton::Left, Point::new(30.0, 30.0), start);
        board.pointer_move(Point::new(31.0, 30.0));
        // Released inside the click window, but a move was seen.
        let event = board.pointer_up(start + Duration::from_millis(50));

        assert!(matches!(event, Some(DashboardEvent::Moved { .. })));
    }

    #[tokio::test]
    async fn test_right_click_raises_context_menu() {
        let mut board = board_with(&["a"]).await;
        let id = board.projects()[0].id;

        let event = board.pointer_down(
            id,
            MouseButton::Right,
            Point::new(90.0, 80.0),
            Instant::now(),
        );

        match event {
            Some(DashboardEvent::ContextMenu { project, position }) => {
                assert_eq!(project.id, id);
                assert_eq!(position, Point::new(90.0, 80.0));
            }
            other => panic!("expected ContextMenu, got {:?}", other),
        }
        // The context menu never arms a drag.
        assert!(!board.pointer_move(Point::new(200.0, 200.0)));
    }

    #[tokio::test]
    async fn test_resize_reflows_without_persisting() {
        let mut board = board_with(&[]).await;
        board.set_viewport_size(Size::new(1920.0, 1080.0));
        let project = board.create_project("far").await.unwrap();
        // Drag it to the right edge and let it settle there.
        let start = Instant::now();
        board.pointer_down(project.id, MouseButton::Left, Point::new(30.0, 30.0), start);
        board.pointer_move(Point::new(930.0, 35.0));
        board.pointer_up(start + Duration::from_millis(400));
        settle().await;
        let stored_before = board.sync.store().list().await.unwrap()[0].position;

        let moved = board.handle_resize(Size::new(640.0, 480.0));

        assert_eq!(moved, vec![project.id]);
        // In memory the tile was pulled inside the new bounds...
        assert_eq!(board.projects()[0].position, Point::new(460.0, 30.0));
        // ...but the store still has the pre-resize position.
        settle().await;
        let stored_after = board.sync.store().list().await.unwrap()[0].position;
        assert_eq!(stored_after, stored_before);
    }

    #[tokio::test]
    async fn test_rename_preserves_position() {
        let mut board = board_with(&["a", "b"]).await;
        let id = board.projects()[1].id;

        board.rename_project(id, "renamed").await.unwrap();

        assert_eq!(board.projects()[1].name, "renamed");
        assert_eq!(board.projects()[1].position, Point::new(210.0, 30.0));
        let stored = board.sync.store().list().await.unwrap();
        assert_eq!(stored[1].name, "renamed");
    }

    #[tokio::test]
    async fn test_delete_leaves_a_hole() {
        let mut board = board_with(&["a", "b", "c"]).await;
        let id = board.projects()[1].id;

        board.delete_project(id).await.unwrap();

        assert_eq!(board.projects().len(), 2);
        // The freed cell is not reused; placement continues after "c".
        let next = board.create_project("d").await.unwrap();
        assert_eq!(next.position, Point::new(570.0, 30.0));
    }

    #[tokio::test]
    async fn test_load_replaces_list() {
        let store = Arc::new(MemoryStore::with_projects(vec![
            Project::new("x", Point::new(30.0, 30.0)),
            Project::new("y", Point::new(210.0, 30.0)),
        ]));

        let mut board = Dashboard::new(store);
        board.load().await.unwrap();

        let names: Vec<_> = board.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[tokio::test]
    async fn test_pointer_down_on_unknown_tile_is_ignored() {
        let mut board = board_with(&["a"]).await;

        let event = board.pointer_down(
            uuid::Uuid::new_v4(),
            MouseButton::Left,
            Point::new(50.0, 50.0),
            Instant::now(),
        );

        assert!(event.is_none());
        assert!(!board.pointer_move(Point::new(100.0, 100.0)));
    }
}
