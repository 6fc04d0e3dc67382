//! Project entity and its partial-update form.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project tile.
pub type ProjectId = Uuid;

/// Core content of a project, filled in by the setup wizard.
///
/// Opaque to the layout engine; carried through every position rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_sentence_pitch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_solution: Option<String>,
}

impl ProjectCore {
    /// Whether any core field has been filled in.
    pub fn is_empty(&self) -> bool {
        self.one_sentence_pitch.is_none()
            && self.problem_statement.is_none()
            && self.target_audience.is_none()
            && self.unique_solution.is_none()
    }
}

/// A project tile on the dashboard canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, immutable once assigned.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// Whether the setup wizard has been completed.
    pub is_setup_complete: bool,
    /// Pixel-space top-left corner of the tile.
    pub position: Point,
    /// Core content, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub core: Option<ProjectCore>,
}

impl Project {
    /// Create a project at the given position.
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_setup_complete: false,
            position,
            core: None,
        }
    }
}

/// Partial update sent to the project store.
///
/// Only the fields that are `Some` are written; everything else is left
/// untouched on the stored entity. Drag and reflow commits carry only the
/// position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_setup_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core: Option<ProjectCore>,
}

impl ProjectUpdate {
    /// An update carrying only a new position.
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// An update carrying only a new name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Apply the set fields to a project in place.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(done) = self.is_setup_complete {
            project.is_setup_complete = done;
        }
        if let Some(position) = self.position {
            project.position = position;
        }
        if let Some(core) = &self.core {
            project.core = Some(core.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project() {
        let project = Project::new("Alpha", Point::new(30.0, 30.0));
        assert_eq!(project.name, "Alpha");
        assert!(!project.is_setup_complete);
        assert!(project.core.is_none());
    }

    #[test]
    fn test_position_update_preserves_other_fields() {
        let mut project = Project::new("Alpha", Point::new(30.0, 30.0));
        project.is_setup_complete = true;
        project.core = Some(ProjectCore {
            one_sentence_pitch: Some("A dashboard".to_string()),
            ..ProjectCore::default()
        });

        ProjectUpdate::position(Point::new(210.0, 30.0)).apply_to(&mut project);

        assert_eq!(project.position, Point::new(210.0, 30.0));
        assert_eq!(project.name, "Alpha");
        assert!(project.is_setup_complete);
        assert!(project.core.is_some());
    }

    #[test]
    fn test_name_update_preserves_position() {
        let mut project = Project::new("Alpha", Point::new(210.0, 390.0));

        ProjectUpdate::name("Beta").apply_to(&mut project);

        assert_eq!(project.name, "Beta");
        assert_eq!(project.position, Point::new(210.0, 390.0));
    }

    #[test]
    fn test_json_round_trip() {
        let mut project = Project::new("Alpha", Point::new(30.0, 210.0));
        project.core = Some(ProjectCore {
            problem_statement: Some("Tiles drift".to_string()),
            ..ProjectCore::default()
        });

        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }
}
