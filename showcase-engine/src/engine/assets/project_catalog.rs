use std::collections::HashSet;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the project catalog could not be turned into a scene.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to fetch project data: {0}")]
    Fetch(String),
    #[error("project data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to load project data asset: {0}")]
    AssetLoad(String),
    #[error("project data contains no projects")]
    Empty,
    #[error("project model '{0}' appears more than once")]
    DuplicateModel(String),
    #[error("project '{0}' has non-finite or non-positive geometry")]
    InvalidGeometry(String),
}

/// Grid placement and native pixel size of a preview photo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectGeometry {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl ProjectGeometry {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn grid_position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    fn is_valid(&self) -> bool {
        [self.width, self.height, self.x, self.y]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// One showcased product: its preview tile and the photos of its detail slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique key, also used by the page to address the project.
    pub model: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Preview image path, relative to the asset root.
    pub preview: String,
    pub geometry: ProjectGeometry,
    #[serde(default)]
    pub slider: Vec<String>,
}

impl Project {
    /// Slider photos, falling back to the preview when none are listed.
    pub fn slides(&self) -> Vec<&str> {
        if self.slider.is_empty() {
            vec![self.preview.as_str()]
        } else {
            self.slider.iter().map(String::as_str).collect()
        }
    }
}

/// Catalog document served at `/get_data`. Mirrors the JSON exactly.
#[derive(Asset, Debug, Clone, PartialEq, Serialize, Deserialize, TypePath, Resource)]
pub struct ProjectCatalog {
    pub projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Parse and validate a catalog document.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: ProjectCatalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.projects.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.model.as_str()) {
                return Err(CatalogError::DuplicateModel(project.model.clone()));
            }
            if !project.geometry.is_valid() {
                return Err(CatalogError::InvalidGeometry(project.model.clone()));
            }
        }

        Ok(())
    }

    pub fn find(&self, model: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.model == model)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "projects": [
            {
                "model": "harbour",
                "title": "Harbour Chair",
                "category": "Furniture",
                "description": "Oak and linen.",
                "preview": "previews/harbour.jpg",
                "geometry": { "width": 640, "height": 480, "x": -900, "y": 600 },
                "slider": ["previews/harbour-1.jpg", "previews/harbour-2.jpg"]
            },
            {
                "model": "lumen",
                "title": "Lumen Lamp",
                "preview": "previews/lumen.jpg",
                "geometry": { "width": 400, "height": 600, "x": 300, "y": -200 }
            }
        ]
    }"#;

    #[test]
    fn parses_catalog_with_optional_fields() {
        let catalog = ProjectCatalog::from_json(CATALOG).expect("valid catalog");
        assert_eq!(catalog.len(), 2);

        let lumen = catalog.find("lumen").expect("lumen is listed");
        assert_eq!(lumen.category, "");
        assert_eq!(lumen.slides(), vec!["previews/lumen.jpg"]);
        assert_eq!(lumen.geometry.size(), Vec2::new(400.0, 600.0));

        let harbour = catalog.find("harbour").expect("harbour is listed");
        assert_eq!(harbour.slides().len(), 2);
        assert_eq!(harbour.geometry.grid_position(), Vec2::new(-900.0, 600.0));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ProjectCatalog::from_json("{ \"projects\": [ }"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            ProjectCatalog::from_json(r#"{ "projects": [] }"#),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn duplicate_models_are_rejected() {
        let mut catalog = ProjectCatalog::from_json(CATALOG).expect("valid catalog");
        let copy = catalog.projects[0].clone();
        catalog.projects.push(copy);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateModel(model)) if model == "harbour"
        ));
    }

    #[test]
    fn zero_sized_geometry_is_rejected() {
        let mut catalog = ProjectCatalog::from_json(CATALOG).expect("valid catalog");
        catalog.projects[1].geometry.width = 0.0;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidGeometry(model)) if model == "lumen"
        ));
    }
}
