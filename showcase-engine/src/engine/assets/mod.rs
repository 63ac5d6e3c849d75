//! Project catalog data loaded from `/get_data` or the bundled JSON asset.

/// Catalog document, per-project geometry and validation.
pub mod project_catalog;
