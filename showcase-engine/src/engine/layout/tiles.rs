use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use constants::render_settings::PHOTO_LAYER;

use crate::engine::animation::{Lerp, TweenSlot};
use crate::engine::assets::project_catalog::ProjectCatalog;
use crate::engine::camera::projection::screen_to_world;
use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::events::TileHoverEvent;
use crate::engine::input::pointer::PointerState;
use crate::engine::state::{LayoutMode, ShowcaseState};

/// Where a tile sits and how large it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub position: Vec2,
    pub scale: f32,
}

impl Default for TilePlacement {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Lerp for TilePlacement {
    fn lerp_to(self, other: Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            scale: self.scale.lerp_to(other.scale, t),
        }
    }
}

/// A project's preview photo in the scene.
#[derive(Component, Debug, Clone)]
pub struct PreviewTile {
    pub model: String,
    /// Catalog order; the overview layout is filled in this order.
    pub order: usize,
    /// Native photo size at scale 1.
    pub size: Vec2,
    pub grid: TilePlacement,
    /// Overview placement relative to the overview origin.
    pub overview: TilePlacement,
    pub current: TilePlacement,
    pub motion: TweenSlot<TilePlacement>,
}

impl PreviewTile {
    pub fn new(model: impl Into<String>, order: usize, size: Vec2, grid_position: Vec2) -> Self {
        let grid = TilePlacement {
            position: grid_position,
            scale: 1.0,
        };
        Self {
            model: model.into(),
            order,
            size,
            grid,
            overview: TilePlacement::default(),
            current: grid,
            motion: TweenSlot::default(),
        }
    }

    /// Resting placement for `mode`; overview placements are shifted by `overview_origin`.
    pub fn placement_for(&self, mode: LayoutMode, overview_origin: Vec2) -> TilePlacement {
        match mode {
            LayoutMode::Grid => self.grid,
            LayoutMode::Overview => TilePlacement {
                position: self.overview.position + overview_origin,
                scale: self.overview.scale,
            },
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size * self.current.scale * 0.5
    }

    /// True when the world-space `point` falls on the tile as currently drawn.
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.current.position)
            .abs()
            .cmple(self.half_extents())
            .all()
    }
}

pub fn tile_at<'a>(
    tiles: impl IntoIterator<Item = &'a PreviewTile>,
    point: Vec2,
) -> Option<&'a PreviewTile> {
    tiles.into_iter().find(|tile| tile.contains(point))
}

/// Spawn one textured quad per catalog project at its grid placement.
pub fn spawn_preview_tiles(
    mut commands: Commands,
    catalog: Res<ProjectCatalog>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (order, project) in catalog.projects.iter().enumerate() {
        let size = project.geometry.size();
        let tile = PreviewTile::new(
            project.model.clone(),
            order,
            size,
            project.geometry.grid_position(),
        );

        commands.spawn((
            Mesh3d(meshes.add(Rectangle::new(size.x, size.y))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(project.preview.clone())),
                unlit: true,
                ..default()
            })),
            Transform::from_translation(tile.current.position.extend(0.0)),
            RenderLayers::layer(PHOTO_LAYER),
            Name::new(format!("tile:{}", project.model)),
            tile,
        ));
    }

    info!("Spawned {} preview tiles", catalog.len());
}

pub fn apply_tile_transforms(
    mut tiles: Query<(&PreviewTile, &mut Transform), Changed<PreviewTile>>,
) {
    for (tile, mut transform) in tiles.iter_mut() {
        transform.translation = tile.current.position.extend(0.0);
        transform.scale = Vec3::splat(tile.current.scale);
    }
}

/// Hit-test the pointer against the tiles and report hover changes.
pub fn detect_tile_hover(
    state: Res<ShowcaseState>,
    camera: Res<ViewportCamera>,
    tiles: Query<&PreviewTile>,
    mut pointer: ResMut<PointerState>,
    mut hovers: EventWriter<TileHoverEvent>,
) {
    let hovered = if state.is_project_open() || pointer.gesture.is_dragging() {
        None
    } else {
        let world = screen_to_world(state.mouse(), state.viewport(), camera.position, camera.zoom);
        tile_at(tiles.iter(), world).map(|tile| tile.model.clone())
    };

    if hovered != pointer.hovered {
        pointer.hovered = hovered.clone();
        hovers.write(TileHoverEvent { model: hovered });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> PreviewTile {
        PreviewTile::new("harbour", 0, Vec2::new(200.0, 100.0), Vec2::new(500.0, -300.0))
    }

    #[test]
    fn hit_test_respects_scale() {
        let mut tile = tile();
        assert!(tile.contains(Vec2::new(590.0, -260.0)));
        assert!(!tile.contains(Vec2::new(610.0, -300.0)));

        tile.current.scale = 0.5;
        assert!(!tile.contains(Vec2::new(560.0, -300.0)));
        assert!(tile.contains(Vec2::new(545.0, -280.0)));
    }

    #[test]
    fn overview_placement_is_offset_but_grid_is_not() {
        let mut tile = tile();
        tile.overview = TilePlacement {
            position: Vec2::new(-400.0, -180.0),
            scale: 1.8,
        };
        let origin = Vec2::new(0.0, 320.0);

        assert_eq!(tile.placement_for(LayoutMode::Grid, origin), tile.grid);
        let overview = tile.placement_for(LayoutMode::Overview, origin);
        assert_eq!(overview.position, Vec2::new(-400.0, 140.0));
        assert_eq!(overview.scale, 1.8);
    }

    #[test]
    fn placement_lerp_blends_position_and_scale() {
        let from = TilePlacement {
            position: Vec2::ZERO,
            scale: 1.0,
        };
        let to = TilePlacement {
            position: Vec2::new(100.0, -50.0),
            scale: 2.0,
        };
        let mid = from.lerp_to(to, 0.5);
        assert_eq!(mid.position, Vec2::new(50.0, -25.0));
        assert_eq!(mid.scale, 1.5);
    }

    #[test]
    fn tile_at_finds_the_tile_under_the_point() {
        let tiles = vec![
            tile(),
            PreviewTile::new("lumen", 1, Vec2::splat(100.0), Vec2::ZERO),
        ];
        assert_eq!(tile_at(&tiles, Vec2::new(10.0, 10.0)).map(|t| t.model.as_str()), Some("lumen"));
        assert!(tile_at(&tiles, Vec2::new(-900.0, 0.0)).is_none());
    }
}
