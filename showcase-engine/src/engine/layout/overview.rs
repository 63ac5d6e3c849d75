use bevy::prelude::*;
use constants::layout::{
    OVERVIEW_COLUMNS_DESKTOP, OVERVIEW_COLUMNS_MOBILE, OVERVIEW_GAP, OVERVIEW_TILE_WIDTH,
};

use super::tiles::TilePlacement;

/// Overview placements, in input order, plus the total content height.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewLayout {
    pub placements: Vec<TilePlacement>,
    pub content_height: f32,
}

pub fn overview_columns(mobile: bool) -> usize {
    if mobile {
        OVERVIEW_COLUMNS_MOBILE
    } else {
        OVERVIEW_COLUMNS_DESKTOP
    }
}

/// Tile width for `columns` columns, shrunk below the nominal width when the
/// viewport is too narrow.
pub fn overview_tile_width(columns: usize, viewport_width: f32) -> f32 {
    let columns = columns.max(1) as f32;
    let fitting = (viewport_width - OVERVIEW_GAP * (columns + 1.0)) / columns;
    OVERVIEW_TILE_WIDTH.min(fitting).max(1.0)
}

/// Masonry layout: each tile goes into the currently shortest column.
///
/// Columns are centred on x = 0 and grow downward from y = 0; every tile is
/// scaled uniformly to the column width. Ties go to the leftmost column.
pub fn compute_overview_layout(
    sizes: &[Vec2],
    columns: usize,
    viewport_width: f32,
) -> OverviewLayout {
    let columns = columns.max(1);
    let tile_width = overview_tile_width(columns, viewport_width);
    let total_width = columns as f32 * tile_width + (columns as f32 - 1.0) * OVERVIEW_GAP;
    let left = -total_width * 0.5;

    let mut heights = vec![0.0_f32; columns];
    let mut placements = Vec::with_capacity(sizes.len());

    for size in sizes {
        let scale = if size.x > 0.0 { tile_width / size.x } else { 1.0 };
        let height = size.y.max(0.0) * scale;

        let mut column = 0;
        for (index, filled) in heights.iter().enumerate() {
            if *filled < heights[column] {
                column = index;
            }
        }

        let x = left + column as f32 * (tile_width + OVERVIEW_GAP) + tile_width * 0.5;
        let y = -(heights[column] + height * 0.5);
        heights[column] += height + OVERVIEW_GAP;

        placements.push(TilePlacement {
            position: Vec2::new(x, y),
            scale,
        });
    }

    let content_height = if placements.is_empty() {
        0.0
    } else {
        heights.iter().copied().fold(0.0, f32::max) - OVERVIEW_GAP
    };

    OverviewLayout {
        placements,
        content_height: content_height.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f32 = 1600.0;

    #[test]
    fn tiles_fill_the_shortest_column() {
        let sizes = [
            Vec2::new(360.0, 720.0),
            Vec2::new(360.0, 360.0),
            Vec2::new(360.0, 360.0),
            Vec2::new(360.0, 360.0),
        ];
        let layout = compute_overview_layout(&sizes, 3, WIDE);

        let columns: Vec<f32> = layout.placements.iter().map(|p| p.position.x).collect();
        // Fourth tile lands under the second, the first column is still taller.
        assert_eq!(columns[3], columns[1]);
        assert!(columns[0] < columns[1] && columns[1] < columns[2]);

        let fourth = layout.placements[3];
        assert_eq!(fourth.position.y, -(360.0 + OVERVIEW_GAP + 180.0));
        assert_eq!(layout.content_height, 360.0 + OVERVIEW_GAP + 360.0);
    }

    #[test]
    fn tiles_are_scaled_to_the_column_width() {
        let layout = compute_overview_layout(&[Vec2::new(720.0, 540.0)], 3, WIDE);
        let placement = layout.placements[0];
        assert_eq!(placement.scale, 0.5);
        assert_eq!(layout.content_height, 270.0);
    }

    #[test]
    fn columns_are_centred() {
        let sizes = [Vec2::splat(360.0); 3];
        let layout = compute_overview_layout(&sizes, 3, WIDE);
        let xs: Vec<f32> = layout.placements.iter().map(|p| p.position.x).collect();
        assert_eq!(xs[1], 0.0);
        assert_eq!(xs[0], -xs[2]);
    }

    #[test]
    fn narrow_viewports_shrink_the_tiles() {
        let width = overview_tile_width(2, 390.0);
        assert!(width < OVERVIEW_TILE_WIDTH);
        assert!(2.0 * width + 3.0 * OVERVIEW_GAP <= 390.0 + 1e-3);
        assert_eq!(overview_tile_width(3, WIDE), OVERVIEW_TILE_WIDTH);
    }

    #[test]
    fn empty_layout_has_no_height() {
        let layout = compute_overview_layout(&[], overview_columns(false), WIDE);
        assert!(layout.placements.is_empty());
        assert_eq!(layout.content_height, 0.0);
    }
}
