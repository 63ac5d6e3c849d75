use bevy::prelude::*;
use constants::layout::{OVERVIEW_GAP, TILE_TWEEN_SECS};

use super::overview::{compute_overview_layout, overview_columns};
use super::tiles::PreviewTile;
use crate::engine::animation::{Easing, Tween, TweenStep};
use crate::engine::camera::viewport_camera::{LAYOUT_ORIGIN, resting_zoom};
use crate::engine::events::{FrameUpdateEvent, LayoutModeChangedEvent, LayoutModeRequest};
use crate::engine::state::{LayoutMode, ShowcaseState};

/// World position of the overview's top edge once the camera has come to rest.
///
/// The first overview row starts one gap below the top of the screen.
pub fn overview_origin(viewport: Vec2, mobile: bool) -> Vec2 {
    let visible_half = viewport.y * 0.5 / resting_zoom(LayoutMode::Overview, mobile);
    LAYOUT_ORIGIN + Vec2::new(0.0, visible_half - OVERVIEW_GAP)
}

/// How far the camera must travel down for the last overview row to come into view.
pub fn overview_scroll_height(content_height: f32, viewport: Vec2, mobile: bool) -> f32 {
    let visible = viewport.y / resting_zoom(LayoutMode::Overview, mobile);
    (content_height - visible + 2.0 * OVERVIEW_GAP).max(0.0)
}

/// Validate layout requests against the state store and announce accepted changes.
///
/// At most one change is accepted per frame; the camera marks the transition
/// in progress when it handles the change.
pub fn handle_layout_requests(
    mut requests: EventReader<LayoutModeRequest>,
    mut state: ResMut<ShowcaseState>,
    mut changes: EventWriter<LayoutModeChangedEvent>,
) {
    for request in requests.read() {
        if request.mode == state.layout_mode() {
            continue;
        }
        if state.is_project_open() {
            debug!("Layout change to {} ignored while a project is open", request.mode.as_str());
            continue;
        }

        match state.set_layout_mode(request.mode) {
            Ok(()) => {
                info!("Layout mode changed to {}", request.mode.as_str());
                changes.write(LayoutModeChangedEvent { mode: request.mode });
                break;
            }
            Err(err) => warn!("Layout change rejected: {}", err),
        }
    }
}

/// Start every tile's tween toward its placement in the new layout.
pub fn start_layout_transition(
    mut changes: EventReader<LayoutModeChangedEvent>,
    state: Res<ShowcaseState>,
    mut tiles: Query<&mut PreviewTile>,
) {
    let Some(change) = changes.read().last() else {
        return;
    };

    let origin = overview_origin(state.viewport(), state.is_mobile());
    for mut tile in tiles.iter_mut() {
        let to = tile.placement_for(change.mode, origin);
        let from = tile.current;
        tile.motion
            .start(Tween::new(from, to, TILE_TWEEN_SECS, Easing::EaseInOutCubic));
    }
}

pub fn animate_tiles(
    mut frames: EventReader<FrameUpdateEvent>,
    mut tiles: Query<&mut PreviewTile>,
) {
    let delta: f32 = frames.read().map(|frame| frame.delta).sum();
    if delta <= 0.0 {
        return;
    }

    for mut tile in tiles.iter_mut() {
        if !tile.motion.is_animating() {
            continue;
        }
        match tile.motion.tick(delta) {
            TweenStep::Running(placement) | TweenStep::Completed(placement) => {
                tile.current = placement;
            }
            TweenStep::Idle | TweenStep::Cancelled => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewKey {
    columns: usize,
    viewport: Vec2,
    tiles: usize,
}

/// Recompute the overview when the viewport or the tile set changes.
///
/// Writes the scroll extent to the state store, and re-tweens the tiles when
/// the overview is showing and no transition is running.
pub fn refresh_overview_layout(
    mut state: ResMut<ShowcaseState>,
    mut tiles: Query<&mut PreviewTile>,
    mut last: Local<Option<OverviewKey>>,
) {
    let mobile = state.is_mobile();
    let key = OverviewKey {
        columns: overview_columns(mobile),
        viewport: state.viewport(),
        tiles: tiles.iter().count(),
    };
    if *last == Some(key) {
        return;
    }
    *last = Some(key);

    let mut ordered: Vec<Mut<PreviewTile>> = tiles.iter_mut().collect();
    ordered.sort_by_key(|tile| tile.order);

    let sizes: Vec<Vec2> = ordered.iter().map(|tile| tile.size).collect();
    let layout = compute_overview_layout(&sizes, key.columns, key.viewport.x);
    for (tile, placement) in ordered.iter_mut().zip(layout.placements) {
        tile.overview = placement;
    }

    let scroll = overview_scroll_height(layout.content_height, key.viewport, mobile);
    if let Err(err) = state.set_overview_height(scroll) {
        warn!("Overview height rejected: {}", err);
    }

    if state.layout_mode() == LayoutMode::Overview && !state.is_transitioning() {
        let origin = overview_origin(key.viewport, mobile);
        for tile in ordered.iter_mut() {
            let to = tile.placement_for(LayoutMode::Overview, origin);
            let from = tile.current;
            tile.motion
                .start(Tween::new(from, to, TILE_TWEEN_SECS, Easing::EaseInOutCubic));
        }
    }

    debug!(
        "Overview layout: {} columns, content height {:.0}",
        key.columns, layout.content_height
    );
}
