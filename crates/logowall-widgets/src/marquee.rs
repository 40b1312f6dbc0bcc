//! One marquee track: a clipped, edge-masked viewport scrolling two copies
//! of the tile sequence.

use crate::mask::paint_edge_mask;
use crate::tile::{paint_tile, TilePaint};
use egui::{pos2, vec2, Color32, Rect, Ui};
use logowall_core::{distribute_around, Direction, MarqueeClock, Track};

/// Everything needed to paint one track.
pub struct TrackView<'t, 'a> {
    pub track: &'t Track<'a>,
    pub direction: Direction,
    /// Viewport of the track.
    pub rect: Rect,
    pub gap: f64,
    pub clock: MarqueeClock,
    pub tile: TilePaint,
    /// Wall background, used by the edge mask.
    pub bg: Color32,
}

/// Paint the track. Returns the number of tiles that intersected the viewport.
pub fn paint_track(ui: &Ui, view: &TrackView<'_, '_>) -> usize {
    let painter = ui.painter_at(view.rect);
    let direction = view.direction;
    let geometry = view.tile.geometry;

    let tile_main = geometry.main_extent(direction);
    let tile_cross = geometry.cross_extent(direction) as f32;
    let (track_main, track_cross) = match direction {
        Direction::Horizontal => (view.rect.width(), view.rect.height()),
        Direction::Vertical => (view.rect.height(), view.rect.width()),
    };

    let count = view.track.groups[0].tiles.len();
    let layout = distribute_around(count, tile_main, view.gap, track_main as f64);
    let period = layout.period(view.gap);
    let offset = view.clock.offset(period, view.track.reverse);
    // items-center
    let cross_start = (track_cross - tile_cross) / 2.0;

    let mut visible = 0;
    for (index, group) in view.track.groups.iter().enumerate() {
        let group_start = offset + index as f64 * period;
        for (tile, tile_offset) in group.tiles.iter().zip(&layout.offsets) {
            let main = (group_start + tile_offset) as f32;
            let rect = match direction {
                Direction::Horizontal => Rect::from_min_size(
                    view.rect.min + vec2(main, cross_start),
                    vec2(geometry.outer.width as f32, geometry.outer.height as f32),
                ),
                Direction::Vertical => Rect::from_min_size(
                    pos2(view.rect.left() + cross_start, view.rect.top() + main),
                    vec2(geometry.outer.width as f32, geometry.outer.height as f32),
                ),
            };
            if !rect.intersects(view.rect) {
                continue;
            }
            paint_tile(ui, &painter, rect, tile, &view.tile);
            visible += 1;
        }
    }

    paint_edge_mask(&painter, view.rect, direction, view.bg);
    visible
}
