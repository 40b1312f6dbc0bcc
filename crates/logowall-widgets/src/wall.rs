//! The LogoWall widget.

use std::hash::Hash;

use crate::marquee::{paint_track, TrackView};
use crate::resolve::ResolvedStyle;
use crate::sizing;
use crate::tile::TilePaint;
use egui::{pos2, vec2, CornerRadius, Id, Rect, Response, Sense, Ui, Vec2};
use logowall_core::layout::WRAPPER_PADDING;
use logowall_core::{
    compose_wall, Direction, HoverEdge, HoverTracker, LayoutConfig, LogoItem, MarqueeClock,
    PauseState, StyleVars, TileShape, Viewport,
};

/// Per-instance state kept in egui memory between frames.
#[derive(Debug, Clone, Default)]
struct WallMemory {
    pause: PauseState,
    clock: MarqueeClock,
    hover: [HoverTracker; 2],
    direction: Option<Direction>,
    resolved: Option<ResolvedEntry>,
}

/// Resolved style together with the inputs it was resolved from.
#[derive(Debug, Clone)]
struct ResolvedEntry {
    vars: StyleVars,
    viewport: [u32; 2],
    style: ResolvedStyle,
}

impl WallMemory {
    fn style(&mut self, vars: StyleVars, viewport: Vec2) -> ResolvedStyle {
        let key = [viewport.x.round() as u32, viewport.y.round() as u32];
        match &self.resolved {
            Some(entry) if entry.vars == vars && entry.viewport == key => entry.style.clone(),
            _ => {
                let style = ResolvedStyle::resolve(
                    &vars,
                    &Viewport::new(viewport.x as f64, viewport.y as f64),
                );
                self.resolved = Some(ResolvedEntry {
                    vars,
                    viewport: key,
                    style: style.clone(),
                });
                style
            }
        }
    }
}

/// What the wall reports after being shown.
pub struct WallResponse {
    /// Response covering the whole wall.
    pub response: Response,
    /// Pause flag after this frame's hover handling.
    pub paused: bool,
    /// Tiles composed across all four duplication groups.
    pub tiles: usize,
    /// Tiles that were inside a track viewport and painted.
    pub visible_tiles: usize,
}

/// An infinite-scrolling logo wall.
///
/// ```ignore
/// LogoWall::new(&items)
///     .direction(Direction::Vertical)
///     .pause_on_hover(true)
///     .duration("30s")
///     .show(ui);
/// ```
pub struct LogoWall<'a> {
    items: &'a [LogoItem],
    config: LayoutConfig,
    id_salt: Option<Id>,
}

impl<'a> LogoWall<'a> {
    /// Create a wall with default settings.
    pub fn new(items: &'a [LogoItem]) -> Self {
        Self {
            items,
            config: LayoutConfig::default(),
            id_salt: None,
        }
    }

    /// Use a complete configuration.
    pub fn config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Key the wall's state by `salt` instead of its position in the `Ui`.
    ///
    /// Walls are keyed by position by default, so several can share a `Ui`.
    /// A salt keeps the state when the layout around the wall changes, and
    /// lets [`LogoWall::is_paused`] find it.
    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    pub fn pause_on_hover(mut self, pause: bool) -> Self {
        self.config.pause_on_hover = pause;
        self
    }

    /// Tile size, a CSS length such as `200px` or `clamp(8rem, 30vmin, 25rem)`.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.config.size = size.into();
        self
    }

    /// Scroll cycle length, a CSS time such as `60s`.
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.config.duration = duration.into();
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.config.text_color = color.into();
        self
    }

    pub fn bg_color(mut self, color: impl Into<String>) -> Self {
        self.config.bg_color = color.into();
        self
    }

    pub fn bg_accent_color(mut self, color: impl Into<String>) -> Self {
        self.config.bg_accent_color = color.into();
        self
    }

    /// Read the pause flag of a wall shown earlier in `ui` with the same salt.
    pub fn is_paused(ui: &Ui, salt: impl Hash) -> bool {
        let id = ui.make_persistent_id(Id::new(salt));
        ui.data_mut(|d| d.get_temp::<WallMemory>(id))
            .is_some_and(|memory| memory.pause.is_paused())
    }

    /// Show the wall.
    pub fn show(self, ui: &mut Ui) -> WallResponse {
        let id = match self.id_salt {
            Some(salt) => ui.make_persistent_id(salt),
            None => ui.auto_id_with("logo_wall"),
        };
        let mut memory: WallMemory = ui.data_mut(|d| d.get_temp(id)).unwrap_or_default();
        let config = &self.config;
        let direction = config.direction;

        if memory.direction.is_some_and(|d| d != direction) {
            memory.clock.reset();
        }
        memory.direction = Some(direction);

        let screen = ui.input(|i| i.content_rect()).size();
        let style = memory.style(config.style_vars(), screen);
        let geometry = TileShape::for_direction(direction).resolve(style.size);
        let gap = style.gap() as f32;
        let padding = vec2(WRAPPER_PADDING.1 as f32, WRAPPER_PADDING.0 as f32);
        let cross = geometry.cross_extent(direction) as f32;

        let available = ui.available_size();
        let wall_size = match direction {
            Direction::Horizontal => vec2(available.x, 2.0 * cross + gap + 2.0 * padding.y),
            Direction::Vertical => {
                let height = if available.y.is_finite() { available.y } else { screen.y };
                vec2(available.x, height)
            }
        };
        let (wall_rect, response) = ui.allocate_exact_size(wall_size, Sense::hover());
        let content = wall_rect.shrink2(padding);
        let track_rects = track_rects(content, direction, cross, gap);

        // Leaves first, so moving straight between tracks ends paused.
        let hovered = track_rects.map(|rect| ui.rect_contains_pointer(rect));
        let mut edges: Vec<HoverEdge> = memory
            .hover
            .iter_mut()
            .zip(hovered)
            .filter_map(|(tracker, now)| tracker.update(now))
            .collect();
        edges.sort_by_key(|edge| *edge == HoverEdge::Enter);
        for edge in edges {
            memory.pause.apply(edge, config.pause_on_hover);
        }
        memory.pause.sync(config.pause_on_hover);
        let paused = memory.pause.is_paused();

        let dt = (ui.input(|i| i.stable_dt) as f64).min(sizing::MAX_FRAME_DT);
        memory.clock.advance(dt, style.duration, paused);

        let layout = compose_wall(self.items, config, paused);
        let tile = TilePaint {
            geometry,
            accent: style.bg_accent,
            text: style.text,
        };

        let mut visible_tiles = 0;
        if ui.is_rect_visible(wall_rect) {
            ui.painter()
                .rect_filled(wall_rect, CornerRadius::ZERO, style.bg);
            for (track, rect) in layout.tracks.iter().zip(track_rects) {
                visible_tiles += paint_track(
                    ui,
                    &TrackView {
                        track,
                        direction,
                        rect,
                        gap: style.gap(),
                        clock: memory.clock,
                        tile,
                        bg: style.bg,
                    },
                );
            }
        }

        if !paused && !self.items.is_empty() && style.duration > 0.0 {
            ui.ctx().request_repaint();
        }

        let tiles = layout.tile_count();
        ui.data_mut(|d| d.insert_temp(id, memory));

        WallResponse {
            response,
            paused,
            tiles,
            visible_tiles,
        }
    }
}

/// Viewports of the forward and reverse tracks inside the padded content.
fn track_rects(content: Rect, direction: Direction, cross: f32, gap: f32) -> [Rect; 2] {
    match direction {
        Direction::Horizontal => {
            let first = Rect::from_min_size(content.min, vec2(content.width(), cross));
            let second = first.translate(vec2(0.0, cross + gap));
            [first, second]
        }
        Direction::Vertical => {
            // justify-center
            let total = 2.0 * cross + gap;
            let left = content.center().x - total / 2.0;
            let first = Rect::from_min_size(pos2(left, content.top()), vec2(cross, content.height()));
            let second = first.translate(vec2(cross + gap, 0.0));
            [first, second]
        }
    }
}
