//! The wall's layout tree: tiles, duplication groups, tracks and the wall.
//!
//! A track renders the full item sequence twice, back to back. Scrolling
//! the pair by exactly one group length (plus the gap) and looping brings
//! the second copy to where the first started, so the loop has no visible
//! seam. The second copy is decorative and hidden from assistive tech.

use crate::config::{Direction, LayoutConfig, StyleVars};
use crate::item::LogoItem;
use crate::style;
use kurbo::Size;

/// Gap between tiles, groups and tracks, as a fraction of the tile size.
pub const GAP_FACTOR: f64 = 1.0 / 14.0;

/// Corner radius of a tile in pixels (`rounded-md`).
pub const TILE_CORNER_RADIUS: f64 = 6.0;

/// Wrapper padding in pixels: (vertical, horizontal).
pub const WRAPPER_PADDING: (f64, f64) = (20.0, 10.0);

/// Tile sizing rules for one direction, relative to the configured size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileShape {
    /// Tile width as a fraction of the size.
    pub width_factor: f64,
    /// Inner padding as a fraction of the size.
    pub padding_factor: f64,
    /// Width divided by height.
    pub aspect_ratio: f64,
}

impl TileShape {
    /// 16:9 tile, full size wide.
    pub const HORIZONTAL: Self = Self {
        width_factor: 1.0,
        padding_factor: 1.0 / 10.0,
        aspect_ratio: 16.0 / 9.0,
    };

    /// Square tile, two thirds of the size wide.
    pub const VERTICAL: Self = Self {
        width_factor: 1.0 / 1.5,
        padding_factor: 1.0 / 6.0,
        aspect_ratio: 1.0,
    };

    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Horizontal => Self::HORIZONTAL,
            Direction::Vertical => Self::VERTICAL,
        }
    }

    /// Whether this is the square (vertical) shape.
    pub fn is_square(&self) -> bool {
        self.aspect_ratio == 1.0
    }

    /// Width as a CSS expression over the size variable.
    pub fn width_expr(&self) -> &'static str {
        if self.is_square() {
            "calc(var(--size)/1.5)"
        } else {
            "var(--size)"
        }
    }

    /// Padding as a CSS expression over the size variable.
    pub fn padding_expr(&self) -> &'static str {
        if self.is_square() {
            "calc(var(--size)/6)"
        } else {
            "calc(var(--size)/10)"
        }
    }

    /// CSS `aspect-ratio` value.
    pub fn aspect_expr(&self) -> &'static str {
        if self.is_square() { "1 / 1" } else { "16 / 9" }
    }

    /// Concrete geometry for a resolved size in pixels.
    pub fn resolve(&self, size_px: f64) -> TileGeometry {
        let width = size_px * self.width_factor;
        let height = width / self.aspect_ratio;
        let padding = size_px * self.padding_factor;
        TileGeometry {
            outer: Size::new(width, height),
            padding,
            inner: Size::new(
                (width - 2.0 * padding).max(0.0),
                (height - 2.0 * padding).max(0.0),
            ),
        }
    }
}

/// Resolved tile geometry in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    /// Tile box including padding.
    pub outer: Size,
    /// Padding on every side.
    pub padding: f64,
    /// Box the image is fitted into.
    pub inner: Size,
}

impl TileGeometry {
    /// Tile extent along the scroll axis.
    pub fn main_extent(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.outer.width,
            Direction::Vertical => self.outer.height,
        }
    }

    /// Tile extent across the scroll axis.
    pub fn cross_extent(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.outer.height,
            Direction::Vertical => self.outer.width,
        }
    }
}

/// Largest size with the source's aspect ratio that fits in `bounds`
/// (`object-fit: contain`).
pub fn fit_contain(source: Size, bounds: Size) -> Size {
    if source.width <= 0.0 || source.height <= 0.0 {
        return Size::ZERO;
    }
    let scale = (bounds.width / source.width).min(bounds.height / source.height);
    Size::new(source.width * scale, source.height * scale)
}

/// One rendered logo.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<'a> {
    pub item: &'a LogoItem,
    pub shape: TileShape,
    pub tags: Vec<&'static str>,
}

impl Tile<'_> {
    pub fn src(&self) -> &str {
        &self.item.img_url
    }

    pub fn alt(&self) -> &str {
        &self.item.alt_text
    }
}

/// One full copy of the item sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicationGroup<'a> {
    /// Decorative copy, hidden from assistive technology.
    pub aria_hidden: bool,
    /// Whether the group scrolls in the mirrored direction.
    pub reverse: bool,
    pub tags: Vec<&'static str>,
    pub tiles: Vec<Tile<'a>>,
}

/// A scrolling strip: a masked viewport around two duplication groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Track<'a> {
    pub reverse: bool,
    pub paused: bool,
    pub tags: Vec<&'static str>,
    pub groups: [DuplicationGroup<'a>; 2],
}

/// The whole widget: two counter-flowing tracks under one styled root.
#[derive(Debug, Clone, PartialEq)]
pub struct WallLayout<'a> {
    pub direction: Direction,
    pub style_vars: StyleVars,
    pub tags: Vec<&'static str>,
    /// Forward track first, reverse track second.
    pub tracks: [Track<'a>; 2],
}

impl<'a> WallLayout<'a> {
    /// All four duplication groups, track by track.
    pub fn groups(&self) -> impl Iterator<Item = &DuplicationGroup<'a>> {
        self.tracks.iter().flat_map(|t| t.groups.iter())
    }

    /// Number of tiles across every group.
    pub fn tile_count(&self) -> usize {
        self.groups().map(|g| g.tiles.len()).sum()
    }

    pub fn is_paused(&self) -> bool {
        self.tracks.iter().any(|t| t.paused)
    }
}

/// Build the two duplication groups of one track.
pub fn build_track<'a>(
    items: &'a [LogoItem],
    direction: Direction,
    reverse: bool,
) -> [DuplicationGroup<'a>; 2] {
    let shape = TileShape::for_direction(direction);
    let group = |aria_hidden: bool| DuplicationGroup {
        aria_hidden,
        reverse,
        tags: style::group_tags(direction, reverse),
        tiles: items
            .iter()
            .map(|item| Tile {
                item,
                shape,
                tags: style::tile_tags(direction),
            })
            .collect(),
    };
    [group(false), group(true)]
}

/// Wrap a track's groups in its viewport.
pub fn compose_track<'a>(
    items: &'a [LogoItem],
    config: &LayoutConfig,
    paused: bool,
    reverse: bool,
) -> Track<'a> {
    Track {
        reverse,
        paused,
        tags: style::marquee_tags(config.direction, paused, reverse),
        groups: build_track(items, config.direction, reverse),
    }
}

/// Compose the full wall.
pub fn compose_wall<'a>(items: &'a [LogoItem], config: &LayoutConfig, paused: bool) -> WallLayout<'a> {
    WallLayout {
        direction: config.direction,
        style_vars: config.style_vars(),
        tags: style::wrapper_tags(config.direction),
        tracks: [
            compose_track(items, config, paused, false),
            compose_track(items, config, paused, true),
        ],
    }
}

/// Main-axis placement of one group's tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    /// Start of each tile along the main axis, relative to the group.
    pub offsets: Vec<f64>,
    /// Length of the group along the main axis.
    pub extent: f64,
}

impl GroupLayout {
    /// Distance one loop scrolls: the group plus the gap to its copy.
    pub fn period(&self, gap: f64) -> f64 {
        self.extent + gap
    }
}

/// Place `count` tiles with `justify-content: space-around` in a group that
/// is at least `min_extent` long.
pub fn distribute_around(count: usize, tile_extent: f64, gap: f64, min_extent: f64) -> GroupLayout {
    if count == 0 {
        return GroupLayout {
            offsets: Vec::new(),
            extent: min_extent.max(0.0),
        };
    }
    let n = count as f64;
    let content = n * tile_extent + (n - 1.0) * gap;
    let extent = content.max(min_extent);
    let around = (extent - content) / n;
    let offsets = (0..count)
        .map(|i| around / 2.0 + i as f64 * (tile_extent + gap + around))
        .collect();
    GroupLayout { offsets, extent }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{REVERSE_GROUP_TAG, REVERSE_TRACK_TAG};

    fn items(n: usize) -> Vec<LogoItem> {
        (0..n)
            .map(|i| LogoItem::new(format!("L{i}"), format!("l{i}.png"), format!("Alt {i}")))
            .collect()
    }

    #[test]
    fn test_groups_preserve_count_and_order() {
        for n in [0, 1, 3, 7] {
            let list = items(n);
            for group in build_track(&list, Direction::Horizontal, false) {
                assert_eq!(group.tiles.len(), n);
                let names: Vec<_> = group.tiles.iter().map(|t| t.item.name.as_str()).collect();
                let expected: Vec<_> = list.iter().map(|i| i.name.as_str()).collect();
                assert_eq!(names, expected);
            }
        }
    }

    #[test]
    fn test_second_group_is_hidden() {
        let list = items(2);
        let [first, second] = build_track(&list, Direction::Vertical, false);
        assert!(!first.aria_hidden);
        assert!(second.aria_hidden);
        assert_eq!(first.tags, second.tags);
    }

    #[test]
    fn test_tile_shape_horizontal() {
        let shape = TileShape::for_direction(Direction::Horizontal);
        assert_eq!(shape.width_expr(), "var(--size)");
        let geo = shape.resolve(320.0);
        assert!((geo.outer.width - 320.0).abs() < 1e-9);
        assert!((geo.outer.width / geo.outer.height - 16.0 / 9.0).abs() < 1e-9);
        assert!((geo.padding - 32.0).abs() < 1e-9);
        assert!((geo.inner.width - 256.0).abs() < 1e-9);
    }

    #[test]
    fn test_tile_shape_vertical() {
        let shape = TileShape::for_direction(Direction::Vertical);
        assert_eq!(shape.width_expr(), "calc(var(--size)/1.5)");
        let geo = shape.resolve(300.0);
        assert!((geo.outer.width - 200.0).abs() < 1e-9);
        assert!((geo.outer.height - 200.0).abs() < 1e-9);
        assert!((geo.padding - 50.0).abs() < 1e-9);
        assert!((geo.main_extent(Direction::Vertical) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_contain() {
        let fitted = fit_contain(Size::new(200.0, 100.0), Size::new(100.0, 100.0));
        assert!((fitted.width - 100.0).abs() < 1e-9);
        assert!((fitted.height - 50.0).abs() < 1e-9);
        assert_eq!(fit_contain(Size::ZERO, Size::new(10.0, 10.0)), Size::ZERO);
    }

    #[test]
    fn test_empty_wall() {
        let wall = compose_wall(&[], &LayoutConfig::default(), false);
        assert_eq!(wall.groups().count(), 4);
        assert_eq!(wall.tile_count(), 0);
    }

    #[test]
    fn test_single_item_horizontal() {
        let list = vec![LogoItem::new("A", "a.png", "Alt A")];
        let wall = compose_wall(&list, &LayoutConfig::default(), false);
        for group in wall.groups() {
            assert_eq!(group.tiles.len(), 1);
            let tile = &group.tiles[0];
            assert_eq!(tile.alt(), "Alt A");
            assert!(tile.shape.width_expr().contains("var(--size)"));
            assert!(tile.tags.contains(&"aspect-video"));
        }
    }

    #[test]
    fn test_default_wall_with_five_items() {
        let list = items(5);
        let wall = compose_wall(&list, &LayoutConfig::default(), false);
        assert_eq!(wall.tracks.len(), 2);
        assert_eq!(wall.tile_count(), 20);
        for track in &wall.tracks {
            assert_eq!(track.groups.len(), 2);
            assert!(track.groups.iter().all(|g| g.tiles.len() == 5));
        }

        let [forward, reverse] = &wall.tracks;
        assert!(!forward.reverse);
        assert!(forward.groups.iter().all(|g| !g.tags.contains(&REVERSE_GROUP_TAG)));
        assert!(reverse.reverse);
        assert!(reverse.tags.contains(&REVERSE_TRACK_TAG));
        assert!(reverse.groups.iter().all(|g| g.tags.contains(&REVERSE_GROUP_TAG)));
    }

    #[test]
    fn test_paused_propagates_to_both_tracks() {
        let list = items(1);
        let wall = compose_wall(&list, &LayoutConfig::default(), true);
        assert!(wall.is_paused());
        assert!(wall.tracks.iter().all(|t| t.paused && t.tags.contains(&"paused")));
    }

    #[test]
    fn test_distribute_around_fills_min_extent() {
        let layout = distribute_around(2, 100.0, 10.0, 410.0);
        // content 210, free 200, 100 per item, 50 each side
        assert!((layout.extent - 410.0).abs() < 1e-9);
        assert!((layout.offsets[0] - 50.0).abs() < 1e-9);
        assert!((layout.offsets[1] - 260.0).abs() < 1e-9);
        assert!((layout.period(10.0) - 420.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribute_around_overflowing_content() {
        let layout = distribute_around(3, 100.0, 10.0, 50.0);
        assert!((layout.extent - 320.0).abs() < 1e-9);
        assert_eq!(layout.offsets, vec![0.0, 110.0, 220.0]);
    }

    #[test]
    fn test_distribute_around_empty() {
        let layout = distribute_around(0, 100.0, 10.0, 300.0);
        assert!(layout.offsets.is_empty());
        assert!((layout.extent - 300.0).abs() < 1e-9);
    }
}
