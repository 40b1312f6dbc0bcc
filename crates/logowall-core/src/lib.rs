//! LogoWall Core Library
//!
//! Platform-agnostic data structures and layout logic for the LogoWall
//! infinite-scrolling marquee: items, configuration, CSS value evaluation,
//! style tags, the track/wall layout tree, pause state and the marquee clock.

pub mod clock;
pub mod config;
pub mod item;
pub mod layout;
pub mod markup;
pub mod pause;
pub mod style;
pub mod value;

pub use clock::MarqueeClock;
pub use config::{Direction, LayoutConfig, StyleVars};
pub use item::{LogoItem, ManifestError, ManifestResult, WallManifest};
pub use layout::{
    build_track, compose_track, compose_wall, distribute_around, fit_contain, DuplicationGroup,
    GroupLayout, Tile, TileGeometry, TileShape, Track, WallLayout,
};
pub use markup::{render_html, STYLESHEET};
pub use pause::{HoverEdge, HoverTracker, PauseState};
pub use value::{parse_color, CssLength, CssTime, LengthUnit, ValueError, ValueResult, Viewport};
