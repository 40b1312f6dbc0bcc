//! egui rendering of the LogoWall infinite-scrolling marquee.
//!
//! - **Wall**: the [`LogoWall`] widget, two counter-flowing tracks
//! - **Marquee**: one masked, clipped track and its duplication groups
//! - **Tile**: one logo fitted into a padded, rounded tile
//! - **Colors**: CSS color resolution into `Color32`
//! - **Panel**: dark panel frame, toggle chips and status rows for host controls

pub mod colors;
pub mod marquee;
pub mod mask;
pub mod panel;
pub mod resolve;
pub mod tile;
pub mod wall;

pub use colors::{css_color, to_color32};
pub use panel::{panel_frame, status_row, ToggleChip};
pub use resolve::ResolvedStyle;
pub use wall::{LogoWall, WallResponse};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Tile corner radius (`rounded-md`)
    pub const TILE_CORNER_RADIUS: u8 = logowall_core::layout::TILE_CORNER_RADIUS as u8;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
    /// Chip corner radius
    pub const CHIP_RADIUS: u8 = 4;
    /// Fraction of a track faded out at each end
    pub const MASK_FRACTION: f32 = 0.2;
    /// Longest frame step fed to the animation clock, in seconds
    pub const MAX_FRAME_DT: f64 = 0.1;
}

/// Default dark theme colors.
pub mod theme {
    use egui::Color32;

    /// Text color (`#ffffff`)
    pub const TEXT: Color32 = Color32::from_rgb(255, 255, 255);
    /// Wall background (`#060606`)
    pub const BG: Color32 = Color32::from_rgb(6, 6, 6);
    /// Tile background (`#111111`)
    pub const BG_ACCENT: Color32 = Color32::from_rgb(17, 17, 17);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(140, 140, 140);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(40, 40, 40);
    /// Active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(32, 32, 32);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(18, 18, 18, 240);
}
