//! CSS color resolution for egui.

use egui::Color32;
use logowall_core::parse_color;
use peniko::Color;

/// Convert a peniko color to egui's premultiplied `Color32`.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Parse a CSS color string, falling back when it is not a valid color.
///
/// An invalid color is ignored the way a browser ignores an invalid
/// declaration; the fallback applies instead.
pub fn css_color(value: &str, fallback: Color32) -> Color32 {
    match parse_color(value) {
        Ok(color) => to_color32(color),
        Err(e) => {
            log::warn!("Ignoring color '{}': {}", value, e);
            fallback
        }
    }
}

/// Same color with zero alpha (fade target for edge masks).
pub fn transparent(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(css_color("#060606", Color32::RED), Color32::from_rgb(6, 6, 6));
    }

    #[test]
    fn test_functional_color() {
        assert_eq!(
            css_color("rgb(59, 130, 246)", Color32::RED),
            Color32::from_rgb(59, 130, 246)
        );
    }

    #[test]
    fn test_invalid_color_falls_back() {
        assert_eq!(css_color("bogus", Color32::RED), Color32::RED);
    }

    #[test]
    fn test_transparent() {
        assert_eq!(transparent(Color32::from_rgb(10, 20, 30)).a(), 0);
    }
}
