//! Style variables resolved to concrete values for painting.
//!
//! Resolved once per change of the variables or the viewport, then passed
//! down to every track and tile.

use crate::colors::css_color;
use crate::theme;
use egui::Color32;
use logowall_core::config::{DEFAULT_DURATION, DEFAULT_SIZE};
use logowall_core::{CssLength, CssTime, StyleVars, Viewport};

/// Concrete style values.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    /// Tile size in points.
    pub size: f64,
    /// Scroll cycle length in seconds.
    pub duration: f64,
    pub text: Color32,
    pub bg: Color32,
    pub bg_accent: Color32,
}

impl ResolvedStyle {
    /// Resolve the variables against a viewport.
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn resolve(vars: &StyleVars, viewport: &Viewport) -> Self {
        Self {
            size: resolve_length(&vars.size, viewport),
            duration: resolve_time(&vars.duration),
            text: css_color(&vars.text_color, theme::TEXT),
            bg: css_color(&vars.bg_color, theme::BG),
            bg_accent: css_color(&vars.bg_accent_color, theme::BG_ACCENT),
        }
    }

    /// Gap between tiles, groups and tracks.
    pub fn gap(&self) -> f64 {
        self.size * logowall_core::layout::GAP_FACTOR
    }
}

fn resolve_length(value: &str, viewport: &Viewport) -> f64 {
    let length = CssLength::parse(value).or_else(|e| {
        log::warn!("Ignoring size '{}': {}", value, e);
        CssLength::parse(DEFAULT_SIZE)
    });
    length.map_or(0.0, |l| l.resolve(viewport).max(0.0))
}

fn resolve_time(value: &str) -> f64 {
    let time = CssTime::parse(value).or_else(|e| {
        log::warn!("Ignoring duration '{}': {}", value, e);
        CssTime::parse(DEFAULT_DURATION)
    });
    time.map_or(0.0, |t| t.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logowall_core::LayoutConfig;

    #[test]
    fn test_resolve_defaults() {
        let vars = LayoutConfig::default().style_vars();
        let style = ResolvedStyle::resolve(&vars, &Viewport::new(1000.0, 800.0));
        assert!((style.size - 256.0).abs() < 1e-9);
        assert!((style.duration - 60.0).abs() < 1e-9);
        assert_eq!(style.bg, theme::BG);
        assert_eq!(style.bg_accent, theme::BG_ACCENT);
        assert_eq!(style.text, theme::TEXT);
        assert!((style.gap() - 256.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = LayoutConfig {
            size: "huge".to_string(),
            duration: "-3s".to_string(),
            bg_color: "nope".to_string(),
            ..Default::default()
        };
        let style = ResolvedStyle::resolve(&config.style_vars(), &Viewport::new(200.0, 200.0));
        assert!((style.size - 128.0).abs() < 1e-9);
        assert!((style.duration - 60.0).abs() < 1e-9);
        assert_eq!(style.bg, theme::BG);
    }

    #[test]
    fn test_explicit_values() {
        let config = LayoutConfig {
            size: "200px".to_string(),
            duration: "500ms".to_string(),
            bg_accent_color: "#ff0000".to_string(),
            ..Default::default()
        };
        let style = ResolvedStyle::resolve(&config.style_vars(), &Viewport::default());
        assert!((style.size - 200.0).abs() < 1e-9);
        assert!((style.duration - 0.5).abs() < 1e-9);
        assert_eq!(style.bg_accent, Color32::from_rgb(255, 0, 0));
    }
}
