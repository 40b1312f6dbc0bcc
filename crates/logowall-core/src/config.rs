//! Wall configuration and the style variables derived from it.

use serde::{Deserialize, Serialize};

/// Default tile size: responsive between 8rem and 25rem.
pub const DEFAULT_SIZE: &str = "clamp(8rem, 1rem + 30vmin, 25rem)";
/// Default duration of one full scroll cycle.
pub const DEFAULT_DURATION: &str = "60s";
/// Default text color.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";
/// Default wall background.
pub const DEFAULT_BG_COLOR: &str = "#060606";
/// Default tile background.
pub const DEFAULT_BG_ACCENT_COLOR: &str = "#111111";

/// Scroll axis of the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Tracks scroll left-right and are stacked top to bottom.
    #[default]
    Horizontal,
    /// Tracks scroll up-down and sit side by side.
    Vertical,
}

impl Direction {
    /// The other direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Whether this is the vertical layout.
    pub fn is_vertical(self) -> bool {
        self == Direction::Vertical
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

/// Layout settings supplied by the caller.
///
/// Lengths, times and colors are CSS expressions, applied as given. They are
/// re-read on every render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub direction: Direction,
    pub pause_on_hover: bool,
    /// Tile size, a CSS length expression.
    pub size: String,
    /// Duration of one scroll cycle, a CSS time.
    pub duration: String,
    pub text_color: String,
    pub bg_color: String,
    pub bg_accent_color: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            pause_on_hover: false,
            size: DEFAULT_SIZE.to_string(),
            duration: DEFAULT_DURATION.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            bg_color: DEFAULT_BG_COLOR.to_string(),
            bg_accent_color: DEFAULT_BG_ACCENT_COLOR.to_string(),
        }
    }
}

impl LayoutConfig {
    /// The named style variables scoped to the wall root.
    pub fn style_vars(&self) -> StyleVars {
        StyleVars {
            size: self.size.clone(),
            duration: self.duration.clone(),
            text_color: self.text_color.clone(),
            bg_color: self.bg_color.clone(),
            bg_accent_color: self.bg_accent_color.clone(),
        }
    }
}

/// Style variables every descendant rule derives from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleVars {
    pub size: String,
    pub duration: String,
    pub text_color: String,
    pub bg_color: String,
    pub bg_accent_color: String,
}

impl StyleVars {
    /// Variable name / value pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("--size", &self.size),
            ("--duration", &self.duration),
            ("--color-text", &self.text_color),
            ("--color-bg", &self.bg_color),
            ("--color-bg-accent", &self.bg_accent_color),
        ]
    }

    /// Inline style declaration for the wall root.
    pub fn to_inline_style(&self) -> String {
        let mut style = String::new();
        for (name, value) in self.entries() {
            style.push_str(name);
            style.push_str(": ");
            style.push_str(value);
            style.push_str("; ");
        }
        style.push_str("color: var(--color-text); background-color: var(--color-bg);");
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.direction, Direction::Horizontal);
        assert!(!config.pause_on_hover);
        assert_eq!(config.size, "clamp(8rem, 1rem + 30vmin, 25rem)");
        assert_eq!(config.duration, "60s");
        assert_eq!(config.text_color, "#ffffff");
        assert_eq!(config.bg_color, "#060606");
        assert_eq!(config.bg_accent_color, "#111111");
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(Direction::Horizontal.toggled(), Direction::Vertical);
        assert_eq!(Direction::Vertical.toggled(), Direction::Horizontal);
    }

    #[test]
    fn test_style_vars_order_and_names() {
        let vars = LayoutConfig::default().style_vars();
        let names: Vec<_> = vars.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["--size", "--duration", "--color-text", "--color-bg", "--color-bg-accent"]
        );
    }

    #[test]
    fn test_inline_style() {
        let config = LayoutConfig {
            size: "200px".to_string(),
            ..Default::default()
        };
        let style = config.style_vars().to_inline_style();
        assert!(style.starts_with("--size: 200px; --duration: 60s;"));
        assert!(style.ends_with("background-color: var(--color-bg);"));
    }

    #[test]
    fn test_direction_serde_names() {
        let json = serde_json::to_string(&Direction::Vertical).unwrap();
        assert_eq!(json, "\"vertical\"");
    }
}
