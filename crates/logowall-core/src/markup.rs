//! Static HTML serialization of a wall layout.
//!
//! Web hosts let the browser animate the wall: the markup carries the
//! style tags and variables, and [`STYLESHEET`] holds a rule for every tag
//! the markup uses, so the output lays out and scrolls without a utility
//! CSS framework on the page.

use crate::layout::{DuplicationGroup, Tile, Track, WallLayout};
use crate::style::class_list;

/// Rules for every style tag. Later rules override earlier ones, so the
/// vertical variants follow their horizontal defaults.
pub const STYLESHEET: &str = r#"@keyframes scrollX {
  from { transform: translateX(0); }
  to { transform: translateX(calc(-100% - var(--size) / 14)); }
}
@keyframes scrollY {
  from { transform: translateY(0); }
  to { transform: translateY(calc(-100% - var(--size) / 14)); }
}
.relative { position: relative; }
.flex { display: flex; }
.flex-col { flex-direction: column; }
.flex-row { flex-direction: row; }
.flex-shrink-0 { flex-shrink: 0; }
.items-center { align-items: center; }
.justify-start { justify-content: flex-start; }
.justify-around { justify-content: space-around; }
.justify-center { justify-content: center; }
.gap-\[calc\(var\(--size\)\/14\)\] { gap: calc(var(--size) / 14); }
.overflow-hidden { overflow: hidden; }
.select-none { user-select: none; }
.mx-auto { margin-left: auto; margin-right: auto; }
.max-w-full { max-width: 100%; }
.w-full { width: 100%; }
.h-full { height: 100%; }
.min-w-full { min-width: 100%; }
.min-h-full { min-height: 100%; }
.p-\[20px_10px\] { padding: 20px 10px; }
.bg-\[var\(--color-bg-accent\)\] { background-color: var(--color-bg-accent); }
.rounded-md { border-radius: 6px; }
.object-contain { object-fit: contain; }
.aspect-video { aspect-ratio: 16 / 9; }
.aspect-square { aspect-ratio: 1 / 1; }
.w-\[var\(--size\)\] { width: var(--size); }
.w-\[calc\(var\(--size\)\/1\.5\)\] { width: calc(var(--size) / 1.5); }
.p-\[calc\(var\(--size\)\/10\)\] { padding: calc(var(--size) / 10); }
.p-\[calc\(var\(--size\)\/6\)\] { padding: calc(var(--size) / 6); }
.animate-scrollX { animation: scrollX var(--duration) linear infinite; }
.animate-scrollY { animation: scrollY var(--duration) linear infinite; }
.reverse-x { animation-direction: reverse; }
.paused > * { animation-play-state: paused; }
.mask-horizontal {
  mask-image: linear-gradient(to right, transparent, #000 20%, #000 80%, transparent);
}
.mask-vertical {
  mask-image: linear-gradient(to bottom, transparent, #000 20%, #000 80%, transparent);
}
.marquee--reverse { }
"#;

/// Render the wall as HTML.
pub fn render_html(wall: &WallLayout<'_>) -> String {
    let mut out = format!(
        "<article class=\"{}\" style=\"{}\">\n",
        escape(&class_list(&wall.tags)),
        escape(&wall.style_vars.to_inline_style())
    );
    for track in &wall.tracks {
        push_track(&mut out, track);
    }
    out.push_str("</article>\n");
    out
}

fn push_track(out: &mut String, track: &Track<'_>) {
    out.push_str(&format!("  <div class=\"{}\">\n", escape(&class_list(&track.tags))));
    for group in &track.groups {
        push_group(out, group);
    }
    out.push_str("  </div>\n");
}

fn push_group(out: &mut String, group: &DuplicationGroup<'_>) {
    let hidden = if group.aria_hidden { " aria-hidden=\"true\"" } else { "" };
    out.push_str(&format!(
        "    <div{} class=\"{}\">\n",
        hidden,
        escape(&class_list(&group.tags))
    ));
    for tile in &group.tiles {
        push_tile(out, tile);
    }
    out.push_str("    </div>\n");
}

fn push_tile(out: &mut String, tile: &Tile<'_>) {
    out.push_str(&format!(
        "      <img src=\"{}\" alt=\"{}\" class=\"{}\" style=\"width: {}; padding: {}; aspect-ratio: {};\">\n",
        escape(tile.src()),
        escape(tile.alt()),
        escape(&class_list(&tile.tags)),
        tile.shape.width_expr(),
        tile.shape.padding_expr(),
        tile.shape.aspect_expr()
    ));
}

/// Escape text for use inside a double-quoted attribute.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Direction, LayoutConfig};
    use crate::item::LogoItem;
    use crate::layout::compose_wall;
    use crate::style;

    #[test]
    fn test_single_item_markup() {
        let items = vec![LogoItem::new("A", "a.png", "Alt A")];
        let html = render_html(&compose_wall(&items, &LayoutConfig::default(), false));

        assert_eq!(html.matches(r#"alt="Alt A""#).count(), 4);
        assert_eq!(html.matches(r#"aria-hidden="true""#).count(), 2);
        assert_eq!(html.matches("width: var(--size);").count(), 4);
        assert!(html.contains("aspect-video"));
        assert!(html.contains("--size: clamp(8rem, 1rem + 30vmin, 25rem);"));
        assert!(html.starts_with("<article"));
    }

    #[test]
    fn test_empty_markup_has_no_images() {
        let html = render_html(&compose_wall(&[], &LayoutConfig::default(), false));
        assert!(!html.contains("<img"));
        assert_eq!(html.matches("animate-scrollX").count(), 4);
    }

    #[test]
    fn test_vertical_and_paused_markup() {
        let items = vec![LogoItem::new("A", "a.png", "Alt A")];
        let config = LayoutConfig {
            direction: Direction::Vertical,
            ..Default::default()
        };
        let html = render_html(&compose_wall(&items, &config, true));
        assert!(html.contains("width: calc(var(--size)/1.5);"));
        assert!(html.contains("aspect-ratio: 1 / 1;"));
        assert_eq!(html.matches(" paused").count(), 2);
        assert_eq!(html.matches("marquee--reverse").count(), 1);
    }

    #[test]
    fn test_attributes_are_escaped() {
        let items = vec![LogoItem::new("Q", "q.png?a=1&b=2", "\"Quote\" <co>")];
        let html = render_html(&compose_wall(&items, &LayoutConfig::default(), false));
        assert!(html.contains(r#"src="q.png?a=1&amp;b=2""#));
        assert!(html.contains(r#"alt="&quot;Quote&quot; &lt;co&gt;""#));
    }

    /// Class selector for a tag, escaped the way utility frameworks emit them.
    fn selector(tag: &str) -> String {
        let mut out = String::from(".");
        for c in tag.chars() {
            if matches!(c, '[' | ']' | '(' | ')' | '/' | '.') {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(' ');
        out
    }

    #[test]
    fn test_stylesheet_covers_every_tag() {
        for direction in [Direction::Horizontal, Direction::Vertical] {
            let mut tags = style::wrapper_tags(direction);
            for flag in [false, true] {
                tags.extend(style::marquee_tags(direction, flag, flag));
                tags.extend(style::group_tags(direction, flag));
            }
            tags.extend(style::tile_tags(direction));
            for tag in tags {
                assert!(STYLESHEET.contains(&selector(tag)), "missing rule for {tag}");
            }
        }
        assert!(STYLESHEET.contains(".paused > * "));
    }

    #[test]
    fn test_vertical_rules_follow_horizontal_defaults() {
        let position = |tag: &str| STYLESHEET.find(&selector(tag)).unwrap();
        assert!(position("flex-row") > position("flex-col"));
        assert!(position("animate-scrollY") > position("animate-scrollX"));
        assert!(position("aspect-square") > position("aspect-video"));
        assert!(position("mask-vertical") > position("mask-horizontal"));
        assert!(position("reverse-x") > position("animate-scrollY"));
    }
}
