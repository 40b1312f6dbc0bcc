//! Style tags (utility class lists) for each element of the wall.
//!
//! Each function maps the layout configuration to the ordered list of tags
//! an element carries. Direction- and state-dependent tags are appended
//! after the base list.

use crate::config::Direction;

/// Tag marking the second, mirrored track.
pub const REVERSE_TRACK_TAG: &str = "marquee--reverse";
/// Tag reversing the scroll animation of a duplication group.
pub const REVERSE_GROUP_TAG: &str = "reverse-x";
/// Tag halting the scroll animation in place.
pub const PAUSED_TAG: &str = "paused";

/// Tags for the wall root.
pub fn wrapper_tags(direction: Direction) -> Vec<&'static str> {
    let mut tags = vec![
        "flex",
        "flex-col",
        "gap-[calc(var(--size)/14)]",
        "mx-auto",
        "max-w-full",
        "p-[20px_10px]",
    ];
    if direction.is_vertical() {
        tags.extend(["flex-row", "justify-center", "h-full"]);
    }
    tags
}

/// Tags for a track viewport.
pub fn marquee_tags(direction: Direction, paused: bool, reverse: bool) -> Vec<&'static str> {
    let mut tags = vec![
        "relative",
        "flex",
        "overflow-hidden",
        "select-none",
        "gap-[calc(var(--size)/14)]",
        "justify-start",
        "w-full",
        "mask-horizontal",
    ];
    if direction.is_vertical() {
        tags.extend(["flex-col", "h-full", "mask-vertical"]);
    }
    if paused {
        tags.push(PAUSED_TAG);
    }
    if reverse {
        tags.push(REVERSE_TRACK_TAG);
    }
    tags
}

/// Tags for one duplication group.
///
/// The reverse modifier lives on the groups, not the track, so the track's
/// mask and viewport keep their orientation.
pub fn group_tags(direction: Direction, reverse: bool) -> Vec<&'static str> {
    let mut tags = vec![
        "flex-shrink-0",
        "flex",
        "items-center",
        "justify-around",
        "gap-[calc(var(--size)/14)]",
        "min-w-full",
        "animate-scrollX",
    ];
    if reverse {
        tags.push(REVERSE_GROUP_TAG);
    }
    if direction.is_vertical() {
        tags.extend(["flex-col", "min-h-full", "animate-scrollY"]);
    }
    tags
}

/// Tags for one tile.
pub fn tile_tags(direction: Direction) -> Vec<&'static str> {
    let mut tags = vec![
        "bg-[var(--color-bg-accent)]",
        "rounded-md",
        "object-contain",
        "aspect-video",
        "w-[var(--size)]",
        "p-[calc(var(--size)/10)]",
    ];
    if direction.is_vertical() {
        tags.extend([
            "aspect-square",
            "w-[calc(var(--size)/1.5)]",
            "p-[calc(var(--size)/6)]",
        ]);
    }
    tags
}

/// Join tags into a class attribute value.
pub fn class_list(tags: &[&str]) -> String {
    tags.join(" ")
}
