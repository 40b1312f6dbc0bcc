//! Built-in demo logos, shown when no manifest is given.
//!
//! Each logo is a small geometric SVG registered with egui under a
//! `bytes://` URI, so the wall exercises the same loader path as real
//! manifests.

use logowall_core::LogoItem;

const URI_PREFIX: &str = "bytes://logowall/demo/";

/// Name and SVG source of each demo logo.
const LOGOS: &[(&str, &str)] = &[
    (
        "Orbit",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 90"><circle cx="80" cy="45" r="14" fill="#f59e0b"/><ellipse cx="80" cy="45" rx="52" ry="20" fill="none" stroke="#fbbf24" stroke-width="5"/></svg>"##,
    ),
    (
        "Prism",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 90"><polygon points="80,8 128,82 32,82" fill="#6366f1"/><polygon points="80,8 104,82 80,82" fill="#a5b4fc"/></svg>"##,
    ),
    (
        "Grid",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 90"><rect x="44" y="9" width="32" height="32" rx="4" fill="#10b981"/><rect x="84" y="9" width="32" height="32" rx="4" fill="#34d399"/><rect x="44" y="49" width="32" height="32" rx="4" fill="#34d399"/><rect x="84" y="49" width="32" height="32" rx="4" fill="#10b981"/></svg>"##,
    ),
    (
        "Wave",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 90"><path d="M16 60 Q48 10 80 45 T144 30" fill="none" stroke="#38bdf8" stroke-width="10" stroke-linecap="round"/></svg>"##,
    ),
    (
        "Stack",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 90"><rect x="36" y="14" width="88" height="14" rx="7" fill="#f43f5e"/><rect x="46" y="38" width="68" height="14" rx="7" fill="#fb7185"/><rect x="56" y="62" width="48" height="14" rx="7" fill="#fda4af"/></svg>"##,
    ),
    (
        "Hex",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 90"><polygon points="80,6 114,25 114,65 80,84 46,65 46,25" fill="#a855f7"/><circle cx="80" cy="45" r="14" fill="#111111"/></svg>"##,
    ),
    (
        "Bolt",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 90"><polygon points="90,4 52,50 76,50 68,86 108,36 84,36" fill="#facc15"/></svg>"##,
    ),
    (
        "Ring",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 90"><circle cx="66" cy="45" r="28" fill="none" stroke="#e5e7eb" stroke-width="8"/><circle cx="94" cy="45" r="28" fill="none" stroke="#9ca3af" stroke-width="8"/></svg>"##,
    ),
];

fn uri(name: &str) -> String {
    format!("{}{}.svg", URI_PREFIX, name.to_lowercase())
}

/// Demo items in display order.
pub fn items() -> Vec<LogoItem> {
    LOGOS
        .iter()
        .map(|(name, _)| LogoItem::new(*name, uri(name), format!("{name} logo")))
        .collect()
}

/// Make the demo SVGs available to egui's image loaders.
pub fn register(ctx: &egui::Context) {
    for (name, svg) in LOGOS {
        ctx.include_bytes(uri(name), svg.as_bytes());
    }
    log::debug!("Registered {} demo logos", LOGOS.len());
}
