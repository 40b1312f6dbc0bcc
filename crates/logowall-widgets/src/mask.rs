//! Edge mask: fades a track's ends into the wall background.

use crate::colors::transparent;
use crate::sizing;
use egui::epaint::Mesh;
use egui::{Color32, Painter, Pos2, Rect, Shape};
use logowall_core::Direction;

/// Paint the fade at both ends of `rect` along the scroll axis.
///
/// Opaque background at the edge, fully transparent at
/// [`sizing::MASK_FRACTION`] of the track length.
pub fn paint_edge_mask(painter: &Painter, rect: Rect, direction: Direction, bg: Color32) {
    let clear = transparent(bg);
    match direction {
        Direction::Horizontal => {
            let fade = rect.width() * sizing::MASK_FRACTION;
            let start = Rect::from_min_max(rect.min, Pos2::new(rect.left() + fade, rect.bottom()));
            let end = Rect::from_min_max(Pos2::new(rect.right() - fade, rect.top()), rect.max);
            painter.add(gradient(start, [bg, clear, clear, bg]));
            painter.add(gradient(end, [clear, bg, bg, clear]));
        }
        Direction::Vertical => {
            let fade = rect.height() * sizing::MASK_FRACTION;
            let start = Rect::from_min_max(rect.min, Pos2::new(rect.right(), rect.top() + fade));
            let end = Rect::from_min_max(Pos2::new(rect.left(), rect.bottom() - fade), rect.max);
            painter.add(gradient(start, [bg, bg, clear, clear]));
            painter.add(gradient(end, [clear, clear, bg, bg]));
        }
    }
}

/// A quad with per-corner colors: top-left, top-right, bottom-right, bottom-left.
fn gradient(rect: Rect, colors: [Color32; 4]) -> Shape {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), colors[0]);
    mesh.colored_vertex(rect.right_top(), colors[1]);
    mesh.colored_vertex(rect.right_bottom(), colors[2]);
    mesh.colored_vertex(rect.left_bottom(), colors[3]);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    Shape::mesh(mesh)
}
