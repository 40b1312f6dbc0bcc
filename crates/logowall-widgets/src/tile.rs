//! Tile painting.

use crate::sizing;
use egui::load::TexturePoll;
use egui::{pos2, vec2, Align2, Color32, CornerRadius, FontId, Image, Painter, Rect, Ui};
use kurbo::Size;
use logowall_core::{fit_contain, Tile, TileGeometry};

/// Values shared by every tile of a wall.
#[derive(Debug, Clone, Copy)]
pub struct TilePaint {
    pub geometry: TileGeometry,
    /// Tile fill.
    pub accent: Color32,
    /// Alt text color, shown when an image cannot be loaded.
    pub text: Color32,
}

/// Paint one tile into `rect` with `painter` (already clipped to the track).
pub fn paint_tile(ui: &Ui, painter: &Painter, rect: Rect, tile: &Tile<'_>, paint: &TilePaint) {
    painter.rect_filled(rect, CornerRadius::same(sizing::TILE_CORNER_RADIUS), paint.accent);

    let inner = rect.shrink(paint.geometry.padding as f32);
    if inner.width() <= 0.0 || inner.height() <= 0.0 {
        return;
    }

    match Image::from_uri(tile.src()).load_for_size(ui.ctx(), inner.size()) {
        Ok(TexturePoll::Ready { texture }) => {
            let fitted = fit_contain(
                Size::new(texture.size.x as f64, texture.size.y as f64),
                Size::new(inner.width() as f64, inner.height() as f64),
            );
            let image_rect =
                Rect::from_center_size(inner.center(), vec2(fitted.width as f32, fitted.height as f32));
            painter.image(
                texture.id,
                image_rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        Ok(TexturePoll::Pending { .. }) => {}
        Err(e) => {
            log::trace!("Image '{}' unavailable: {}", tile.src(), e);
            let font_size = (inner.height() * 0.25).clamp(10.0, 18.0);
            painter.text(
                inner.center(),
                Align2::CENTER_CENTER,
                tile.alt(),
                FontId::proportional(font_size),
                paint.text,
            );
        }
    }
}
