//! Host controls: a dark panel frame, toggle chips and status rows.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Frame, Margin, Pos2, Sense, Stroke,
    Ui,
};

use crate::{sizing, theme};

/// Floating panel frame with a soft shadow.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 12,
            offset: [0, 4],
            color: Color32::from_black_alpha(80),
        })
        .inner_margin(Margin::same(8))
}

/// A text chip that is filled with the accent color while selected.
pub struct ToggleChip<'a> {
    label: &'a str,
    selected: bool,
    shortcut: Option<&'a str>,
    min_width: Option<f32>,
    height: f32,
    font_size: f32,
}

impl<'a> ToggleChip<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            selected,
            shortcut: None,
            min_width: None,
            height: 24.0,
            font_size: 12.0,
        }
    }

    /// Keyboard shortcut shown in the hover tooltip.
    pub fn shortcut(mut self, shortcut: &'a str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Show the chip and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = FontId::proportional(self.font_size);
        let galley =
            ui.painter()
                .layout_no_wrap(self.label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
        let text_width = galley.size().x + 16.0;
        let width = self.min_width.map_or(text_width, |w| w.max(text_width));
        let (rect, response) = ui.allocate_exact_size(vec2(width, self.height), Sense::click());

        if ui.is_rect_visible(rect) {
            let (bg, fg) = if self.selected {
                (theme::ACCENT, Color32::WHITE)
            } else if response.hovered() {
                (theme::HOVER_BG, theme::TEXT)
            } else {
                (Color32::TRANSPARENT, theme::TEXT_MUTED)
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CHIP_RADIUS), bg);
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, self.label, font_id, fg);
        }

        let clicked = response.clicked();
        let response = match self.shortcut {
            Some(shortcut) => response.on_hover_text(format!("Toggle ({shortcut})")),
            None => response,
        };
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A `label: value` row with a status dot that lights up while `active`.
pub fn status_row(ui: &mut Ui, label: &str, value: &str, active: bool) {
    let size = vec2(ui.available_width().max(120.0), 22.0);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    let dot = if active { theme::ACCENT } else { theme::BORDER };
    painter.circle_filled(Pos2::new(rect.left() + 6.0, rect.center().y), 3.5, dot);
    painter.text(
        Pos2::new(rect.left() + 16.0, rect.center().y),
        Align2::LEFT_CENTER,
        label,
        FontId::proportional(12.0),
        theme::TEXT_MUTED,
    );
    painter.text(
        Pos2::new(rect.right() - 4.0, rect.center().y),
        Align2::RIGHT_CENTER,
        value,
        FontId::proportional(12.0),
        theme::TEXT,
    );
}
