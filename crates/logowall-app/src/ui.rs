//! UI components using egui.

use std::path::Path;

use egui::{Align, Align2, Color32, Context, Frame, Layout, Pos2, RichText, Vec2};
use logowall_core::{Direction, LayoutConfig, LogoItem, WallManifest};
use logowall_widgets::{css_color, panel_frame, status_row, theme, LogoWall, ToggleChip};

use crate::demo;
use crate::shortcuts::ShortcutRegistry;

/// Actions triggered from the control panel or keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Show the wall in the given direction.
    SetDirection(Direction),
    /// Swap between horizontal and vertical.
    ToggleDirection,
    /// Enable or disable pause-on-hover.
    TogglePauseOnHover,
    /// Open or close the shortcut list.
    ToggleShortcuts,
    /// Close the shortcut list.
    CloseShortcuts,
    /// Close the window.
    Quit,
}

/// UI state and actions.
pub struct UiState {
    /// Logos on the wall.
    pub items: Vec<LogoItem>,
    /// Wall settings, edited by the control panel.
    pub config: LayoutConfig,
    /// Pause flag reported by the wall last frame.
    pub paused: bool,
    /// Whether the shortcut list is showing.
    pub shortcuts_open: bool,
    /// Whether the items are the built-in demo logos.
    pub uses_demo: bool,
    /// Window background, resolved once from `config.bg_color`.
    pub bg: Color32,
}

impl Default for UiState {
    fn default() -> Self {
        Self::from_manifest(None)
    }
}

impl UiState {
    /// State for a loaded manifest, or the demo wall when there is none.
    pub fn from_manifest(manifest: Option<WallManifest>) -> Self {
        let uses_demo = manifest.is_none();
        let manifest = manifest.unwrap_or_else(|| WallManifest {
            items: demo::items(),
            config: LayoutConfig {
                pause_on_hover: true,
                ..Default::default()
            },
        });
        let bg = css_color(&manifest.config.bg_color, theme::BG);
        Self {
            items: manifest.items,
            config: manifest.config,
            paused: false,
            shortcuts_open: false,
            uses_demo,
            bg,
        }
    }

    /// Apply an action. Returns true when the app should quit.
    pub fn apply(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::SetDirection(direction) => self.config.direction = direction,
            UiAction::ToggleDirection => self.config.direction = self.config.direction.toggled(),
            UiAction::TogglePauseOnHover => {
                self.config.pause_on_hover = !self.config.pause_on_hover;
            }
            UiAction::ToggleShortcuts => self.shortcuts_open = !self.shortcuts_open,
            UiAction::CloseShortcuts => self.shortcuts_open = false,
            UiAction::Quit => return true,
        }
        log::debug!(
            "{:?}: direction={} pause_on_hover={}",
            action,
            self.config.direction.label(),
            self.config.pause_on_hover
        );
        false
    }
}

/// Load the manifest at `path`. Failures are logged and yield `None`.
pub fn load_wall(path: Option<&Path>) -> Option<WallManifest> {
    let path = path?;
    match WallManifest::load(path) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            log::error!("Failed to load manifest, showing demo logos: {}", e);
            None
        }
    }
}

/// Render all UI and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    egui_extras::install_image_loaders(ctx);

    render_wall(ctx, ui_state);
    let panel_action = render_control_panel(ctx, ui_state);
    let modal_action = if ui_state.shortcuts_open {
        render_shortcuts_modal(ctx)
    } else {
        None
    };

    panel_action.or(modal_action)
}

/// The wall itself, centered in the window on its background color.
fn render_wall(ctx: &Context, ui_state: &mut UiState) {
    egui::CentralPanel::default()
        .frame(Frame::new().fill(ui_state.bg))
        .show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Center).with_main_align(Align::Center), |ui| {
                let response = LogoWall::new(&ui_state.items)
                    .config(ui_state.config.clone())
                    .show(ui);
                ui_state.paused = response.paused;
            });
        });
}

fn render_control_panel(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;
    let config = &ui_state.config;

    egui::Area::new(egui::Id::new("control_panel"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-12.0, 12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(180.0);
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(4.0, 4.0);
                    ui.label(RichText::new("LogoWall").size(13.0).strong().color(theme::TEXT));

                    ui.horizontal(|ui| {
                        for direction in [Direction::Horizontal, Direction::Vertical] {
                            let selected = config.direction == direction;
                            if ToggleChip::new(direction.label(), selected)
                                .shortcut("D")
                                .min_width(84.0)
                                .show(ui)
                                && !selected
                            {
                                action = Some(UiAction::SetDirection(direction));
                            }
                        }
                    });

                    if ToggleChip::new("pause on hover", config.pause_on_hover)
                        .shortcut("P")
                        .min_width(172.0)
                        .show(ui)
                    {
                        action = Some(UiAction::TogglePauseOnHover);
                    }

                    ui.add_space(2.0);
                    let paused = if ui_state.paused { "yes" } else { "no" };
                    status_row(ui, "paused", paused, ui_state.paused);
                    let source = if ui_state.uses_demo { "demo" } else { "manifest" };
                    status_row(ui, "logos", &format!("{} ({source})", ui_state.items.len()), false);

                    if ToggleChip::new("shortcuts", false).shortcut("?").show(ui) {
                        action = Some(UiAction::ToggleShortcuts);
                    }
                });
            });
        });

    action
}

fn render_shortcuts_modal(ctx: &Context) -> Option<UiAction> {
    let mut action = None;

    // Backdrop
    egui::Area::new(egui::Id::new("shortcuts_backdrop"))
        .fixed_pos(Pos2::ZERO)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            let screen_rect = ctx.input(|i| i.content_rect());
            let response = ui.allocate_rect(screen_rect, egui::Sense::click());
            ui.painter().rect_filled(screen_rect, 0.0, Color32::from_black_alpha(120));
            if response.clicked() {
                action = Some(UiAction::CloseShortcuts);
            }
        });

    egui::Area::new(egui::Id::new("shortcuts_modal"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(300.0);
                ui.label(RichText::new("Keyboard Shortcuts").size(15.0).strong().color(theme::TEXT));
                ui.add_space(8.0);
                for shortcut in ShortcutRegistry::all() {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(shortcut.format())
                                .size(12.0)
                                .family(egui::FontFamily::Monospace)
                                .color(theme::ACCENT),
                        );
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(
                                RichText::new(shortcut.description)
                                    .size(12.0)
                                    .color(theme::TEXT_MUTED),
                            );
                        });
                    });
                }
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_state_is_demo() {
        let state = UiState::default();
        assert!(state.uses_demo);
        assert!(!state.items.is_empty());
        assert!(state.config.pause_on_hover);
        assert!(!state.paused);
        assert_eq!(state.bg, theme::BG);
    }

    #[test]
    fn test_apply_actions() {
        let mut state = UiState::default();
        assert!(!state.apply(UiAction::ToggleDirection));
        assert_eq!(state.config.direction, Direction::Vertical);
        state.apply(UiAction::SetDirection(Direction::Horizontal));
        assert_eq!(state.config.direction, Direction::Horizontal);

        state.apply(UiAction::TogglePauseOnHover);
        assert!(!state.config.pause_on_hover);

        state.apply(UiAction::ToggleShortcuts);
        assert!(state.shortcuts_open);
        state.apply(UiAction::CloseShortcuts);
        assert!(!state.shortcuts_open);

        assert!(state.apply(UiAction::Quit));
    }

    #[test]
    fn test_load_wall_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wall.json");
        fs::write(
            &path,
            r#"{"items":[{"name":"A","imgUrl":"file://a.png","altText":"Alt A"}],"direction":"vertical"}"#,
        )
        .unwrap();

        let manifest = load_wall(Some(&path)).unwrap();
        let state = UiState::from_manifest(Some(manifest));
        assert!(!state.uses_demo);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.config.direction, Direction::Vertical);
        assert!(!state.config.pause_on_hover);
    }

    #[test]
    fn test_load_wall_failure_falls_back() {
        let dir = tempdir().unwrap();
        assert!(load_wall(Some(&dir.path().join("missing.json"))).is_none());

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_wall(Some(&path)).is_none());

        assert!(load_wall(None).is_none());
    }

    #[test]
    fn test_render_ui_headless() {
        let ctx = Context::default();
        let mut state = UiState::default();
        demo::register(&ctx);
        let mut action = Some(UiAction::Quit);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = render_ui(ctx, &mut state);
        });
        assert_eq!(action, None);
        assert!(!state.paused);
    }
}
