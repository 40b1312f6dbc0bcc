//! Hover-driven pause state.

/// The wall's single pause flag.
///
/// Pointer enter/leave set and clear it, and only act when pause-on-hover
/// is enabled. Writes are idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseState {
    is_paused: bool,
}

impl PauseState {
    /// New, unpaused state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Pointer entered a track.
    pub fn pointer_enter(&mut self, pause_on_hover: bool) {
        if pause_on_hover {
            self.is_paused = true;
        }
    }

    /// Pointer left a track.
    pub fn pointer_leave(&mut self, pause_on_hover: bool) {
        if pause_on_hover {
            self.is_paused = false;
        }
    }

    /// Apply a hover edge.
    pub fn apply(&mut self, edge: HoverEdge, pause_on_hover: bool) {
        match edge {
            HoverEdge::Enter => self.pointer_enter(pause_on_hover),
            HoverEdge::Leave => self.pointer_leave(pause_on_hover),
        }
    }

    /// Clear the flag once pause-on-hover is switched off at runtime.
    pub fn sync(&mut self, pause_on_hover: bool) {
        if !pause_on_hover {
            self.is_paused = false;
        }
    }
}

/// A pointer crossing a track boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEdge {
    Enter,
    Leave,
}

/// Turns per-frame hover sampling into enter/leave edges.
///
/// Immediate-mode UIs report "is the pointer over this rect" each frame;
/// the pause flag reacts to transitions only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: bool,
}

impl HoverTracker {
    /// Record this frame's hover sample, returning the edge if it changed.
    pub fn update(&mut self, hovered_now: bool) -> Option<HoverEdge> {
        let edge = match (self.hovered, hovered_now) {
            (false, true) => Some(HoverEdge::Enter),
            (true, false) => Some(HoverEdge::Leave),
            _ => None,
        };
        self.hovered = hovered_now;
        edge
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}
