use serde::{Deserialize, Serialize};

use crate::core::TooltipState;

/// Drags shorter than this (in both axes) end as a click.
pub const BRUSH_CLICK_TOLERANCE_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Brushing,
}

/// Axis-aligned rectangle in pixel space, as dragged (corners unordered).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl PixelRect {
    #[must_use]
    pub fn width(self) -> f64 {
        (self.end.0 - self.start.0).abs()
    }

    #[must_use]
    pub fn height(self) -> f64 {
        (self.end.1 - self.start.1).abs()
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.start.0.min(self.end.0)
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.start.1.min(self.end.1)
    }

    /// `true` while the rectangle is within click tolerance on both axes.
    #[must_use]
    pub fn is_click(self) -> bool {
        self.width() < BRUSH_CLICK_TOLERANCE_PX && self.height() < BRUSH_CLICK_TOLERANCE_PX
    }

    /// Clamps both corners into `[0, width] x [0, height]`.
    #[must_use]
    pub fn clamped(self, width: f64, height: f64) -> Self {
        let clamp = |(x, y): (f64, f64)| (x.clamp(0.0, width), y.clamp(0.0, height));
        Self {
            start: clamp(self.start),
            end: clamp(self.end),
        }
    }
}

/// Result of releasing a brush drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BrushRelease {
    /// The pointer barely moved: treat as a click that clears the selection.
    Click,
    Selected(PixelRect),
    /// Release without a preceding drag start.
    Ignored,
}

/// Pointer, tooltip and brush-gesture state for one chart view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor: Option<(f64, f64)>,
    tooltip: Option<TooltipState>,
    drag: Option<PixelRect>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            cursor: None,
            tooltip: None,
            drag: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn tooltip(self) -> Option<TooltipState> {
        self.tooltip
    }

    #[must_use]
    pub fn active_drag(self) -> Option<PixelRect> {
        self.drag
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.tooltip = None;
    }

    pub fn set_tooltip(&mut self, tooltip: Option<TooltipState>) {
        self.tooltip = tooltip;
    }

    pub fn on_drag_start(&mut self, x: f64, y: f64) {
        self.mode = InteractionMode::Brushing;
        self.drag = Some(PixelRect {
            start: (x, y),
            end: (x, y),
        });
    }

    /// Extends the active drag; returns the updated rectangle.
    pub fn on_drag_move(&mut self, x: f64, y: f64) -> Option<PixelRect> {
        let drag = self.drag.as_mut()?;
        drag.end = (x, y);
        Some(*drag)
    }

    pub fn on_drag_end(&mut self, x: f64, y: f64) -> BrushRelease {
        self.mode = InteractionMode::Idle;
        let Some(mut drag) = self.drag.take() else {
            return BrushRelease::Ignored;
        };
        drag.end = (x, y);
        if drag.is_click() {
            BrushRelease::Click
        } else {
            BrushRelease::Selected(drag)
        }
    }
}
