//! Sampled scroll / viewport / pointer state.
//!
//! Event callbacks overwrite the fields between frames; the frame loop reads
//! one snapshot per tick. The type itself has no DOM dependency so the
//! normalization math is testable on the host.

use crate::constants::SCROLL_RANGE_SCREENS;
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct InputState {
    pub scroll_y: f32,
    pub viewport_w: f32,
    pub viewport_h: f32,
    /// Normalized pointer, origin at viewport center, components in [-1, 1].
    pub pointer: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            viewport_w: 1.0,
            viewport_h: 1.0,
            pointer: Vec2::ZERO,
        }
    }
}

// A zero or non-finite viewport dimension must not poison the frame with
// NaN/Infinity; treat it as 1 and let the next resize event correct it.
#[inline]
fn safe_extent(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        1.0
    }
}

impl InputState {
    pub fn set_viewport(&mut self, w: f32, h: f32) {
        self.viewport_w = w;
        self.viewport_h = h;
    }

    pub fn set_scroll(&mut self, y: f32) {
        self.scroll_y = y;
    }

    /// Ingest a pointer position in client (CSS pixel) coordinates.
    pub fn set_pointer_from_client(&mut self, client_x: f32, client_y: f32) {
        let w = safe_extent(self.viewport_w);
        let h = safe_extent(self.viewport_h);
        self.pointer = Vec2::new(
            ((client_x / w) * 2.0 - 1.0).clamp(-1.0, 1.0),
            ((client_y / h) * 2.0 - 1.0).clamp(-1.0, 1.0),
        );
    }

    /// Scroll position normalized over [`SCROLL_RANGE_SCREENS`] viewport
    /// heights, clamped to [0, 1].
    pub fn scroll_fraction(&self) -> f32 {
        let h = safe_extent(self.viewport_h);
        (self.scroll_y / (SCROLL_RANGE_SCREENS * h)).clamp(0.0, 1.0)
    }

    /// Index of the full-viewport page section nearest the current scroll
    /// position. Sections are viewport-height snap targets, so the nearest
    /// one is simply the rounded scroll offset in screens.
    pub fn active_section(&self) -> usize {
        let h = safe_extent(self.viewport_h);
        (self.scroll_y / h).round().max(0.0) as usize
    }
}
