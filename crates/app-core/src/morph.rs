//! Morph progress control: tunnel (0) <-> flat logo (1).

use crate::constants::*;

/// Linear interpolation in convex form, exact at `t = 0` and `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Hermite smoothstep `t^2 (3 - 2t)` on the clamped input.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Breakpoints for the legacy scroll-driven trigger: rise over
/// `[in_start, in_end)`, hold at 1 until `hold_end`, fall back to 0 over
/// `[hold_end, out_end)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollWindow {
    pub in_start: f32,
    pub in_end: f32,
    pub hold_end: f32,
    pub out_end: f32,
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self {
            in_start: MORPH_IN_START,
            in_end: MORPH_IN_END,
            hold_end: MORPH_HOLD_END,
            out_end: MORPH_OUT_END,
        }
    }
}

impl ScrollWindow {
    /// Map a normalized scroll fraction to morph progress 0..1..0.
    pub fn progress(&self, scroll_fraction: f32) -> f32 {
        let s = scroll_fraction;
        if s <= self.in_start {
            0.0
        } else if s < self.in_end {
            smoothstep((s - self.in_start) / (self.in_end - self.in_start))
        } else if s < self.hold_end {
            1.0
        } else if s < self.out_end {
            smoothstep(1.0 - (s - self.hold_end) / (self.out_end - self.hold_end))
        } else {
            0.0
        }
    }
}

/// Trigger policy selecting the morph target.
///
/// `Section` is the canonical policy (driven by the page's active section
/// index); `ScrollWindow` is the legacy scroll-position variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MorphTrigger {
    ScrollWindow(ScrollWindow),
    Section { index: usize },
}

/// Damped morph progress, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MorphState {
    progress: f32,
}

impl MorphState {
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Advance one frame and return the updated progress.
    ///
    /// The section policy never jumps: the binary target is approached with
    /// frame-rate-independent exponential damping `1 - e^(-rate*dt)`.
    /// Non-positive `dt` (paused tab resume) is a no-op so the approach can
    /// never overshoot. The scroll-window policy follows its shaped value
    /// directly, which is already continuous in scroll position.
    pub fn update(
        &mut self,
        trigger: MorphTrigger,
        rate: f32,
        dt: f32,
        scroll_fraction: f32,
        active_section: usize,
    ) -> f32 {
        match trigger {
            MorphTrigger::ScrollWindow(window) => {
                self.progress = window.progress(scroll_fraction);
            }
            MorphTrigger::Section { index } => {
                let target = if active_section == index { 1.0 } else { 0.0 };
                if dt > 0.0 {
                    let alpha = 1.0 - (-rate * dt).exp();
                    self.progress += (target - self.progress) * alpha;
                }
            }
        }
        self.progress = self.progress.clamp(0.0, 1.0);
        self.progress
    }
}
