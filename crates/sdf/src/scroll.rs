//! Smooth document scrolling.

/// Rows per arrow key.
pub const LINE_SCROLL: i32 = 1;

/// Rows per mouse wheel notch.
pub const WHEEL_SCROLL: i32 = 3;

/// Page Up/Down moves this share of the viewport.
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

/// Time constant of the easing towards the target.
const SMOOTHING_MS: f32 = 90.0;

/// Scroll position that eases towards its target on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Scroller {
    offset: f32,
    target: u16,
    max: u16,
}

impl Scroller {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            target: 0,
            max: 0,
        }
    }

    /// Update the scroll bound, clamping the current position into it.
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.target = self.target.min(max);
        self.offset = self.offset.min(f32::from(max));
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.target) + delta).clamp(0, i32::from(self.max));
        self.target = target as u16;
    }

    /// Ease to `row`.
    pub fn scroll_to(&mut self, row: u16) {
        self.target = row.min(self.max);
    }

    /// Move to `row` without easing.
    pub fn jump_to(&mut self, row: u16) {
        self.scroll_to(row);
        self.offset = f32::from(self.target);
    }

    /// Advance the easing by `dt_ms`. Returns whether the offset changed.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        let before = self.offset();
        let target = f32::from(self.target);
        let factor = 1.0 - (-(dt_ms as f32) / SMOOTHING_MS).exp();

        self.offset += (target - self.offset) * factor;
        if (target - self.offset).abs() < 0.5 {
            self.offset = target;
        }

        self.offset() != before
    }

    /// Current top row of the viewport.
    pub fn offset(&self) -> u16 {
        self.offset.round() as u16
    }

    pub fn target(&self) -> u16 {
        self.target
    }
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new()
    }
}
