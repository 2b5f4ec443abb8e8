//! Viewport state - scroll offset, content bounds and scroll animation.
//!
//! Offsets are in terminal rows. The renderer reports content and visible
//! heights after layout; every mutation keeps `offset <= max_offset()`.

/// Fraction of the remaining distance covered per animation step
const ANIMATION_DIVISOR: usize = 3;

/// State for the scrollable section body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewportState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of body lines (set after layout)
    pub total_rows: usize,
    /// Visible body lines (set after layout)
    pub visible_rows: usize,
    /// Target of an in-flight smooth scroll
    animation: Option<usize>,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation_target(&self) -> Option<usize> {
        self.animation
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.animation = None;
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.animation = None;
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    fn page(&self) -> usize {
        self.visible_rows.saturating_sub(2).max(1)
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page());
    }

    pub fn jump_to_bottom(&mut self) {
        self.animation = None;
        self.offset = self.max_offset();
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_metrics(&mut self, total_rows: usize, visible_rows: usize) {
        self.total_rows = total_rows;
        self.visible_rows = visible_rows;

        let max_offset = self.max_offset();
        if self.offset > max_offset {
            self.offset = max_offset;
        }
        if let Some(target) = self.animation {
            self.animation = Some(target.min(max_offset));
        }
    }

    /// Start a smooth scroll towards `target`. Replaces any in-flight animation.
    pub fn animate_to(&mut self, target: usize) {
        let target = target.min(self.max_offset());
        if target == self.offset {
            self.animation = None;
        } else {
            self.animation = Some(target);
        }
    }

    /// Advance the animation by one frame.
    ///
    /// Returns true if the offset changed.
    pub fn step_animation(&mut self) -> bool {
        let Some(target) = self.animation else {
            return false;
        };

        let distance = self.offset.abs_diff(target);
        let step = distance.div_ceil(ANIMATION_DIVISOR).max(1).min(distance);
        if self.offset > target {
            self.offset -= step;
        } else {
            self.offset += step;
        }

        if self.offset == target {
            self.animation = None;
        }
        step > 0
    }
}
