//! Scroll observation and scroll-to-top requests
//!
//! The watcher owns no subscription itself; the host feeds it offsets in
//! pixels and it keeps `ViewState::past_scroll_threshold` in sync.

use crate::state::ViewState;

/// Offset (in pixels) past which the scroll-to-top affordance is shown
pub const SCROLL_TOP_THRESHOLD_PX: u32 = 300;

/// Default height of one terminal row, in pixels
pub const DEFAULT_ROW_HEIGHT_PX: u32 = 16;

/// Whether an offset lies strictly beyond the threshold
pub fn is_past_threshold(offset_px: u32) -> bool {
    offset_px > SCROLL_TOP_THRESHOLD_PX
}

/// How the host should move to a requested offset.
///
/// Manual scrolling is applied directly to the viewport and never goes
/// through a request, so only the animated form exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated over several frames
    Smooth,
}

/// Request for the host to move its viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Target offset in rows
    pub top: usize,
    pub behavior: ScrollBehavior,
}

/// Converts row offsets to pixel offsets and tracks the threshold flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWatcher {
    row_height_px: u32,
}

impl Default for ScrollWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_HEIGHT_PX)
    }
}

impl ScrollWatcher {
    pub fn new(row_height_px: u32) -> Self {
        Self {
            row_height_px: row_height_px.max(1),
        }
    }

    pub fn row_height_px(&self) -> u32 {
        self.row_height_px
    }

    /// Pixel offset of a row offset
    pub fn rows_to_px(&self, rows: usize) -> u32 {
        u32::try_from(rows)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height_px)
    }

    /// Record a scroll observation.
    ///
    /// Only the latest offset matters; there is no hysteresis.
    pub fn observe(&self, view: &mut ViewState, offset_px: u32) {
        let past = is_past_threshold(offset_px);
        if past != view.past_scroll_threshold {
            tracing::trace!("Scroll threshold crossed: offset={}px past={}", offset_px, past);
        }
        view.past_scroll_threshold = past;
    }

    /// Record a scroll observation given in rows
    pub fn observe_rows(&self, view: &mut ViewState, offset_rows: usize) {
        self.observe(view, self.rows_to_px(offset_rows));
    }

    /// Smooth scroll to the top of the page
    pub fn scroll_to_top(&self) -> ScrollRequest {
        ScrollRequest {
            top: 0,
            behavior: ScrollBehavior::Smooth,
        }
    }
}
