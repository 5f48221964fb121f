//! Per-axis scroll state: anchor line plus fractional pixel offset.
//!
//! `scroll_to` is incremental: consecutive scroll events move a handful of
//! lines, so the anchor walk is bounded by the lines crossed rather than by
//! the anchor's absolute position. That keeps wheel scrolling O(1) amortized
//! on axes with tens of thousands of lines.

use crate::axis::SizeIndex;

/// Outcome of a scroll or step operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollResult {
    /// True iff the anchor line moved; callers skip re-rendering otherwise.
    pub changed: bool,
    /// The anchor line after the operation.
    pub anchor: u32,
}

/// Scroll position along one axis.
///
/// `anchor` is the first visible line; `value - anchor_start` is the number
/// of pixels that line is scrolled past its leading edge, always in
/// `[0, size(anchor))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollAxis {
    anchor: u32,
    value: f32,
    anchor_start: f32,
}

impl ScrollAxis {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first visible line on this axis.
    pub fn anchor(&self) -> u32 {
        self.anchor
    }

    /// The last pixel value passed to [`scroll_to`](Self::scroll_to),
    /// clamped to the axis content bounds.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Pixels the anchor line is scrolled past its leading edge.
    pub fn pixel_offset(&self) -> f32 {
        self.value - self.anchor_start
    }

    /// Pixel position of the anchor line's leading edge.
    pub fn anchor_start(&self) -> f32 {
        self.anchor_start
    }

    /// Back to the origin; used when grid data is reloaded wholesale.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scroll to an absolute pixel value, walking the anchor incrementally.
    ///
    /// The target saturates at the content bounds; scrolling past either end
    /// never panics. Only the lines actually crossed are visited.
    pub fn scroll_to(&mut self, target: f32, sizes: &SizeIndex) -> ScrollResult {
        let target = target.clamp(0.0, sizes.total());
        let start_anchor = self.anchor;

        // Walk backward until the anchor's leading edge is at or before the
        // target, then forward across every line that ends at or before it.
        // The forward pass also skips zero-size (hidden) lines so the
        // anchor always lands on a line the offset fits inside.
        while self.anchor > 0 && self.anchor_start > target {
            self.anchor -= 1;
            self.anchor_start -= sizes.get(self.anchor);
        }
        while self.anchor < sizes.len() && self.anchor_start + sizes.get(self.anchor) <= target {
            self.anchor_start += sizes.get(self.anchor);
            self.anchor += 1;
        }

        self.value = target;
        ScrollResult {
            changed: self.anchor != start_anchor,
            anchor: self.anchor,
        }
    }

    /// Move the anchor by exactly `n` lines, clamped to `[0, len]`.
    ///
    /// Discrete paging: the pixel value is recomputed from the crossed
    /// lines' sizes and the fractional offset resets to 0.
    pub fn step_by(&mut self, n: i32, sizes: &SizeIndex) -> ScrollResult {
        let start = self.anchor;
        let end = (i64::from(start) + i64::from(n)).clamp(0, i64::from(sizes.len()));
        let end = u32::try_from(end).unwrap_or(0);

        if end > start {
            for i in start..end {
                self.anchor_start += sizes.get(i);
            }
        } else {
            for i in end..start {
                self.anchor_start -= sizes.get(i);
            }
        }
        self.anchor = end;
        self.value = self.anchor_start;

        ScrollResult {
            changed: end != start,
            anchor: end,
        }
    }
}
