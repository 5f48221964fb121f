//! Multi-range selection state and its header projections.
//!
//! A selection gesture starts a degenerate range (`add_range`) and extends
//! it while dragging (`union_range`, which replaces the active range rather
//! than appending). Each selection range also projects onto the row/column
//! header strips; projections are folded into the existing header-range
//! lists with a greedy single-pass merge, one pass per added range.

use serde::Serialize;

use crate::axis::SizeIndex;
use crate::range::Range;
use crate::viewport::{Placement, Rect, ViewLayout};

/// A selection overlay rectangle for one visible area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayRect {
    pub rect: Rect,
    /// Belongs to the most-recently-started range.
    pub last: bool,
    /// Draw the drag-to-extend corner handle on this rectangle.
    pub corner: bool,
}

/// Overlay geometry for every visible area and header strip.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectionOverlay {
    pub areas: Vec<OverlayRect>,
    pub row_headers: Vec<Rect>,
    pub col_headers: Vec<Rect>,
}

/// Rectangular multi-range selection.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    /// Selection rectangles, most-recently-started last.
    pub ranges: Vec<Range>,
    /// Selected row spans projected onto the row-header strip.
    pub row_header_ranges: Vec<Range>,
    /// Selected column spans projected onto the col-header strip.
    pub col_header_ranges: Vec<Range>,
    start: Option<Range>,
    placement: Placement,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the active selection gesture started.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Start a new selection at a cell.
    ///
    /// `clear` discards prior ranges (a plain click); `false` appends (a
    /// modifier-click). The new range becomes the active, extendable one.
    pub fn add_range(&mut self, row: u32, col: u32, clear: bool) {
        let range = Range::cell(row, col);
        if clear {
            self.clear_ranges();
        }
        self.ranges.push(range);
        self.start = Some(range);
        self.update_header_ranges(range);
    }

    /// Extend the active range to also cover (row, col).
    ///
    /// Replaces the last range with the union while a drag is in progress;
    /// a no-op if no gesture started.
    pub fn union_range(&mut self, row: u32, col: u32) {
        let Some(start) = self.start else {
            return;
        };
        let merged = start.union(&Range::cell(row, col));
        if let Some(active) = self.ranges.last_mut() {
            *active = merged;
        }
        self.update_header_ranges(merged);
    }

    /// Discard every range and header projection.
    pub fn clear_ranges(&mut self) {
        self.ranges.clear();
        self.row_header_ranges.clear();
        self.col_header_ranges.clear();
        self.start = None;
    }

    /// Fold one range's projections into the header-range lists.
    ///
    /// Greedy single pass: the projection replaces the first entry it
    /// intersects with their union, or is appended. Entries that only
    /// become adjacent through a later merge are not re-coalesced.
    fn update_header_ranges(&mut self, range: Range) {
        fn merge_into(ranges: &mut Vec<Range>, r: Range) {
            for entry in ranges.iter_mut() {
                if entry.intersects(&r) {
                    *entry = entry.union(&r);
                    return;
                }
            }
            ranges.push(r);
        }

        merge_into(
            &mut self.row_header_ranges,
            Range::new(range.start_row, 0, range.end_row, 0),
        );
        merge_into(
            &mut self.col_header_ranges,
            Range::new(0, range.start_col, 0, range.end_col),
        );
    }

    /// Compute overlay rectangles against the current partition.
    ///
    /// Every selection range is clipped to every visible area; the active
    /// range's rectangles carry `last`, and the corner handle appears only
    /// for a single body-placed range.
    pub fn overlay(
        &self,
        layout: &ViewLayout,
        rows: &SizeIndex,
        cols: &SizeIndex,
    ) -> SelectionOverlay {
        let mut overlay = SelectionOverlay::default();
        let with_corner = self.placement == Placement::Body && self.ranges.len() == 1;

        for area in &layout.areas {
            if area.rect.is_empty() {
                continue;
            }
            for (index, range) in self.ranges.iter().enumerate() {
                let Some(clip) = range.intersection(&area.range) else {
                    continue;
                };
                let last = index + 1 == self.ranges.len();
                overlay.areas.push(OverlayRect {
                    rect: clip_rect(area, &clip, rows, cols),
                    last,
                    corner: last && with_corner,
                });
            }
        }

        for area in &layout.row_header_areas {
            if area.rect.is_empty() {
                continue;
            }
            for range in &self.row_header_ranges {
                if let Some(clip) = range.intersection(&area.range) {
                    let y = area.rect.y + rows.extent(area.range.start_row, clip.start_row);
                    let height = rows.extent(clip.start_row, clip.end_row + 1);
                    overlay
                        .row_headers
                        .push(Rect::new(area.rect.x, y, area.rect.width, height));
                }
            }
        }

        for area in &layout.col_header_areas {
            if area.rect.is_empty() {
                continue;
            }
            for range in &self.col_header_ranges {
                if let Some(clip) = range.intersection(&area.range) {
                    let x = area.rect.x + cols.extent(area.range.start_col, clip.start_col);
                    let width = cols.extent(clip.start_col, clip.end_col + 1);
                    overlay
                        .col_headers
                        .push(Rect::new(x, area.rect.y, width, area.rect.height));
                }
            }
        }

        overlay
    }
}

/// Pixel rectangle of a clipped selection range inside one area.
fn clip_rect(
    area: &crate::viewport::Area,
    clip: &Range,
    rows: &SizeIndex,
    cols: &SizeIndex,
) -> Rect {
    let x = area.rect.x + cols.extent(area.range.start_col, clip.start_col);
    let y = area.rect.y + rows.extent(area.range.start_row, clip.start_row);
    let width = cols.extent(clip.start_col, clip.end_col + 1);
    let height = rows.extent(clip.start_row, clip.end_row + 1);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;

    #[test]
    fn add_range_clears_by_default() {
        let mut sel = Selector::new();
        sel.add_range(1, 1, true);
        sel.add_range(5, 5, true);
        assert_eq!(sel.ranges, vec![Range::cell(5, 5)]);
    }

    #[test]
    fn modifier_add_appends() {
        let mut sel = Selector::new();
        sel.add_range(1, 1, true);
        sel.add_range(5, 5, false);
        assert_eq!(sel.ranges.len(), 2);
    }

    #[test]
    fn union_replaces_active_range() {
        let mut sel = Selector::new();
        sel.add_range(2, 2, true);
        sel.union_range(4, 6);
        sel.union_range(3, 3);
        // Each drag step re-unions from the gesture start, not the previous
        // union, so shrinking the drag shrinks the range.
        assert_eq!(sel.ranges, vec![Range::new(2, 2, 3, 3)]);
    }

    #[test]
    fn union_without_start_is_noop() {
        let mut sel = Selector::new();
        sel.union_range(3, 3);
        assert!(sel.ranges.is_empty());
    }

    #[test]
    fn header_projection_merges_same_row() {
        let mut sel = Selector::new();
        sel.add_range(5, 5, true);
        sel.add_range(5, 8, false);
        // Same row: one merged row-header range, two distinct col-header
        // ranges (cols 5 and 8 do not intersect when projected).
        assert_eq!(sel.row_header_ranges, vec![Range::new(5, 0, 5, 0)]);
        assert_eq!(
            sel.col_header_ranges,
            vec![Range::new(0, 5, 0, 5), Range::new(0, 8, 0, 8)]
        );
    }

    #[test]
    fn header_projection_is_single_pass() {
        let mut sel = Selector::new();
        sel.add_range(0, 0, true);
        sel.add_range(4, 0, false);
        // Rows 0 and 4 stay separate entries; a bridging range merges into
        // the first entry it intersects only, leaving the rest untouched
        // even when they now overlap the merged entry.
        sel.add_range(2, 0, false);
        sel.union_range(5, 0);
        assert_eq!(
            sel.row_header_ranges,
            vec![
                Range::new(0, 0, 0, 0),
                Range::new(2, 0, 5, 0),
                Range::new(2, 0, 2, 0)
            ]
        );
    }

    #[test]
    fn clear_empties_projections_too() {
        let mut sel = Selector::new();
        sel.add_range(3, 3, true);
        sel.clear_ranges();
        assert!(sel.ranges.is_empty());
        assert!(sel.row_header_ranges.is_empty());
        assert!(sel.col_header_ranges.is_empty());
    }

    #[test]
    fn overlay_clips_to_visible_areas() {
        let rows = SizeIndex::new(100, 25.0);
        let cols = SizeIndex::new(26, 100.0);
        let view = Viewport {
            width: 840.0,
            height: 525.0,
            header_width: 40.0,
            header_height: 25.0,
        };
        let layout = ViewLayout::compute(&view, &rows, &cols, 0, 0, None);

        let mut sel = Selector::new();
        sel.add_range(1, 1, true);
        sel.union_range(2, 2);
        let overlay = sel.overlay(&layout, &rows, &cols);

        assert_eq!(overlay.areas.len(), 1);
        let body = overlay.areas[0];
        assert_eq!(body.rect, Rect::new(140.0, 50.0, 200.0, 50.0));
        assert!(body.last);
        assert!(body.corner);

        assert_eq!(overlay.row_headers.len(), 1);
        assert_eq!(overlay.row_headers[0], Rect::new(0.0, 50.0, 40.0, 50.0));
        assert_eq!(overlay.col_headers.len(), 1);
        assert_eq!(overlay.col_headers[0], Rect::new(140.0, 0.0, 200.0, 25.0));
    }

    #[test]
    fn corner_needs_single_body_range() {
        let rows = SizeIndex::new(100, 25.0);
        let cols = SizeIndex::new(26, 100.0);
        let view = Viewport {
            width: 840.0,
            height: 525.0,
            header_width: 40.0,
            header_height: 25.0,
        };
        let layout = ViewLayout::compute(&view, &rows, &cols, 0, 0, None);

        let mut sel = Selector::new();
        sel.add_range(1, 1, true);
        sel.add_range(3, 3, false);
        let overlay = sel.overlay(&layout, &rows, &cols);
        assert!(overlay.areas.iter().all(|r| !r.corner));

        let mut sel = Selector::new();
        sel.set_placement(Placement::RowHeader);
        sel.add_range(1, 0, true);
        let overlay = sel.overlay(&layout, &rows, &cols);
        assert!(overlay.areas.iter().all(|r| !r.corner));
    }

    #[test]
    fn overlay_spans_freeze_quadrants() {
        let rows = SizeIndex::new(100, 25.0);
        let cols = SizeIndex::new(26, 100.0);
        let view = Viewport {
            width: 840.0,
            height: 525.0,
            header_width: 40.0,
            header_height: 25.0,
        };
        let layout = ViewLayout::compute(&view, &rows, &cols, 4, 3, Some((4, 3)));

        let mut sel = Selector::new();
        sel.add_range(2, 2, true);
        sel.union_range(6, 5);
        let overlay = sel.overlay(&layout, &rows, &cols);
        // The range straddles all four quadrants.
        assert_eq!(overlay.areas.len(), 4);
    }
}
