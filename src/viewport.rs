//! Freeze-aware viewport partitioning and pixel hit testing.
//!
//! The viewport splits into a corner, a column-header strip, a row-header
//! strip and a body. With a freeze point active the body (and each header
//! strip) further splits at the frozen boundary, giving the four body areas
//! the renderer draws independently. Frozen areas never move with scroll;
//! scrollable areas are anchored at the current scroll anchors.

use serde::Serialize;

use crate::axis::SizeIndex;
use crate::range::Range;

/// A pixel rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True iff the point lies inside (right/bottom edges exclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// True iff the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Which structural region a point or selection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    All,
    RowHeader,
    ColHeader,
    #[default]
    Body,
}

/// One rectangular region of visible cells: a logical range plus its
/// on-screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Area {
    pub range: Range,
    pub rect: Rect,
}

/// Result of hit-testing a pixel point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellHit {
    pub placement: Placement,
    pub row: u32,
    pub col: u32,
    pub rect: Rect,
}

/// Viewport dimensions, including the header strip sizes.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub header_width: f32,
    pub header_height: f32,
}

impl Viewport {
    /// Width available to cell content (viewport minus row-header strip).
    pub fn body_width(&self) -> f32 {
        (self.width - self.header_width).max(0.0)
    }

    /// Height available to cell content (viewport minus col-header strip).
    pub fn body_height(&self) -> f32 {
        (self.height - self.header_height).max(0.0)
    }
}

/// The partitioned viewport: 1 (no freeze) or 4 (freeze active) body areas
/// plus the matching header areas and the corner rect.
///
/// Recomputed whenever scroll state, freeze point, or viewport size change;
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ViewLayout {
    /// Body areas in fixed order: with a freeze active
    /// frozen/frozen, frozen-rows/scroll-cols, scroll-rows/frozen-cols,
    /// scroll/scroll; a single area otherwise.
    pub areas: Vec<Area>,
    /// Row-header strip areas (ranges span rows, col fixed at 0).
    pub row_header_areas: Vec<Area>,
    /// Col-header strip areas (ranges span cols, row fixed at 0).
    pub col_header_areas: Vec<Area>,
    /// The select-all corner above the row headers.
    pub corner: Rect,
}

/// Walk lines from `start` until `avail` pixels are filled.
///
/// Returns the inclusive end line (the last, possibly partially visible one)
/// and the pixel size actually used.
fn visible_end(sizes: &SizeIndex, start: u32, avail: f32) -> (u32, f32) {
    let mut acc = 0.0;
    let mut line = start;
    while line < sizes.len() && acc < avail {
        acc += sizes.get(line);
        line += 1;
    }
    (line.max(start + 1) - 1, acc)
}

/// Walk lines from `start` to locate the one containing `local` (a pixel
/// offset relative to the walk origin). Zero-size hidden lines can never
/// contain a point and are skipped.
fn line_at(sizes: &SizeIndex, start: u32, local: f32) -> Option<(u32, f32, f32)> {
    let mut acc = 0.0;
    let mut line = start;
    while line < sizes.len() {
        let size = sizes.get(line);
        if local < acc + size {
            return Some((line, acc, size));
        }
        acc += size;
        line += 1;
    }
    None
}

impl ViewLayout {
    /// Partition the viewport.
    ///
    /// `freeze` counts frozen lines per axis: `(rows, cols)` means lines
    /// above row `rows` and left of column `cols` stay fixed. `(0, 0)` or
    /// `None` disables the freeze. Scrollable areas start at the scroll
    /// anchors, clamped to the frozen boundary.
    pub fn compute(
        view: &Viewport,
        rows: &SizeIndex,
        cols: &SizeIndex,
        row_anchor: u32,
        col_anchor: u32,
        freeze: Option<(u32, u32)>,
    ) -> Self {
        let x0 = view.header_width;
        let y0 = view.header_height;
        let body_w = view.body_width();
        let body_h = view.body_height();
        let corner = Rect::new(0.0, 0.0, view.header_width, view.header_height);

        // Paging can park the anchor one past the last line; the partition
        // still needs a valid range.
        let row_anchor = row_anchor.min(rows.len().saturating_sub(1));
        let col_anchor = col_anchor.min(cols.len().saturating_sub(1));

        let (frow, fcol) = freeze.unwrap_or((0, 0));
        if frow == 0 && fcol == 0 {
            let (row_end, _) = visible_end(rows, row_anchor, body_h);
            let (col_end, _) = visible_end(cols, col_anchor, body_w);
            let body = Range::new(row_anchor, col_anchor, row_end, col_end);
            return Self {
                areas: vec![Area {
                    range: body,
                    rect: Rect::new(x0, y0, body_w, body_h),
                }],
                row_header_areas: vec![Area {
                    range: Range::new(row_anchor, 0, row_end, 0),
                    rect: Rect::new(0.0, y0, view.header_width, body_h),
                }],
                col_header_areas: vec![Area {
                    range: Range::new(0, col_anchor, 0, col_end),
                    rect: Rect::new(x0, 0.0, body_w, view.header_height),
                }],
                corner,
            };
        }

        let frozen_w = cols.extent(0, fcol).min(body_w);
        let frozen_h = rows.extent(0, frow).min(body_h);
        let scroll_w = body_w - frozen_w;
        let scroll_h = body_h - frozen_h;

        // Frozen quadrants ignore scroll on their frozen axis; scrollable
        // quadrants start at the anchor, never before the frozen boundary.
        let srow = row_anchor.max(frow);
        let scol = col_anchor.max(fcol);
        let frow_end = frow.saturating_sub(1);
        let fcol_end = fcol.saturating_sub(1);
        let (row_end, _) = visible_end(rows, srow, scroll_h);
        let (col_end, _) = visible_end(cols, scol, scroll_w);

        let areas = vec![
            Area {
                range: Range::new(0, 0, frow_end, fcol_end),
                rect: Rect::new(x0, y0, frozen_w, frozen_h),
            },
            Area {
                range: Range::new(0, scol, frow_end, col_end),
                rect: Rect::new(x0 + frozen_w, y0, scroll_w, frozen_h),
            },
            Area {
                range: Range::new(srow, 0, row_end, fcol_end),
                rect: Rect::new(x0, y0 + frozen_h, frozen_w, scroll_h),
            },
            Area {
                range: Range::new(srow, scol, row_end, col_end),
                rect: Rect::new(x0 + frozen_w, y0 + frozen_h, scroll_w, scroll_h),
            },
        ];
        let row_header_areas = vec![
            Area {
                range: Range::new(0, 0, frow_end, 0),
                rect: Rect::new(0.0, y0, view.header_width, frozen_h),
            },
            Area {
                range: Range::new(srow, 0, row_end, 0),
                rect: Rect::new(0.0, y0 + frozen_h, view.header_width, scroll_h),
            },
        ];
        let col_header_areas = vec![
            Area {
                range: Range::new(0, 0, 0, fcol_end),
                rect: Rect::new(x0, 0.0, frozen_w, view.header_height),
            },
            Area {
                range: Range::new(0, scol, 0, col_end),
                rect: Rect::new(x0 + frozen_w, 0.0, scroll_w, view.header_height),
            },
        ];

        Self {
            areas,
            row_header_areas,
            col_header_areas,
            corner,
        }
    }

    /// Classify a pixel point and invert it to a logical cell.
    ///
    /// Returns `None` for points outside every known region (including
    /// points inside an area's rectangle but beyond the axis content).
    pub fn cell_at(&self, rows: &SizeIndex, cols: &SizeIndex, x: f32, y: f32) -> Option<CellHit> {
        if self.corner.contains(x, y) {
            return Some(CellHit {
                placement: Placement::All,
                row: 0,
                col: 0,
                rect: self.corner,
            });
        }

        for area in &self.col_header_areas {
            if area.rect.is_empty() || !area.rect.contains(x, y) {
                continue;
            }
            let (col, off, size) = line_at(cols, area.range.start_col, x - area.rect.x)?;
            if col > area.range.end_col {
                return None;
            }
            return Some(CellHit {
                placement: Placement::ColHeader,
                row: 0,
                col,
                rect: Rect::new(area.rect.x + off, 0.0, size, self.corner.height),
            });
        }

        for area in &self.row_header_areas {
            if area.rect.is_empty() || !area.rect.contains(x, y) {
                continue;
            }
            let (row, off, size) = line_at(rows, area.range.start_row, y - area.rect.y)?;
            if row > area.range.end_row {
                return None;
            }
            return Some(CellHit {
                placement: Placement::RowHeader,
                row,
                col: 0,
                rect: Rect::new(0.0, area.rect.y + off, self.corner.width, size),
            });
        }

        for area in &self.areas {
            if area.rect.is_empty() || !area.rect.contains(x, y) {
                continue;
            }
            let (col, col_off, width) = line_at(cols, area.range.start_col, x - area.rect.x)?;
            let (row, row_off, height) = line_at(rows, area.range.start_row, y - area.rect.y)?;
            if row > area.range.end_row || col > area.range.end_col {
                return None;
            }
            return Some(CellHit {
                placement: Placement::Body,
                row,
                col,
                rect: Rect::new(area.rect.x + col_off, area.rect.y + row_off, width, height),
            });
        }

        None
    }
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

    fn view() -> Viewport {
        Viewport {
            width: 840.0,
            height: 525.0,
            header_width: 40.0,
            header_height: 25.0,
        }
    }

    #[test]
    fn no_freeze_yields_single_area() {
        let rows = SizeIndex::new(100, 25.0);
        let cols = SizeIndex::new(26, 100.0);
        let layout = ViewLayout::compute(&view(), &rows, &cols, 0, 0, None);
        assert_eq!(layout.areas.len(), 1);
        let area = &layout.areas[0];
        assert_eq!(area.rect, Rect::new(40.0, 25.0, 800.0, 500.0));
        // 800px fits 8 cols of 100; 500px fits 20 rows of 25.
        assert_eq!(area.range, Range::new(0, 0, 19, 7));
    }

    #[test]
    fn freeze_yields_four_tiling_areas() {
        let rows = SizeIndex::new(100, 25.0);
        let cols = SizeIndex::new(26, 100.0);
        let layout = ViewLayout::compute(&view(), &rows, &cols, 20, 3, Some((4, 3)));
        assert_eq!(layout.areas.len(), 4);

        let [a, b, c, d] = [
            layout.areas[0],
            layout.areas[1],
            layout.areas[2],
            layout.areas[3],
        ];
        // Frozen quadrant ranges are scroll-independent.
        assert_eq!(a.range, Range::new(0, 0, 3, 2));
        // Scrollable quadrants track the anchors.
        assert_eq!(d.range.start_row, 20);
        assert_eq!(d.range.start_col, 3);

        // Rects tile the body exactly.
        assert_eq!(a.rect.x + a.rect.width, b.rect.x);
        assert_eq!(a.rect.y + a.rect.height, c.rect.y);
        assert_eq!(b.rect.width, d.rect.width);
        assert_eq!(c.rect.height, d.rect.height);
        assert_eq!(a.rect.width + b.rect.width, 800.0);
        assert_eq!(a.rect.height + c.rect.height, 500.0);
    }

    #[test]
    fn scrollable_start_never_precedes_freeze_boundary() {
        let rows = SizeIndex::new(100, 25.0);
        let cols = SizeIndex::new(26, 100.0);
        let layout = ViewLayout::compute(&view(), &rows, &cols, 0, 0, Some((4, 3)));
        assert_eq!(layout.areas[3].range.start_row, 4);
        assert_eq!(layout.areas[3].range.start_col, 3);
    }

    #[test]
    fn cell_at_classifies_regions() {
        let rows = SizeIndex::new(100, 25.0);
        let cols = SizeIndex::new(26, 100.0);
        let layout = ViewLayout::compute(&view(), &rows, &cols, 0, 0, None);

        let hit = layout.cell_at(&rows, &cols, 10.0, 10.0).unwrap();
        assert_eq!(hit.placement, Placement::All);

        let hit = layout.cell_at(&rows, &cols, 150.0, 10.0).unwrap();
        assert_eq!(hit.placement, Placement::ColHeader);
        assert_eq!(hit.col, 1);

        let hit = layout.cell_at(&rows, &cols, 10.0, 60.0).unwrap();
        assert_eq!(hit.placement, Placement::RowHeader);
        assert_eq!(hit.row, 1);

        let hit = layout.cell_at(&rows, &cols, 145.0, 78.0).unwrap();
        assert_eq!(hit.placement, Placement::Body);
        assert_eq!((hit.row, hit.col), (2, 1));
        assert_eq!(hit.rect, Rect::new(140.0, 75.0, 100.0, 25.0));

        assert!(layout.cell_at(&rows, &cols, 5000.0, 5000.0).is_none());
    }

    #[test]
    fn cell_at_uses_quadrant_anchors() {
        let rows = SizeIndex::new(100, 25.0);
        let cols = SizeIndex::new(26, 100.0);
        let layout = ViewLayout::compute(&view(), &rows, &cols, 20, 5, Some((4, 3)));

        // Point in the frozen/frozen quadrant maps from the origin.
        let hit = layout.cell_at(&rows, &cols, 50.0, 30.0).unwrap();
        assert_eq!((hit.row, hit.col), (0, 0));

        // Point just past the frozen boundary maps from the anchors.
        let frozen_w = 40.0 + 300.0;
        let frozen_h = 25.0 + 100.0;
        let hit = layout
            .cell_at(&rows, &cols, frozen_w + 5.0, frozen_h + 5.0)
            .unwrap();
        assert_eq!((hit.row, hit.col), (20, 5));
    }

    #[test]
    fn cell_at_beyond_content_is_none() {
        let rows = SizeIndex::new(2, 25.0);
        let cols = SizeIndex::new(2, 100.0);
        let layout = ViewLayout::compute(&view(), &rows, &cols, 0, 0, None);
        // Inside the body rect but past the last row/col.
        assert!(layout.cell_at(&rows, &cols, 500.0, 400.0).is_none());
    }
}
