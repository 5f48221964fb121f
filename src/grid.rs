//! The grid instance: one context object owning all mutable state.
//!
//! A `Grid` owns one `SizeIndex` pair, one scroll axis pair, one `Selector`
//! and two resizers. Every operation runs synchronously inside whichever
//! input event triggered it; callers re-render only when an operation
//! reports a change.

use serde::Serialize;

use crate::axis::SizeIndex;
use crate::cell_ref::{format_cell_ref, parse_cell_ref_strict};
use crate::data::{ColOverride, ColsData, GridData, RowOverride, RowsData};
use crate::error::{GridError, Result};
use crate::range::Range;
use crate::resizer::{Resizer, ResizerKind};
use crate::scroll::ScrollAxis;
use crate::selector::{SelectionOverlay, Selector};
use crate::viewport::{CellHit, ViewLayout, Viewport};

/// Construction-time options, all defaulted to the stock widget values.
#[derive(Debug, Clone)]
pub struct GridOptions {
    pub rows: u32,
    pub cols: u32,
    pub row_height: f32,
    pub col_width: f32,
    pub min_row_height: f32,
    pub min_col_width: f32,
    pub header_width: f32,
    pub header_height: f32,
    pub scrollable: bool,
    pub resizable: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 26,
            row_height: 25.0,
            col_width: 100.0,
            min_row_height: 10.0,
            min_col_width: 20.0,
            header_width: 40.0,
            header_height: 25.0,
            scrollable: true,
            resizable: true,
        }
    }
}

/// Scrollbar-track geometry for the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollBounds {
    /// Current scroll pixel values.
    pub x: f32,
    pub y: f32,
    /// Viewport size available to cell content.
    pub width: f32,
    pub height: f32,
    /// Total content size across both axes.
    pub content_width: f32,
    pub content_height: f32,
}

/// A virtualized spreadsheet grid's coordinate and selection engine.
pub struct Grid {
    rows: SizeIndex,
    cols: SizeIndex,
    row_scroll: ScrollAxis,
    col_scroll: ScrollAxis,
    freeze: Option<(u32, u32)>,
    merges: Vec<Range>,
    view: Viewport,
    selector: Selector,
    row_resizer: Resizer,
    col_resizer: Resizer,
    scrollable: bool,
    resizable: bool,
}

impl Grid {
    /// Create a grid. Fails fast on a zero-length axis or non-positive
    /// default sizes; geometry code downstream assumes both.
    pub fn new(options: &GridOptions, width: f32, height: f32) -> Result<Self> {
        if options.rows == 0 || options.cols == 0 {
            return Err(GridError::Config("axis length must be > 0".to_string()));
        }
        if options.row_height <= 0.0 || options.col_width <= 0.0 {
            return Err(GridError::Config("default size must be > 0".to_string()));
        }
        Ok(Self {
            rows: SizeIndex::new(options.rows, options.row_height),
            cols: SizeIndex::new(options.cols, options.col_width),
            row_scroll: ScrollAxis::new(),
            col_scroll: ScrollAxis::new(),
            freeze: None,
            merges: Vec::new(),
            view: Viewport {
                width,
                height,
                header_width: options.header_width,
                header_height: options.header_height,
            },
            selector: Selector::new(),
            row_resizer: Resizer::new(ResizerKind::Row, options.min_row_height),
            col_resizer: Resizer::new(ResizerKind::Col, options.min_col_width),
            scrollable: options.scrollable,
            resizable: options.resizable,
        })
    }

    pub fn rows(&self) -> &SizeIndex {
        &self.rows
    }

    pub fn cols(&self) -> &SizeIndex {
        &self.cols
    }

    pub fn rows_mut(&mut self) -> &mut SizeIndex {
        &mut self.rows
    }

    pub fn cols_mut(&mut self) -> &mut SizeIndex {
        &mut self.cols
    }

    pub fn merges(&self) -> &[Range] {
        &self.merges
    }

    pub fn freeze(&self) -> Option<(u32, u32)> {
        self.freeze
    }

    /// Set the freeze point from a cell reference; "A1" clears it.
    pub fn set_freeze(&mut self, cell_ref: &str) -> Result<()> {
        let (col, row) = parse_cell_ref_strict(cell_ref)?;
        if row >= self.rows.len() || col >= self.cols.len() {
            return Err(GridError::Config(format!(
                "freeze point {cell_ref} outside the grid"
            )));
        }
        self.freeze = if row == 0 && col == 0 {
            None
        } else {
            Some((row, col))
        };
        Ok(())
    }

    pub fn clear_freeze(&mut self) {
        self.freeze = None;
    }

    /// Replace the whole grid state from persisted data.
    ///
    /// Validates every address string before touching any state, then
    /// resets scroll to the origin and clears the selection.
    pub fn load(&mut self, data: &GridData) -> Result<()> {
        if data.rows.len == 0 || data.cols.len == 0 {
            return Err(GridError::Config("axis length must be > 0".to_string()));
        }
        let freeze = data.freeze_point()?;
        let merges = data.merge_ranges()?;
        let scroll = data.scroll_point()?;

        self.rows = data.row_sizes();
        self.cols = data.col_sizes();
        self.freeze = freeze;
        self.merges = merges;
        self.row_scroll.reset();
        self.col_scroll.reset();
        self.selector.clear_ranges();
        self.row_resizer.cancel();
        self.col_resizer.cancel();

        if let Some((row, col)) = scroll {
            self.row_scroll
                .step_by(i32::try_from(row).unwrap_or(i32::MAX), &self.rows);
            self.col_scroll
                .step_by(i32::try_from(col).unwrap_or(i32::MAX), &self.cols);
        }
        Ok(())
    }

    /// Snapshot the grid state into the persisted shape.
    pub fn to_data(&self) -> GridData {
        let mut rows = RowsData {
            len: self.rows.len(),
            overrides: Default::default(),
        };
        for (index, ov) in self.rows.overrides() {
            rows.overrides.insert(
                index,
                RowOverride {
                    height: ov.size,
                    hide: ov.hidden,
                    style: None,
                },
            );
        }
        let mut cols = ColsData {
            len: self.cols.len(),
            overrides: Default::default(),
        };
        for (index, ov) in self.cols.overrides() {
            cols.overrides.insert(
                index,
                ColOverride {
                    width: ov.size,
                    hide: ov.hidden,
                    style: None,
                },
            );
        }
        GridData {
            rows,
            cols,
            row_height: self.rows.default_size(),
            col_width: self.cols.default_size(),
            freeze: self
                .freeze
                .map(|(row, col)| format_cell_ref(col, row)),
            scroll: Some(format_cell_ref(
                self.col_scroll.anchor(),
                self.row_scroll.anchor(),
            )),
            merges: self.merges.iter().map(Range::to_ref_string).collect(),
        }
    }

    pub fn resize_view(&mut self, width: f32, height: f32) {
        self.view.width = width;
        self.view.height = height;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.view
    }

    /// Pixel size of the frozen pane, (width, height).
    fn frozen_extent(&self) -> (f32, f32) {
        match self.freeze {
            Some((frow, fcol)) => (self.cols.extent(0, fcol), self.rows.extent(0, frow)),
            None => (0.0, 0.0),
        }
    }

    /// Largest useful scroll value per axis. Zero when content fits.
    ///
    /// Scroll values are absolute from the content origin but the scrollable
    /// quadrant only starts showing lines past the frozen boundary, so the
    /// first `frozen_extent` pixels of value are spent crossing the frozen
    /// lines; the clamp grants them back so the last line stays reachable.
    fn max_scroll(&self) -> (f32, f32) {
        let (frozen_w, frozen_h) = self.frozen_extent();
        let max_x = self.cols.total() - (self.view.body_width() - frozen_w);
        let max_y = self.rows.total() - (self.view.body_height() - frozen_h);
        (max_x.max(0.0), max_y.max(0.0))
    }

    /// Scroll the column axis to an absolute pixel value.
    ///
    /// Returns whether a re-render is needed. A no-op when content fits the
    /// viewport.
    pub fn scroll_x(&mut self, value: f32) -> bool {
        let (max_x, _) = self.max_scroll();
        if !self.scrollable || max_x <= 0.0 {
            return false;
        }
        self.col_scroll
            .scroll_to(value.clamp(0.0, max_x), &self.cols)
            .changed
    }

    /// Scroll the row axis to an absolute pixel value.
    pub fn scroll_y(&mut self, value: f32) -> bool {
        let (_, max_y) = self.max_scroll();
        if !self.scrollable || max_y <= 0.0 {
            return false;
        }
        self.row_scroll
            .scroll_to(value.clamp(0.0, max_y), &self.rows)
            .changed
    }

    /// Move the row anchor by `n` lines (discrete paging).
    pub fn step_row(&mut self, n: i32) -> bool {
        let (_, max_y) = self.max_scroll();
        if !self.scrollable || max_y <= 0.0 {
            return false;
        }
        self.row_scroll.step_by(n, &self.rows).changed
    }

    /// Move the column anchor by `n` lines (discrete paging).
    pub fn step_col(&mut self, n: i32) -> bool {
        let (max_x, _) = self.max_scroll();
        if !self.scrollable || max_x <= 0.0 {
            return false;
        }
        self.col_scroll.step_by(n, &self.cols).changed
    }

    /// Geometry the host needs to size its scrollbar tracks.
    pub fn scroll_bounds(&self) -> ScrollBounds {
        ScrollBounds {
            x: self.col_scroll.value(),
            y: self.row_scroll.value(),
            width: self.view.body_width(),
            height: self.view.body_height(),
            content_width: self.cols.total(),
            content_height: self.rows.total(),
        }
    }

    /// Partition the viewport for the current scroll/freeze state.
    pub fn layout(&self) -> ViewLayout {
        ViewLayout::compute(
            &self.view,
            &self.rows,
            &self.cols,
            self.row_scroll.anchor(),
            self.col_scroll.anchor(),
            self.freeze,
        )
    }

    /// Hit-test a pixel point against the current partition.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<CellHit> {
        self.layout().cell_at(&self.rows, &self.cols, x, y)
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut Selector {
        &mut self.selector
    }

    /// Selection overlay rectangles for the current partition.
    pub fn selection_overlay(&self) -> SelectionOverlay {
        self.selector.overlay(&self.layout(), &self.rows, &self.cols)
    }

    /// The resizer for one axis; `None` when resizing is disabled.
    pub fn resizer_mut(&mut self, kind: ResizerKind) -> Option<&mut Resizer> {
        if !self.resizable {
            return None;
        }
        Some(match kind {
            ResizerKind::Row => &mut self.row_resizer,
            ResizerKind::Col => &mut self.col_resizer,
        })
    }

    /// Finish a resize gesture: commit the dragged size into the axis.
    ///
    /// Returns whether anything changed (callers skip re-rendering on
    /// false). Out-of-range indices are dropped.
    pub fn commit_resize(&mut self, kind: ResizerKind) -> bool {
        let resizer = match kind {
            ResizerKind::Row => &mut self.row_resizer,
            ResizerKind::Col => &mut self.col_resizer,
        };
        let Some(commit) = resizer.pointer_up() else {
            return false;
        };
        match kind {
            ResizerKind::Row if commit.index < self.rows.len() => {
                self.rows.set(commit.index, commit.size);
                true
            }
            ResizerKind::Col if commit.index < self.cols.len() => {
                self.cols.set(commit.index, commit.size);
                true
            }
            _ => false,
        }
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
    use crate::resizer::ResizeTarget;
    use crate::viewport::Rect;

    fn grid() -> Grid {
        Grid::new(&GridOptions::default(), 840.0, 525.0).unwrap()
    }

    #[test]
    fn construction_validates_options() {
        let options = GridOptions {
            rows: 0,
            ..GridOptions::default()
        };
        assert!(Grid::new(&options, 800.0, 600.0).is_err());

        let options = GridOptions {
            col_width: 0.0,
            ..GridOptions::default()
        };
        assert!(Grid::new(&options, 800.0, 600.0).is_err());
    }

    #[test]
    fn scroll_changes_layout_anchor() {
        let mut g = grid();
        assert!(g.scroll_y(250.0));
        assert_eq!(g.layout().areas[0].range.start_row, 10);
        // Same value again: anchor does not move.
        assert!(!g.scroll_y(250.0));
    }

    #[test]
    fn scroll_is_noop_when_content_fits() {
        let options = GridOptions {
            rows: 5,
            cols: 2,
            ..GridOptions::default()
        };
        let mut g = Grid::new(&options, 840.0, 525.0).unwrap();
        assert!(!g.scroll_y(100.0));
        assert!(!g.scroll_x(100.0));
        assert!(!g.step_row(2));
        assert!(!g.step_col(1));
    }

    #[test]
    fn set_freeze_validates_reference() {
        let mut g = grid();
        g.set_freeze("D5").unwrap();
        assert_eq!(g.freeze(), Some((4, 3)));
        g.set_freeze("A1").unwrap();
        assert_eq!(g.freeze(), None);
        assert!(g.set_freeze("bogus").is_err());
        assert!(g.set_freeze("ZZ9999").is_err());
    }

    #[test]
    fn load_resets_scroll_and_selection() {
        let mut g = grid();
        g.scroll_y(500.0);
        g.selector_mut().add_range(3, 3, true);

        let data = GridData::default();
        g.load(&data).unwrap();
        assert_eq!(g.layout().areas[0].range.start_row, 0);
        assert!(g.selector().ranges.is_empty());
    }

    #[test]
    fn load_rejects_malformed_strings_before_mutating() {
        let mut g = grid();
        g.scroll_y(250.0);
        let mut data = GridData::default();
        data.freeze = Some("nope".to_string());
        assert!(g.load(&data).is_err());
        // Prior state stays observable.
        assert_eq!(g.scroll_bounds().y, 250.0);
    }

    #[test]
    fn load_applies_scroll_anchor() {
        let mut g = grid();
        let mut data = GridData::default();
        data.rows.len = 1000;
        data.scroll = Some("A21".to_string());
        g.load(&data).unwrap();
        assert_eq!(g.layout().areas[0].range.start_row, 20);
    }

    #[test]
    fn data_round_trip_preserves_overrides() {
        let mut g = grid();
        g.rows_mut().set(4, 60.0);
        g.cols_mut().set_hidden(1, true);
        g.set_freeze("B2").unwrap();

        let data = g.to_data();
        assert_eq!(data.rows.overrides[&4].height, Some(60.0));
        assert!(data.cols.overrides[&1].hide);
        assert_eq!(data.freeze.as_deref(), Some("B2"));

        let mut other = grid();
        other.load(&data).unwrap();
        assert_eq!(other.rows().get(4), 60.0);
        assert_eq!(other.cols().get(1), 0.0);
        assert_eq!(other.freeze(), Some((1, 1)));
    }

    #[test]
    fn scroll_bounds_reports_content_size() {
        let g = grid();
        let bounds = g.scroll_bounds();
        assert_eq!(bounds.width, 800.0);
        assert_eq!(bounds.height, 500.0);
        assert_eq!(bounds.content_width, 26.0 * 100.0);
        assert_eq!(bounds.content_height, 100.0 * 25.0);
    }

    #[test]
    fn resize_commits_into_axis() {
        let mut g = grid();
        let target = ResizeTarget {
            index: 2,
            size: 25.0,
            rect: Rect::new(0.0, 75.0, 40.0, 25.0),
        };
        {
            let resizer = g.resizer_mut(ResizerKind::Row).unwrap();
            resizer.hover(target);
            assert!(resizer.pointer_down());
            let _ = resizer.pointer_move(15.0);
        }
        assert!(g.commit_resize(ResizerKind::Row));
        assert_eq!(g.rows().get(2), 40.0);
    }

    #[test]
    fn resize_disabled_hides_resizers() {
        let options = GridOptions {
            resizable: false,
            ..GridOptions::default()
        };
        let mut g = Grid::new(&options, 840.0, 525.0).unwrap();
        assert!(g.resizer_mut(ResizerKind::Row).is_none());
    }

    #[test]
    fn scroll_clamps_to_content_end() {
        let mut g = grid();
        g.scroll_y(1_000_000.0);
        let bounds = g.scroll_bounds();
        // 2500 content - 500 viewport.
        assert_eq!(bounds.y, 2000.0);
    }
}
