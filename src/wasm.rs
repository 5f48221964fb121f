//! WASM-exported `GridView` struct - the entry point for the browser host.
//!
//! The host owns the canvas, the DOM elements, and all event listeners; it
//! feeds this wrapper normalized pixel/pointer values and draws from the
//! geometry it gets back. All geometry crosses the boundary as plain JSON
//! shapes via `serde-wasm-bindgen`.

use wasm_bindgen::prelude::*;

use crate::data::GridData;
use crate::grid::{Grid, GridOptions};
use crate::resizer::{ResizeTarget, ResizerKind};
use crate::viewport::{Placement, Rect};

fn parse_kind(kind: &str) -> Result<ResizerKind, JsValue> {
    match kind {
        "row" => Ok(ResizerKind::Row),
        "col" => Ok(ResizerKind::Col),
        other => Err(JsValue::from_str(&format!("unknown resizer kind: {other}"))),
    }
}

fn parse_placement(placement: &str) -> Result<Placement, JsValue> {
    match placement {
        "all" => Ok(Placement::All),
        "row-header" => Ok(Placement::RowHeader),
        "col-header" => Ok(Placement::ColHeader),
        "body" => Ok(Placement::Body),
        other => Err(JsValue::from_str(&format!("unknown placement: {other}"))),
    }
}

/// Spreadsheet-grid coordinate and selection engine.
#[wasm_bindgen]
pub struct GridView {
    grid: Grid,
}

#[wasm_bindgen]
impl GridView {
    /// Create a grid engine for a viewport of the given pixel size, with
    /// the stock defaults (100x26, 25px rows, 100px columns).
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        let grid = Grid::new(&GridOptions::default(), width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { grid })
    }

    /// Replace the grid state from a persisted-data object.
    pub fn load(&mut self, data: JsValue) -> Result<(), JsValue> {
        let data: GridData = serde_wasm_bindgen::from_value(data)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.grid
            .load(&data)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the grid state from a persisted-data JSON string.
    pub fn load_json(&mut self, json: &str) -> Result<(), JsValue> {
        let data = GridData::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.grid
            .load(&data)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Snapshot the grid state as a persisted-data object.
    pub fn data(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.grid.to_data())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.grid.resize_view(width, height);
    }

    /// Merged-cell ranges from the loaded data, for the host to draw.
    pub fn merges(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.grid.merges())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the freeze point from a cell reference ("D5"); "A1" clears it.
    pub fn set_freeze(&mut self, cell_ref: &str) -> Result<(), JsValue> {
        self.grid
            .set_freeze(cell_ref)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Scroll horizontally to an absolute pixel value; true means re-render.
    pub fn scroll_x(&mut self, value: f32) -> bool {
        self.grid.scroll_x(value)
    }

    /// Scroll vertically to an absolute pixel value; true means re-render.
    pub fn scroll_y(&mut self, value: f32) -> bool {
        self.grid.scroll_y(value)
    }

    /// Page the row anchor by `n` lines.
    pub fn step_row(&mut self, n: i32) -> bool {
        self.grid.step_row(n)
    }

    /// Page the column anchor by `n` lines.
    pub fn step_col(&mut self, n: i32) -> bool {
        self.grid.step_col(n)
    }

    /// Scrollbar-track geometry: `{x, y, width, height, contentWidth, contentHeight}`.
    pub fn scroll_bounds(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.grid.scroll_bounds())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The partitioned viewport: body areas, header areas, and the corner.
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.grid.layout())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Hit-test a pixel point: `{placement, row, col, rect}` or `null`.
    pub fn cell_at(&self, x: f32, y: f32) -> Result<JsValue, JsValue> {
        match self.grid.cell_at(x, y) {
            Some(hit) => serde_wasm_bindgen::to_value(&hit)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::NULL),
        }
    }

    /// Start a selection; `clear` is false for modifier-clicks.
    pub fn add_range(&mut self, row: u32, col: u32, clear: bool) {
        self.grid.selector_mut().add_range(row, col, clear);
    }

    /// Extend the active selection while dragging.
    pub fn union_range(&mut self, row: u32, col: u32) {
        self.grid.selector_mut().union_range(row, col);
    }

    pub fn clear_ranges(&mut self) {
        self.grid.selector_mut().clear_ranges();
    }

    /// Record where the active gesture started: "all", "row-header",
    /// "col-header", or "body".
    pub fn set_placement(&mut self, placement: &str) -> Result<(), JsValue> {
        let placement = parse_placement(placement)?;
        self.grid.selector_mut().set_placement(placement);
        Ok(())
    }

    /// Selection overlay rectangles for the current partition.
    pub fn selection_overlay(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.grid.selection_overlay())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Pointer is hovering a resize handle over the given header cell.
    #[allow(clippy::too_many_arguments)]
    pub fn resize_hover(
        &mut self,
        kind: &str,
        index: u32,
        size: f32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), JsValue> {
        let kind = parse_kind(kind)?;
        if let Some(resizer) = self.grid.resizer_mut(kind) {
            resizer.hover(ResizeTarget {
                index,
                size,
                rect: Rect::new(x, y, width, height),
            });
        }
        Ok(())
    }

    /// Pointer-down on a resize handle; true when a drag started.
    pub fn resize_down(&mut self, kind: &str) -> Result<bool, JsValue> {
        let kind = parse_kind(kind)?;
        Ok(self
            .grid
            .resizer_mut(kind)
            .is_some_and(|resizer| resizer.pointer_down()))
    }

    /// Pointer-move during a resize drag: the guide line's new position,
    /// or `null` when the move is rejected by the minimum size.
    pub fn resize_move(&mut self, kind: &str, movement: f32) -> Result<JsValue, JsValue> {
        let kind = parse_kind(kind)?;
        let edge = self
            .grid
            .resizer_mut(kind)
            .and_then(|resizer| resizer.pointer_move(movement));
        Ok(match edge {
            Some(edge) => JsValue::from_f64(f64::from(edge)),
            None => JsValue::NULL,
        })
    }

    /// Pointer-up: commit the resize; true means the axis changed.
    pub fn resize_up(&mut self, kind: &str) -> Result<bool, JsValue> {
        let kind = parse_kind(kind)?;
        Ok(self.grid.commit_resize(kind))
    }

    /// Abort a resize gesture with no commit. Idempotent.
    pub fn resize_cancel(&mut self, kind: &str) -> Result<(), JsValue> {
        let kind = parse_kind(kind)?;
        if let Some(resizer) = self.grid.resizer_mut(kind) {
            resizer.cancel();
        }
        Ok(())
    }
}
