//! gridview - virtualized spreadsheet-grid engine for the web
//!
//! The coordinate and selection core of a canvas spreadsheet widget:
//! - Sparse per-axis sizing with hidden lines, no per-line allocation
//! - Incremental pixel-to-anchor scrolling for 100k+ line axes
//! - Freeze-aware viewport partitioning into up to four areas
//! - Rectangular multi-range selection with header projections
//! - Drag-resize state machine with minimum-size enforcement
//!
//! Pixel drawing stays with the host: the engine hands out logical ranges
//! and screen rectangles, the host paints them.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const grid = new GridView(canvas.width, canvas.height);
//! grid.load(data);
//! if (grid.scroll_y(wheelValue)) draw(grid.layout());
//! ```

pub mod axis;
pub mod cell_ref;
pub mod data;
pub mod error;
pub mod grid;
pub mod range;
pub mod resizer;
pub mod scroll;
pub mod selector;
pub mod viewport;

// WASM boundary
pub mod wasm;

use wasm_bindgen::prelude::*;

pub use axis::{SizeIndex, SizeOverride};
pub use data::GridData;
pub use error::{GridError, Result};
pub use grid::{Grid, GridOptions, ScrollBounds};
pub use range::Range;
pub use resizer::{ResizeCommit, ResizeTarget, Resizer, ResizerKind};
pub use scroll::{ScrollAxis, ScrollResult};
pub use selector::{OverlayRect, SelectionOverlay, Selector};
pub use viewport::{Area, CellHit, Placement, Rect, ViewLayout, Viewport};
pub use wasm::GridView;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
