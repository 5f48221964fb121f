//! Smoke tests for the `GridView` wasm surface.
//!
//! Run with: wasm-pack test --node

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use gridview::GridView;
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn constructs_scrolls_and_lays_out() {
    let mut grid = GridView::new(840.0, 525.0).unwrap();
    assert!(grid.scroll_y(250.0));
    assert!(!grid.scroll_y(250.0));
    assert!(grid.layout().unwrap().is_object());
    assert!(grid.cell_at(100.0, 100.0).unwrap().is_object());
    assert!(grid.cell_at(-5.0, -5.0).unwrap().is_null());
}

#[wasm_bindgen_test]
fn load_json_round_trips_through_js_values() {
    let mut grid = GridView::new(840.0, 525.0).unwrap();
    grid.load_json(r#"{"rows":{"len":50},"cols":{"len":10},"rowHeight":25,"colWidth":100}"#)
        .unwrap();
    assert!(grid.load_json("not json").is_err());
    assert!(grid.data().unwrap().is_object());
}

#[wasm_bindgen_test]
fn selection_and_freeze_cross_the_boundary() {
    let mut grid = GridView::new(840.0, 525.0).unwrap();
    grid.set_freeze("D5").unwrap();
    assert!(grid.set_freeze("bogus").is_err());
    grid.add_range(1, 1, true);
    grid.union_range(3, 3);
    assert!(grid.selection_overlay().unwrap().is_object());
}
