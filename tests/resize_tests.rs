//! Drag-resize gesture tests: threshold rejection, commit-on-release only,
//! and idempotent cancellation.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::{Grid, GridOptions, Rect, ResizeTarget, ResizerKind};

fn grid() -> Grid {
    Grid::new(&GridOptions::default(), 840.0, 525.0).unwrap()
}

fn start_row_drag(g: &mut Grid, index: u32) {
    let target = ResizeTarget {
        index,
        size: 25.0,
        rect: Rect::new(0.0, 25.0 + index as f32 * 25.0, 40.0, 25.0),
    };
    let resizer = g.resizer_mut(ResizerKind::Row).unwrap();
    resizer.hover(target);
    assert!(resizer.pointer_down());
}

#[test]
fn test_commit_only_on_pointer_up() {
    let mut g = grid();
    start_row_drag(&mut g, 3);
    let _ = g.resizer_mut(ResizerKind::Row).unwrap().pointer_move(10.0);
    let _ = g.resizer_mut(ResizerKind::Row).unwrap().pointer_move(5.0);
    // Still the default before release.
    assert_eq!(g.rows().get(3), 25.0);
    assert!(g.commit_resize(ResizerKind::Row));
    assert_eq!(g.rows().get(3), 40.0);
}

#[test]
fn test_below_minimum_never_commits() {
    let mut g = grid();
    start_row_drag(&mut g, 3);
    // min_row_height is 10: 25 - 20 = 5 stays rejected.
    assert_eq!(
        g.resizer_mut(ResizerKind::Row).unwrap().pointer_move(-20.0),
        None
    );
    assert!(!g.commit_resize(ResizerKind::Row));
    assert_eq!(g.rows().get(3), 25.0);
}

#[test]
fn test_shrink_within_bounds_commits_nothing() {
    // A negative delta above the minimum moves the guide but never commits:
    // only growth is applied on release.
    let mut g = grid();
    start_row_drag(&mut g, 3);
    assert!(g
        .resizer_mut(ResizerKind::Row)
        .unwrap()
        .pointer_move(-5.0)
        .is_some());
    assert!(!g.commit_resize(ResizerKind::Row));
    assert_eq!(g.rows().get(3), 25.0);
}

#[test]
fn test_guide_line_tracks_accumulated_delta() {
    let mut g = grid();
    start_row_drag(&mut g, 0);
    // Row 0 bottom edge sits at 25 (header) + 25 (row) = 50.
    assert_eq!(
        g.resizer_mut(ResizerKind::Row).unwrap().pointer_move(8.0),
        Some(58.0)
    );
    assert_eq!(
        g.resizer_mut(ResizerKind::Row).unwrap().pointer_move(2.0),
        Some(60.0)
    );
}

#[test]
fn test_cancel_discards_and_is_idempotent() {
    let mut g = grid();
    start_row_drag(&mut g, 3);
    let _ = g.resizer_mut(ResizerKind::Row).unwrap().pointer_move(30.0);
    g.resizer_mut(ResizerKind::Row).unwrap().cancel();
    assert!(!g.commit_resize(ResizerKind::Row));
    assert_eq!(g.rows().get(3), 25.0);
    // A late pointer-up after the cancel path already ran is a no-op.
    g.resizer_mut(ResizerKind::Row).unwrap().cancel();
    assert!(!g.commit_resize(ResizerKind::Row));
}

#[test]
fn test_col_resize_commits_width() {
    let mut g = grid();
    {
        let resizer = g.resizer_mut(ResizerKind::Col).unwrap();
        resizer.hover(ResizeTarget {
            index: 1,
            size: 100.0,
            rect: Rect::new(140.0, 0.0, 100.0, 25.0),
        });
        assert!(resizer.pointer_down());
        let _ = resizer.pointer_move(25.0);
    }
    assert!(g.commit_resize(ResizerKind::Col));
    assert_eq!(g.cols().get(1), 125.0);
    // The committed width feeds straight back into layout.
    assert_eq!(g.cell_at(245.0, 30.0).unwrap().col, 1);
}

#[test]
fn test_resize_then_scroll_uses_new_sizes() {
    let options = GridOptions {
        rows: 1000,
        ..GridOptions::default()
    };
    let mut g = Grid::new(&options, 840.0, 525.0).unwrap();
    start_row_drag(&mut g, 0);
    let _ = g.resizer_mut(ResizerKind::Row).unwrap().pointer_move(75.0);
    assert!(g.commit_resize(ResizerKind::Row));
    assert_eq!(g.rows().get(0), 100.0);

    // Row 0 now costs 100px to cross.
    g.scroll_y(100.0);
    assert_eq!(g.layout().areas[0].range.start_row, 1);
}
