//! Drag-resize state machine for row heights and column widths.
//!
//! The machine owns no listeners itself; the host feeds it pointer events
//! and applies the committed size. Intermediate moves only reposition the
//! guide line, never mutate the axis: the size commits once, on release.

use crate::viewport::Rect;

/// Which axis a resizer adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizerKind {
    Row,
    Col,
}

/// The line being resized: its index, current size, and on-screen cell rect
/// (the hit-test result the gesture started from).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeTarget {
    pub index: u32,
    pub size: f32,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Hovering(ResizeTarget),
    Dragging { target: ResizeTarget, delta: f32 },
}

/// A committed resize: apply via `SizeIndex::set(index, size)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeCommit {
    pub index: u32,
    pub size: f32,
}

/// State machine: `idle -> hovering -> dragging -> idle`.
#[derive(Debug, Clone)]
pub struct Resizer {
    kind: ResizerKind,
    min_size: f32,
    state: State,
}

impl Resizer {
    pub fn new(kind: ResizerKind, min_size: f32) -> Self {
        Self {
            kind,
            min_size,
            state: State::Idle,
        }
    }

    pub fn kind(&self) -> ResizerKind {
        self.kind
    }

    /// The target under the pointer, in any non-idle state.
    pub fn target(&self) -> Option<ResizeTarget> {
        match self.state {
            State::Idle => None,
            State::Hovering(target) | State::Dragging { target, .. } => Some(target),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// Pointer is over a resize handle. Ignored mid-drag.
    pub fn hover(&mut self, target: ResizeTarget) {
        if !self.is_dragging() {
            self.state = State::Hovering(target);
        }
    }

    /// Pointer left the handle without starting a drag.
    pub fn leave(&mut self) {
        if !self.is_dragging() {
            self.state = State::Idle;
        }
    }

    /// Pointer down on the handle starts the drag. Returns false when there
    /// is nothing hovered to grab.
    pub fn pointer_down(&mut self) -> bool {
        match self.state {
            State::Hovering(target) => {
                self.state = State::Dragging { target, delta: 0.0 };
                true
            }
            _ => false,
        }
    }

    /// Accumulate a pointer-move delta along the resize axis.
    ///
    /// Returns the guide line's new position (the trailing edge of the
    /// resized line, in screen pixels), or `None` when the move would take
    /// the size below the minimum — the guide stays at its last valid spot.
    pub fn pointer_move(&mut self, movement: f32) -> Option<f32> {
        let State::Dragging { target, delta } = &mut self.state else {
            return None;
        };
        *delta += movement;
        if target.size + *delta < self.min_size {
            return None;
        }
        let edge = match self.kind {
            ResizerKind::Row => target.rect.y + target.size,
            ResizerKind::Col => target.rect.x + target.size,
        };
        Some(edge + *delta)
    }

    /// Pointer released: commit if the accumulated delta grew the line.
    ///
    /// Always returns to idle; a non-positive delta commits nothing.
    pub fn pointer_up(&mut self) -> Option<ResizeCommit> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        match state {
            State::Dragging { target, delta } if delta > 0.0 => Some(ResizeCommit {
                index: target.index,
                size: target.size + delta,
            }),
            _ => None,
        }
    }

    /// Abort the gesture with no commit. Safe to call repeatedly: both the
    /// natural pointer-up and an external cancel path may fire.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    fn row_target() -> ResizeTarget {
        ResizeTarget {
            index: 4,
            size: 25.0,
            rect: Rect::new(0.0, 100.0, 40.0, 25.0),
        }
    }

    fn dragging_resizer() -> Resizer {
        let mut resizer = Resizer::new(ResizerKind::Row, 10.0);
        resizer.hover(row_target());
        assert!(resizer.pointer_down());
        resizer
    }

    #[test]
    fn pointer_down_requires_hover() {
        let mut resizer = Resizer::new(ResizerKind::Row, 10.0);
        assert!(!resizer.pointer_down());
        resizer.hover(row_target());
        assert!(resizer.pointer_down());
        assert!(resizer.is_dragging());
    }

    #[test]
    fn moves_accumulate_and_track_guide_line() {
        let mut resizer = dragging_resizer();
        assert_eq!(resizer.pointer_move(10.0), Some(135.0));
        assert_eq!(resizer.pointer_move(5.0), Some(140.0));
    }

    #[test]
    fn below_minimum_is_rejected_but_still_accumulated() {
        let mut resizer = dragging_resizer();
        // 25 - 20 = 5 < 10: guide stays put.
        assert_eq!(resizer.pointer_move(-20.0), None);
        // Moving back up restores a valid prospective size.
        assert_eq!(resizer.pointer_move(30.0), Some(135.0));
    }

    #[test]
    fn commit_happens_only_on_release() {
        let mut resizer = dragging_resizer();
        let _ = resizer.pointer_move(10.0);
        let _ = resizer.pointer_move(5.0);
        let commit = resizer.pointer_up().unwrap();
        assert_eq!(commit, ResizeCommit { index: 4, size: 40.0 });
        assert!(!resizer.is_dragging());
    }

    #[test]
    fn non_positive_delta_commits_nothing() {
        let mut resizer = dragging_resizer();
        let _ = resizer.pointer_move(-5.0);
        assert_eq!(resizer.pointer_up(), None);

        let mut resizer = dragging_resizer();
        assert_eq!(resizer.pointer_up(), None);
    }

    #[test]
    fn cancel_discards_the_gesture_idempotently() {
        let mut resizer = dragging_resizer();
        let _ = resizer.pointer_move(15.0);
        resizer.cancel();
        assert!(!resizer.is_dragging());
        assert_eq!(resizer.pointer_up(), None);
        resizer.cancel();
        assert_eq!(resizer.target(), None);
    }

    #[test]
    fn col_guide_tracks_x_axis() {
        let mut resizer = Resizer::new(ResizerKind::Col, 20.0);
        resizer.hover(ResizeTarget {
            index: 2,
            size: 100.0,
            rect: Rect::new(240.0, 0.0, 100.0, 25.0),
        });
        assert!(resizer.pointer_down());
        assert_eq!(resizer.pointer_move(12.0), Some(352.0));
    }

    #[test]
    fn hover_mid_drag_is_ignored() {
        let mut resizer = dragging_resizer();
        resizer.hover(ResizeTarget {
            index: 9,
            size: 25.0,
            rect: Rect::new(0.0, 300.0, 40.0, 25.0),
        });
        assert_eq!(resizer.target().map(|t| t.index), Some(4));
    }
}
