//! Inclusive rectangular blocks of cell addresses.

use serde::{Deserialize, Serialize};

use crate::cell_ref::{format_cell_range, parse_cell_range_strict};
use crate::error::Result;

/// An inclusive rectangular cell-address interval.
///
/// Always normalized: `start_row <= end_row` and `start_col <= end_col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl Range {
    /// Create a normalized range from two corners.
    pub fn new(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self {
            start_row: start_row.min(end_row),
            start_col: start_col.min(end_col),
            end_row: start_row.max(end_row),
            end_col: start_col.max(end_col),
        }
    }

    /// Create a degenerate 1x1 range at a single cell.
    pub fn cell(row: u32, col: u32) -> Self {
        Self::new(row, col, row, col)
    }

    /// Parse from an "A1" or "A1:B2" style string.
    pub fn parse(text: &str) -> Result<Self> {
        let (start_row, start_col, end_row, end_col) = parse_cell_range_strict(text)?;
        Ok(Self::new(start_row, start_col, end_row, end_col))
    }

    /// Minimal bounding range covering both `self` and `other`.
    pub fn union(&self, other: &Range) -> Range {
        Range {
            start_row: self.start_row.min(other.start_row),
            start_col: self.start_col.min(other.start_col),
            end_row: self.end_row.max(other.end_row),
            end_col: self.end_col.max(other.end_col),
        }
    }

    /// True iff the two rectangles share at least one cell.
    ///
    /// Closed intervals: touching endpoints count as overlap.
    pub fn intersects(&self, other: &Range) -> bool {
        self.start_row <= other.end_row
            && other.start_row <= self.end_row
            && self.start_col <= other.end_col
            && other.start_col <= self.end_col
    }

    /// The overlapping rectangle, if any.
    pub fn intersection(&self, other: &Range) -> Option<Range> {
        if !self.intersects(other) {
            return None;
        }
        Some(Range {
            start_row: self.start_row.max(other.start_row),
            start_col: self.start_col.max(other.start_col),
            end_row: self.end_row.min(other.end_row),
            end_col: self.end_col.min(other.end_col),
        })
    }

    /// True iff the cell at (row, col) lies inside this range.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.start_row && row <= self.end_row && col >= self.start_col && col <= self.end_col
    }

    /// Number of rows spanned.
    pub fn rows(&self) -> u32 {
        self.end_row - self.start_row + 1
    }

    /// Number of columns spanned.
    pub fn cols(&self) -> u32 {
        self.end_col - self.start_col + 1
    }

    /// Format as an "A1" or "A1:B2" style string.
    pub fn to_ref_string(&self) -> String {
        format_cell_range(self.start_row, self.start_col, self.end_row, self.end_col)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn construction_normalizes() {
        let r = Range::new(5, 8, 2, 3);
        assert_eq!(r, Range::new(2, 3, 5, 8));
        assert!(r.start_row <= r.end_row);
        assert!(r.start_col <= r.end_col);
    }

    #[test]
    fn union_is_commutative_and_associative() {
        let a = Range::new(0, 0, 2, 2);
        let b = Range::new(5, 1, 7, 4);
        let c = Range::new(3, 10, 3, 12);

        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
    }

    #[test]
    fn union_contains_both_operands() {
        let a = Range::new(1, 1, 3, 3);
        let b = Range::new(10, 0, 12, 2);
        let u = a.union(&b);
        for r in [a, b] {
            assert!(u.contains(r.start_row, r.start_col));
            assert!(u.contains(r.end_row, r.end_col));
        }
    }

    #[test]
    fn intersects_is_symmetric_and_reflexive() {
        let a = Range::new(0, 0, 4, 4);
        let b = Range::new(4, 4, 8, 8);
        let c = Range::new(5, 5, 6, 6);

        assert!(a.intersects(&a));
        assert_eq!(a.intersects(&b), b.intersects(&a));
        // Touching corner cells count: ranges are inclusive.
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn intersection_clips() {
        let a = Range::new(0, 0, 4, 4);
        let b = Range::new(2, 3, 9, 9);
        assert_eq!(a.intersection(&b), Some(Range::new(2, 3, 4, 4)));
        assert_eq!(a.intersection(&Range::cell(20, 20)), None);
    }

    #[test]
    fn parse_and_format() {
        let r = Range::parse("B2:D10").unwrap();
        assert_eq!(r, Range::new(1, 1, 9, 3));
        assert_eq!(r.to_ref_string(), "B2:D10");
        assert_eq!(Range::cell(0, 0).to_ref_string(), "A1");
        assert!(Range::parse("nope").is_err());
    }
}
