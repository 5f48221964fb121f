//! Parsing and formatting of A1-style cell references and ranges.
//!
//! The persisted grid state stores its `freeze`/`scroll` anchors as single
//! cell references ("D5") and merges as range strings ("A1:B2"). Malformed
//! strings are rejected here, before any geometry is computed from them.

use crate::error::{GridError, Result};

/// Parse a cell reference like "A1" into (col, row) where col and row are 0-indexed.
///
/// Letters must precede digits; `$` markers are skipped. Returns `None` for
/// malformed input.
pub fn parse_cell_ref(cell_ref: &str) -> Option<(u32, u32)> {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for ch in cell_ref.trim().chars() {
        if ch == '$' {
            continue;
        }
        if ch.is_ascii_alphabetic() {
            if saw_row {
                // Digits already started; "A1B" is not a cell reference.
                return None;
            }
            let upper = ch.to_ascii_uppercase();
            col = col.checked_mul(26)?.checked_add(upper as u32 - 'A' as u32 + 1)?;
            saw_col = true;
        } else if ch.is_ascii_digit() {
            row = row.checked_mul(10)?.checked_add(ch as u32 - '0' as u32)?;
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row || row == 0 {
        return None;
    }

    Some((col.saturating_sub(1), row.saturating_sub(1)))
}

/// Parse a cell reference, failing with [`GridError::CellRef`] on malformed input.
pub fn parse_cell_ref_strict(cell_ref: &str) -> Result<(u32, u32)> {
    parse_cell_ref(cell_ref).ok_or_else(|| GridError::CellRef(cell_ref.to_string()))
}

/// Format a 0-indexed (col, row) pair as an A1-style reference.
pub fn format_cell_ref(col: u32, row: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from_u32('A' as u32 + rem).unwrap_or('A'));
        n = (n - 1) / 26;
    }
    letters.reverse();
    let col_part: String = letters.into_iter().collect();
    format!("{col_part}{}", row + 1)
}

/// Parse a cell range like "A1:B10" or "A1" into (start_row, start_col, end_row, end_col).
pub fn parse_cell_range(range: &str) -> Option<(u32, u32, u32, u32)> {
    if let Some((start, end)) = range.split_once(':') {
        let (start_col, start_row) = parse_cell_ref(start)?;
        let (end_col, end_row) = parse_cell_ref(end)?;
        Some((start_row, start_col, end_row, end_col))
    } else {
        let (start_col, start_row) = parse_cell_ref(range)?;
        Some((start_row, start_col, start_row, start_col))
    }
}

/// Parse a cell range, failing with [`GridError::CellRef`] on malformed input.
pub fn parse_cell_range_strict(range: &str) -> Result<(u32, u32, u32, u32)> {
    parse_cell_range(range).ok_or_else(|| GridError::CellRef(range.to_string()))
}

/// Format a (start_row, start_col, end_row, end_col) tuple as "A1:B2".
///
/// A degenerate single-cell range formats as a plain reference ("A1").
pub fn format_cell_range(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> String {
    if start_row == end_row && start_col == end_col {
        format_cell_ref(start_col, start_row)
    } else {
        format!(
            "{}:{}",
            format_cell_ref(start_col, start_row),
            format_cell_ref(end_col, end_row)
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("A1", (0, 0); "first cell")]
    #[test_case("D5", (3, 4); "freeze sample")]
    #[test_case("Z10", (25, 9); "single letter max")]
    #[test_case("AA1", (26, 0); "double letter")]
    #[test_case("$B$2", (1, 1); "absolute markers")]
    fn parses_valid_refs(input: &str, expected: (u32, u32)) {
        assert_eq!(parse_cell_ref(input), Some(expected));
    }

    #[test_case(""; "empty")]
    #[test_case("A"; "missing row")]
    #[test_case("5"; "missing col")]
    #[test_case("A0"; "row zero")]
    #[test_case("1A"; "digits first")]
    #[test_case("A1B"; "interleaved")]
    #[test_case("A-1"; "bad char")]
    fn rejects_malformed_refs(input: &str) {
        assert_eq!(parse_cell_ref(input), None);
        assert!(parse_cell_ref_strict(input).is_err());
    }

    #[test]
    fn format_round_trip() {
        for (col, row) in [(0, 0), (3, 4), (25, 9), (26, 0), (701, 42), (702, 0)] {
            let text = format_cell_ref(col, row);
            assert_eq!(parse_cell_ref(&text), Some((col, row)), "{text}");
        }
    }

    #[test]
    fn parses_ranges() {
        assert_eq!(parse_cell_range("A1:B10"), Some((0, 0, 9, 1)));
        assert_eq!(parse_cell_range("C3"), Some((2, 2, 2, 2)));
        assert_eq!(parse_cell_range("A1:"), None);
    }

    #[test]
    fn formats_ranges() {
        assert_eq!(format_cell_range(0, 0, 9, 1), "A1:B10");
        assert_eq!(format_cell_range(2, 2, 2, 2), "C3");
    }
}
