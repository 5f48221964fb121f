//! Persisted grid-state shape.
//!
//! Mirrors the JSON the surrounding application stores: axis lengths plus
//! sparse overrides, default sizes, and freeze/scroll anchors as A1-style
//! strings. Address strings are validated when the data is applied to a
//! grid, never downstream in the geometry code.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::axis::{SizeIndex, SizeOverride};
use crate::cell_ref::parse_cell_ref_strict;
use crate::error::Result;
use crate::range::Range;

/// Per-row deviation from the default height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RowOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<u32>,
}

/// Per-column deviation from the default width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<u32>,
}

/// Row axis: total count plus sparse overrides keyed by row index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowsData {
    pub len: u32,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub overrides: HashMap<u32, RowOverride>,
}

/// Column axis: total count plus sparse overrides keyed by column index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColsData {
    pub len: u32,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub overrides: HashMap<u32, ColOverride>,
}

/// The serialized grid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridData {
    pub rows: RowsData,
    pub cols: ColsData,
    pub row_height: f32,
    pub col_width: f32,
    /// Freeze point as a cell reference ("D5"); "A1" or absent means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeze: Option<String>,
    /// Scroll anchor as a cell reference ("A21").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll: Option<String>,
    /// Merged-cell ranges as "A1:B2" strings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub merges: Vec<String>,
}

impl Default for GridData {
    fn default() -> Self {
        Self {
            rows: RowsData {
                len: 100,
                overrides: HashMap::new(),
            },
            cols: ColsData {
                len: 26,
                overrides: HashMap::new(),
            },
            row_height: 25.0,
            col_width: 100.0,
            freeze: None,
            scroll: None,
            merges: Vec::new(),
        }
    }
}

impl GridData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build the row-axis size index from the persisted shape.
    pub fn row_sizes(&self) -> SizeIndex {
        let mut sizes = SizeIndex::new(self.rows.len, self.row_height);
        for (&index, ov) in &self.rows.overrides {
            sizes.insert_override(
                index,
                SizeOverride {
                    size: ov.height,
                    hidden: ov.hide,
                },
            );
        }
        sizes
    }

    /// Build the column-axis size index from the persisted shape.
    pub fn col_sizes(&self) -> SizeIndex {
        let mut sizes = SizeIndex::new(self.cols.len, self.col_width);
        for (&index, ov) in &self.cols.overrides {
            sizes.insert_override(
                index,
                SizeOverride {
                    size: ov.width,
                    hidden: ov.hide,
                },
            );
        }
        sizes
    }

    /// The freeze point as frozen (row, col) counts; `None` when absent or
    /// at the origin. Fails fast on a malformed reference.
    pub fn freeze_point(&self) -> Result<Option<(u32, u32)>> {
        let Some(text) = self.freeze.as_deref() else {
            return Ok(None);
        };
        let (col, row) = parse_cell_ref_strict(text)?;
        if row == 0 && col == 0 {
            return Ok(None);
        }
        Ok(Some((row, col)))
    }

    /// The scroll anchor as (row, col). Fails fast on a malformed reference.
    pub fn scroll_point(&self) -> Result<Option<(u32, u32)>> {
        let Some(text) = self.scroll.as_deref() else {
            return Ok(None);
        };
        let (col, row) = parse_cell_ref_strict(text)?;
        Ok(Some((row, col)))
    }

    /// Parse and validate the merge range strings.
    pub fn merge_ranges(&self) -> Result<Vec<Range>> {
        self.merges.iter().map(|text| Range::parse(text)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_shape_matches_widget_defaults() {
        let data = GridData::default();
        assert_eq!(data.rows.len, 100);
        assert_eq!(data.cols.len, 26);
        assert_eq!(data.row_height, 25.0);
        assert_eq!(data.col_width, 100.0);
    }

    #[test]
    fn json_round_trip() {
        let mut data = GridData::default();
        data.rows.overrides.insert(
            4,
            RowOverride {
                height: Some(60.0),
                hide: false,
                style: None,
            },
        );
        data.cols.overrides.insert(
            0,
            ColOverride {
                width: None,
                hide: true,
                style: Some(2),
            },
        );
        data.freeze = Some("D5".to_string());
        data.scroll = Some("A21".to_string());
        data.merges = vec!["B2:C3".to_string()];

        let json = data.to_json().unwrap();
        let back = GridData::from_json(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn sparse_fields_deserialize_from_minimal_json() {
        let data = GridData::from_json(
            r#"{"rows":{"len":10},"cols":{"len":5},"rowHeight":25,"colWidth":100}"#,
        )
        .unwrap();
        assert!(data.rows.overrides.is_empty());
        assert_eq!(data.freeze, None);
        assert!(data.merges.is_empty());
    }

    #[test]
    fn size_indexes_apply_overrides() {
        let mut data = GridData::default();
        data.rows.overrides.insert(
            2,
            RowOverride {
                height: Some(50.0),
                hide: false,
                style: None,
            },
        );
        data.rows.overrides.insert(
            3,
            RowOverride {
                height: None,
                hide: true,
                style: None,
            },
        );
        let rows = data.row_sizes();
        assert_eq!(rows.get(2), 50.0);
        assert_eq!(rows.get(3), 0.0);
        assert_eq!(rows.get(4), 25.0);
    }

    #[test]
    fn freeze_point_parses_and_validates() {
        let mut data = GridData::default();
        assert_eq!(data.freeze_point().unwrap(), None);

        data.freeze = Some("D5".to_string());
        assert_eq!(data.freeze_point().unwrap(), Some((4, 3)));

        data.freeze = Some("A1".to_string());
        assert_eq!(data.freeze_point().unwrap(), None);

        data.freeze = Some("5D".to_string());
        assert!(data.freeze_point().is_err());
    }

    #[test]
    fn scroll_point_and_merges_validate() {
        let mut data = GridData::default();
        data.scroll = Some("A21".to_string());
        assert_eq!(data.scroll_point().unwrap(), Some((20, 0)));

        data.merges = vec!["B2:C3".to_string(), "bogus".to_string()];
        assert!(data.merge_ranges().is_err());

        data.merges = vec!["B2:C3".to_string()];
        assert_eq!(data.merge_ranges().unwrap(), vec![Range::new(1, 1, 2, 2)]);
    }
}
