//! Sparse per-axis sizing model.
//!
//! An axis (rows or columns) can hold tens of thousands of lines, so sizes
//! are never materialized per line: a default size plus a sparse override
//! map is enough, and extents are computed as `count * default + deltas`
//! so a query never scans the whole axis.

use std::collections::HashMap;

/// A per-line deviation from the axis default: an explicit size, a hidden
/// flag, or both.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeOverride {
    /// Explicit size, `None` means the axis default applies.
    pub size: Option<f32>,
    /// Hidden lines have effective size 0 regardless of `size`.
    pub hidden: bool,
}

/// Sizes of every line along one axis: default size plus sparse overrides.
#[derive(Debug, Clone)]
pub struct SizeIndex {
    len: u32,
    default_size: f32,
    overrides: HashMap<u32, SizeOverride>,
}

impl SizeIndex {
    /// Create an axis of `len` lines, each `default_size` pixels.
    pub fn new(len: u32, default_size: f32) -> Self {
        Self {
            len,
            default_size,
            overrides: HashMap::new(),
        }
    }

    /// Total number of lines on the axis.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// True iff the axis has no lines.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The size a line has when no override applies.
    pub fn default_size(&self) -> f32 {
        self.default_size
    }

    /// Effective size of a line: 0 if hidden, else override or default.
    ///
    /// The index is assumed pre-validated by the caller; out-of-range
    /// indices fall back to the default size.
    pub fn get(&self, index: u32) -> f32 {
        match self.overrides.get(&index) {
            Some(ov) if ov.hidden => 0.0,
            Some(ov) => ov.size.unwrap_or(self.default_size),
            None => self.default_size,
        }
    }

    /// Set an explicit size for a line.
    ///
    /// Storing the default explicitly would be redundant, so a size equal to
    /// the default clears the override instead (keeping any hidden flag).
    pub fn set(&mut self, index: u32, size: f32) {
        if (size - self.default_size).abs() <= f32::EPSILON {
            if let Some(ov) = self.overrides.get_mut(&index) {
                ov.size = None;
                if !ov.hidden {
                    self.overrides.remove(&index);
                }
            }
        } else {
            self.overrides.entry(index).or_default().size = Some(size);
        }
    }

    /// Hide or unhide a line. Hidden lines contribute 0 to every extent.
    pub fn set_hidden(&mut self, index: u32, hidden: bool) {
        if hidden {
            self.overrides.entry(index).or_default().hidden = true;
        } else if let Some(ov) = self.overrides.get_mut(&index) {
            ov.hidden = false;
            if ov.size.is_none() {
                self.overrides.remove(&index);
            }
        }
    }

    /// True iff the line is hidden.
    pub fn is_hidden(&self, index: u32) -> bool {
        self.overrides.get(&index).is_some_and(|ov| ov.hidden)
    }

    /// Replace an override wholesale (used when loading persisted data).
    pub fn insert_override(&mut self, index: u32, ov: SizeOverride) {
        if ov == SizeOverride::default() {
            self.overrides.remove(&index);
        } else {
            self.overrides.insert(index, ov);
        }
    }

    /// Iterate the stored overrides in unspecified order.
    pub fn overrides(&self) -> impl Iterator<Item = (u32, &SizeOverride)> {
        self.overrides.iter().map(|(&i, ov)| (i, ov))
    }

    /// Total pixel size of lines in `[from, to)`.
    ///
    /// Computed as `count * default` plus the override deltas that fall in
    /// the interval, so the cost is bounded by the number of overrides, not
    /// the width of the interval.
    pub fn extent(&self, from: u32, to: u32) -> f32 {
        if to <= from {
            return 0.0;
        }
        let count = to - from;
        let mut size = count as f32 * self.default_size;
        for (&i, ov) in &self.overrides {
            if i >= from && i < to {
                let effective = if ov.hidden {
                    0.0
                } else {
                    ov.size.unwrap_or(self.default_size)
                };
                size += effective - self.default_size;
            }
        }
        size
    }

    /// Total pixel size of the whole axis.
    pub fn total(&self) -> f32 {
        self.extent(0, self.len)
    }
}
