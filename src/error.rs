//! Structured error types for gridview.
//!
//! Everything user-facing fails fast at construction/parse time; geometry
//! queries report no-ops through `changed` booleans instead of errors.

/// All errors that can occur while configuring or loading a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Invalid cell reference or range string ("A1", "A1:B2").
    #[error("Invalid cell reference: {0}")]
    CellRef(String),

    /// Invalid grid configuration (zero-length axis, bad freeze point, ...).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON (de)serialization of the persisted grid state.
    #[error("Grid data: {0}")]
    Data(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
