//! JSON rendering of a cycle sequence.

use crate::error::{Error, Result};
use crate::model::CycleSequence;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a cycle sequence to JSON.
pub fn to_json(cycles: &CycleSequence, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(cycles),
        JsonFormat::Compact => serde_json::to_string(cycles),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
