use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Committed geometry of one series at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    /// SVG-style path string of everything committed so far.
    pub path: String,
    pub marker_count: usize,
    pub label_count: usize,
}

/// Deterministic capture of a chart's drawn state, in series insertion order.
///
/// Intended for differential tests: two draws from identical inputs must
/// produce byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub series: IndexMap<String, SeriesSnapshot>,
    pub hover_region_count: usize,
}

impl ChartSnapshot {
    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("snapshot serialization failed: {err}")))
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("snapshot parse failed: {err}")))
    }
}
