//! Raw location-history document model and sample extraction.
//!
//! The source document is a loosely-structured export: only edit entries
//! carrying the `rawSignal.signal.position` path contribute a sample, so
//! every link in that path is modeled as an `Option` and absence is a
//! value rather than an error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::sample::PositionSample;

/// Divisor converting E7 fixed-point coordinates to degrees.
const E7_SCALE: f64 = 10_000_000.0;

/// A parsed location-history export.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDocument {
    /// The edit entries; an absent key reads as an empty history.
    #[serde(default)]
    timeline_edits: Vec<TimelineEdit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineEdit {
    raw_signal: Option<RawSignal>,
}

#[derive(Debug, Deserialize)]
struct RawSignal {
    signal: Option<Signal>,
}

#[derive(Debug, Deserialize)]
struct Signal {
    position: Option<Position>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Position {
    point: E7Point,
    timestamp: String,
    speed_meters_per_second: Option<f64>,
}

/// Coordinates scaled by 10^7, as stored in the export.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct E7Point {
    lat_e7: i32,
    lng_e7: i32,
}

impl TimelineDocument {
    /// Read and parse a location-history document from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is
    /// malformed (including a position entry without a timestamp).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::HistoryRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse a location-history document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// The number of edit entries in the document.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.timeline_edits.len()
    }

    /// Flatten the document into position samples, in entry order.
    ///
    /// Entries without the `rawSignal.signal.position` path are skipped
    /// silently. No deduplication or sorting is applied.
    #[must_use]
    pub fn extract_samples(&self) -> Vec<PositionSample> {
        self.timeline_edits
            .iter()
            .filter_map(|edit| edit.raw_signal.as_ref()?.signal.as_ref()?.position.as_ref())
            .map(|position| {
                PositionSample::new(
                    f64::from(position.point.lat_e7) / E7_SCALE,
                    f64::from(position.point.lng_e7) / E7_SCALE,
                    position.timestamp.clone(),
                    position.speed_meters_per_second.unwrap_or(0.0),
                )
            })
            .collect()
    }
}
