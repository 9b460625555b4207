//! Core position sample type for tripmap.
//!
//! This module defines the flat record produced from the raw location
//! history, along with the timestamp parsing shared by the filtering,
//! indexing, and rendering stages.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Accepted layouts for timestamps without a UTC offset.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A single position observation from the location history.
///
/// Produced once by the extractor and never mutated afterward. The
/// timestamp is kept as the source string and parsed on demand, so a
/// bad stamp only fails the request that needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    /// Latitude in signed degrees.
    pub latitude: f64,

    /// Longitude in signed degrees.
    pub longitude: f64,

    /// ISO-8601 date-time string as recorded in the source document.
    pub timestamp: String,

    /// Speed in meters per second; 0 when the source omitted it.
    pub speed: f64,
}

impl PositionSample {
    /// Create a new sample.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, timestamp: impl Into<String>, speed: f64) -> Self {
        Self {
            latitude,
            longitude,
            timestamp: timestamp.into(),
            speed,
        }
    }

    /// Parse this sample's timestamp into a wall-clock date-time.
    ///
    /// Offset-bearing stamps keep their local wall-clock fields, so
    /// filtering and weekday coloring see the date as it was recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp is not a recognizable ISO-8601
    /// date-time.
    pub fn parse_timestamp(&self) -> Result<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    /// Format this sample's timestamp as `YYYY-MM-DD HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be parsed.
    pub fn formatted_timestamp(&self) -> Result<String> {
        Ok(self
            .parse_timestamp()?
            .format("%Y-%m-%d %H:%M:%S")
            .to_string())
    }

    /// Build a Google Maps link for this sample's exact coordinates.
    #[must_use]
    pub fn maps_link(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }

    /// Check if this sample recorded a positive speed.
    #[must_use]
    pub fn has_speed(&self) -> bool {
        self.speed > 0.0
    }
}

/// Parse an ISO-8601 timestamp, accepting RFC 3339 and naive forms.
///
/// # Errors
///
/// Returns [`Error::Timestamp`] when no accepted layout matches.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    NaiveDateTime::parse_from_str(value, NAIVE_FORMATS[0])
        .map_err(|source| Error::timestamp(value, source))
}
