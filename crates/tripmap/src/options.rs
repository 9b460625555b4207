//! Date option index for the filter form.
//!
//! Derives the distinct selectable year/month/day values present in the
//! full sample set. Used purely to populate the form controls; filtering
//! never consults it.

use std::collections::BTreeSet;

use chrono::Datelike;
use serde::Serialize;

use crate::error::Result;
use crate::sample::PositionSample;

/// Distinct date values present in a sample set, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateOptions {
    /// Distinct years.
    pub years: Vec<i32>,
    /// Distinct (year, month) pairs.
    pub months: Vec<(i32, u32)>,
    /// Distinct (year, month, day) triples.
    pub days: Vec<(i32, u32, u32)>,
}

impl DateOptions {
    /// Check if the index holds no dates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Index the distinct dates present in a sample set.
///
/// # Errors
///
/// Returns an error if any sample's timestamp cannot be parsed.
pub fn date_options(samples: &[PositionSample]) -> Result<DateOptions> {
    let mut years = BTreeSet::new();
    let mut months = BTreeSet::new();
    let mut days = BTreeSet::new();

    for sample in samples {
        let date = sample.parse_timestamp()?;
        years.insert(date.year());
        months.insert((date.year(), date.month()));
        days.insert((date.year(), date.month(), date.day()));
    }

    Ok(DateOptions {
        years: years.into_iter().collect(),
        months: months.into_iter().collect(),
        days: days.into_iter().collect(),
    })
}
