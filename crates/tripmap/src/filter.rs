//! Date filter criteria and sample filtering.

use chrono::{Datelike, NaiveDateTime};

use crate::error::{Error, Result};
use crate::sample::PositionSample;

/// Optional year/month/day criteria applied to a sample sequence.
///
/// Each component matches its absolute calendar field independently:
/// `day: Some(15)` matches the 15th of every month of every year, and
/// `month: Some(3)` matches March of every year. An unset component
/// places no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    /// Restrict to this year, if set.
    pub year: Option<i32>,
    /// Restrict to this month of the year (1-12), if set.
    pub month: Option<u32>,
    /// Restrict to this day of the month (1-31), if set.
    pub day: Option<u32>,
}

impl DateFilter {
    /// Create criteria from already-parsed components.
    #[must_use]
    pub fn new(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    /// Build criteria from raw form fields.
    ///
    /// A missing or empty field means "no constraint on that component".
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty field is not an integer.
    pub fn from_form(
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            year: parse_field("year", year)?,
            month: parse_field("month", month)?,
            day: parse_field("day", day)?,
        })
    }

    /// Check if no component is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    /// Check if a date matches every set component.
    #[must_use]
    pub fn matches(&self, date: &NaiveDateTime) -> bool {
        self.year.map_or(true, |year| date.year() == year)
            && self.month.map_or(true, |month| date.month() == month)
            && self.day.map_or(true, |day| date.day() == day)
    }
}

/// Parse one optional integer form field.
fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<T>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| Error::invalid_filter_field(field, raw)),
    }
}

/// Keep the samples whose timestamp matches the criteria.
///
/// With empty criteria the input is copied unchanged without parsing any
/// timestamps, matching the behavior of a request with no filters.
///
/// # Errors
///
/// Returns an error if any sample's timestamp cannot be parsed while a
/// component is set.
pub fn filter_samples(
    samples: &[PositionSample],
    criteria: &DateFilter,
) -> Result<Vec<PositionSample>> {
    if criteria.is_empty() {
        return Ok(samples.to_vec());
    }

    let mut matched = Vec::new();
    for sample in samples {
        let date = sample.parse_timestamp()?;
        if criteria.matches(&date) {
            matched.push(sample.clone());
        }
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp: &str) -> PositionSample {
        PositionSample::new(37.7749, -122.4194, timestamp, 0.0)
    }

    #[test]
    fn test_from_form_empty_fields_are_unset() {
        let criteria = DateFilter::from_form(Some(""), None, Some("")).unwrap();
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_from_form_parses_integers() {
        let criteria = DateFilter::from_form(Some("2022"), Some("7"), Some("10")).unwrap();
        assert_eq!(criteria.year, Some(2022));
        assert_eq!(criteria.month, Some(7));
        assert_eq!(criteria.day, Some(10));
    }

    #[test]
    fn test_from_form_rejects_non_integer() {
        let err = DateFilter::from_form(Some("twenty"), None, None).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidFilterField { field: "year", .. }
        ));
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let samples = vec![sample("2021-03-05T08:00:00"), sample("not even a date")];
        let filtered = filter_samples(&samples, &DateFilter::default()).unwrap();
        assert_eq!(filtered, samples);
    }

    #[test]
    fn test_filter_by_year() {
        let samples = vec![
            sample("2021-03-05T08:00:00"),
            sample("2022-03-05T08:00:00"),
            sample("2022-07-10T08:00:00"),
        ];
        let criteria = DateFilter::new(Some(2022), None, None);
        let filtered = filter_samples(&samples, &criteria).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].timestamp, "2022-03-05T08:00:00");
        assert_eq!(filtered[1].timestamp, "2022-07-10T08:00:00");
    }

    #[test]
    fn test_day_matches_day_of_month_across_months() {
        let samples = vec![
            sample("2021-03-05T08:00:00"),
            sample("2022-07-05T08:00:00"),
            sample("2022-07-10T08:00:00"),
        ];
        let criteria = DateFilter::new(None, None, Some(5));
        let filtered = filter_samples(&samples, &criteria).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].timestamp, "2021-03-05T08:00:00");
        assert_eq!(filtered[1].timestamp, "2022-07-05T08:00:00");
    }

    #[test]
    fn test_combined_criteria_must_all_match() {
        let samples = vec![
            sample("2021-03-05T08:00:00"),
            sample("2022-03-05T08:00:00"),
        ];
        let criteria = DateFilter::new(Some(2022), Some(3), Some(5));
        let filtered = filter_samples(&samples, &criteria).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].timestamp, "2022-03-05T08:00:00");
    }

    #[test]
    fn test_no_match_yields_empty_vec() {
        let samples = vec![sample("2021-03-05T08:00:00")];
        let criteria = DateFilter::new(Some(1999), None, None);
        let filtered = filter_samples(&samples, &criteria).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_unparseable_timestamp_propagates() {
        let samples = vec![sample("garbage")];
        let criteria = DateFilter::new(Some(2022), None, None);
        let err = filter_samples(&samples, &criteria).unwrap_err();
        assert!(matches!(err, Error::Timestamp { .. }));
    }
}
