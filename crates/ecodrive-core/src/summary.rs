//! Summary Aggregator
//!
//! Read-only statistics over windows of driving records: totals, means,
//! window-over-window deltas, and chartable trend series. Aggregations
//! over an empty window fail with [`MetricsError::EmptyWindow`] rather
//! than returning a sentinel; the one exception is [`DrivingDigest`],
//! which keeps the source app's zero-on-empty convention because its
//! output feeds a free-text prompt, not arithmetic.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::MetricsError;
use crate::provider::{DrivingRecord, EmissionsRecord};

/// Numeric field of a [`DrivingRecord`] selectable for aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Distance driven (km)
    Distance,
    /// Fuel consumption (L/100km)
    FuelConsumption,
    /// Eco score in [0, 100]
    EcoScore,
    /// Harsh-braking incident count
    HarshBraking,
    /// Rapid-acceleration incident count
    RapidAcceleration,
}

impl Metric {
    /// Extract this metric's value from a record
    pub fn value(&self, record: &DrivingRecord) -> f64 {
        match self {
            Metric::Distance => record.distance_km,
            Metric::FuelConsumption => record.fuel_consumption_l_per_100km,
            Metric::EcoScore => record.eco_score,
            Metric::HarshBraking => f64::from(record.harsh_braking_count),
            Metric::RapidAcceleration => f64::from(record.rapid_acceleration_count),
        }
    }
}

/// Sum of a metric over a window. An empty window sums to zero.
pub fn total(records: &[DrivingRecord], metric: Metric) -> f64 {
    records.iter().map(|r| metric.value(r)).sum()
}

/// Arithmetic mean of a metric over a window.
///
/// Fails with [`MetricsError::EmptyWindow`] on an empty window.
pub fn average(records: &[DrivingRecord], metric: Metric) -> Result<f64, MetricsError> {
    if records.is_empty() {
        return Err(MetricsError::EmptyWindow);
    }
    Ok(total(records, metric) / records.len() as f64)
}

/// `total(window_a) - total(window_b)`, for comparisons between two
/// disjoint windows
pub fn delta(window_a: &[DrivingRecord], window_b: &[DrivingRecord], metric: Metric) -> f64 {
    total(window_a, metric) - total(window_b, metric)
}

/// Ordered `(date, value)` series for charting.
///
/// Lazy and restartable: iterating twice over the same slice yields the
/// same sequence.
pub fn trend_points(
    records: &[DrivingRecord],
    metric: Metric,
) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
    records.iter().map(move |r| (r.date, metric.value(r)))
}

/// Subslice of a date-ascending window covering the trailing `days` days
/// up to and including `as_of`
pub fn last_days(records: &[DrivingRecord], days: i64, as_of: NaiveDate) -> &[DrivingRecord] {
    let from = as_of - Duration::days(days - 1);
    date_range(records, from, as_of)
}

/// Subslice of a date-ascending window with dates in `[from, to]`
pub fn date_range(records: &[DrivingRecord], from: NaiveDate, to: NaiveDate) -> &[DrivingRecord] {
    let start = records.partition_point(|r| r.date < from);
    let end = records.partition_point(|r| r.date <= to);
    &records[start..end]
}

/// Trailing-week total minus the week before it, the overview page's
/// week-over-week comparison
pub fn week_over_week(records: &[DrivingRecord], metric: Metric, as_of: NaiveDate) -> f64 {
    let this_week = last_days(records, 7, as_of);
    let previous_week = date_range(records, as_of - Duration::days(13), as_of - Duration::days(7));
    delta(this_week, previous_week, metric)
}

/// Combined harsh-braking and rapid-acceleration count over a window
pub fn harsh_event_total(records: &[DrivingRecord]) -> f64 {
    total(records, Metric::HarshBraking) + total(records, Metric::RapidAcceleration)
}

/// Numeric digest of a driving window, the summary sent to the tip
/// generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrivingDigest {
    /// Mean eco score, rounded to 2 decimals; 0.0 over an empty window
    pub average_eco_score: f64,
    /// Mean fuel consumption (L/100km), rounded to 2 decimals; 0.0 over
    /// an empty window
    pub average_fuel_consumption: f64,
    /// Total harsh-braking incidents
    pub total_harsh_braking_events: u32,
    /// Total rapid-acceleration incidents
    pub total_rapid_acceleration_events: u32,
}

impl DrivingDigest {
    /// Summarize a window of records.
    ///
    /// Empty windows produce zero averages rather than failing; the
    /// digest is prompt input, not arithmetic input.
    pub fn from_records(records: &[DrivingRecord]) -> Self {
        let round2 = |v: f64| (v * 100.0).round() / 100.0;
        Self {
            average_eco_score: round2(average(records, Metric::EcoScore).unwrap_or(0.0)),
            average_fuel_consumption: round2(
                average(records, Metric::FuelConsumption).unwrap_or(0.0),
            ),
            total_harsh_braking_events: total(records, Metric::HarshBraking) as u32,
            total_rapid_acceleration_events: total(records, Metric::RapidAcceleration) as u32,
        }
    }
}

/// Sum of monthly emissions (kg) over a window
pub fn emissions_total(records: &[EmissionsRecord]) -> f64 {
    records.iter().map(|r| r.emissions_kg).sum()
}

/// Mean monthly emissions (kg); fails with [`MetricsError::EmptyWindow`]
/// on an empty window
pub fn average_monthly_emissions(records: &[EmissionsRecord]) -> Result<f64, MetricsError> {
    if records.is_empty() {
        return Err(MetricsError::EmptyWindow);
    }
    Ok(emissions_total(records) / records.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn record(days_back: i64, distance: f64, consumption: f64, score: f64) -> DrivingRecord {
        DrivingRecord {
            date: base_date() - Duration::days(days_back),
            distance_km: distance,
            fuel_consumption_l_per_100km: consumption,
            eco_score: score,
            harsh_braking_count: 1,
            rapid_acceleration_count: 2,
        }
    }

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    fn fixture() -> Vec<DrivingRecord> {
        // 14 days ascending, oldest first
        (0..14)
            .rev()
            .map(|back| record(back, 20.0 + back as f64, 6.0, 80.0))
            .collect()
    }

    #[test]
    fn test_average_and_total_consistency() {
        let records = fixture();
        let avg = average(&records, Metric::Distance).unwrap();
        let sum = total(&records, Metric::Distance);
        assert!((avg * records.len() as f64 - sum).abs() < 1e-9);
    }

    #[test]
    fn test_average_of_empty_window_fails() {
        let empty: Vec<DrivingRecord> = Vec::new();
        assert!(matches!(
            average(&empty, Metric::EcoScore),
            Err(MetricsError::EmptyWindow)
        ));
        assert!(matches!(
            average_monthly_emissions(&[]),
            Err(MetricsError::EmptyWindow)
        ));
    }

    #[test]
    fn test_total_of_empty_window_is_zero() {
        assert_eq!(total(&[], Metric::Distance), 0.0);
    }

    #[test]
    fn test_trend_points_are_ordered_and_restartable() {
        let records = fixture();
        let first: Vec<_> = trend_points(&records, Metric::EcoScore).collect();
        let second: Vec<_> = trend_points(&records, Metric::EcoScore).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), records.len());
        for pair in first.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn test_last_days_and_date_range_windows() {
        let records = fixture();
        let week = last_days(&records, 7, base_date());
        assert_eq!(week.len(), 7);
        assert_eq!(week.last().unwrap().date, base_date());

        let mid = date_range(
            &records,
            base_date() - Duration::days(10),
            base_date() - Duration::days(5),
        );
        assert_eq!(mid.len(), 6);
    }

    #[test]
    fn test_week_over_week_delta() {
        let records = fixture();
        // Distance per record is 20 + days_back, so the trailing week
        // (back 0..=6) totals 161 and the week before (back 7..=13) 210.
        let wow = week_over_week(&records, Metric::Distance, base_date());
        assert!((wow - (161.0 - 210.0)).abs() < 1e-9);
    }

    #[test]
    fn test_harsh_event_total_combines_counts() {
        let records = fixture();
        // 1 braking + 2 acceleration per record
        assert_eq!(harsh_event_total(&records), 3.0 * records.len() as f64);
    }

    #[test]
    fn test_digest_matches_manual_summary() {
        let records = vec![
            record(1, 30.0, 6.5, 82.0),
            record(0, 40.0, 5.5, 78.0),
        ];
        let digest = DrivingDigest::from_records(&records);
        assert_eq!(digest.average_eco_score, 80.0);
        assert_eq!(digest.average_fuel_consumption, 6.0);
        assert_eq!(digest.total_harsh_braking_events, 2);
        assert_eq!(digest.total_rapid_acceleration_events, 4);
    }

    #[test]
    fn test_digest_of_empty_window_is_zeroed() {
        let digest = DrivingDigest::from_records(&[]);
        assert_eq!(digest.average_eco_score, 0.0);
        assert_eq!(digest.average_fuel_consumption, 0.0);
        assert_eq!(digest.total_harsh_braking_events, 0);
        assert_eq!(digest.total_rapid_acceleration_events, 0);
    }

    #[test]
    fn test_emissions_totals() {
        let months: Vec<EmissionsRecord> = (0..3u32)
            .map(|i| EmissionsRecord {
                period: NaiveDate::from_ymd_opt(2026, 1 + i, 1).unwrap(),
                emissions_kg: 100.0 * (i as f64 + 1.0),
                distance_km: 800.0,
                average_consumption_l_per_100km: 7.0,
            })
            .collect();
        assert_eq!(emissions_total(&months), 600.0);
        assert!((average_monthly_emissions(&months).unwrap() - 200.0).abs() < 1e-9);
    }
}
