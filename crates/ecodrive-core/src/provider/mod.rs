//! Metrics Data Provider
//!
//! The boundary between the calculation core and whatever produces the
//! driving data. The demo implementation fabricates records with a
//! seedable RNG; a production implementation would be backed by a real
//! telematics ingestion path. Either way the record shapes below are the
//! contract the calculators and the UI depend on.

mod demo;

pub use demo::DemoDataProvider;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::maintenance::MaintenanceItem;

/// One day of driving telemetry. Immutable once generated; one record per
/// date, sequences are ordered by date ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrivingRecord {
    /// Calendar day the record covers
    pub date: NaiveDate,
    /// Distance driven (km)
    pub distance_km: f64,
    /// Average fuel consumption (L/100km)
    pub fuel_consumption_l_per_100km: f64,
    /// Composite driving-efficiency rating in [0, 100], higher is better
    pub eco_score: f64,
    /// Detected harsh-braking incidents
    pub harsh_braking_count: u32,
    /// Detected rapid-acceleration incidents
    pub rapid_acceleration_count: u32,
}

/// Monthly emissions summary row. Derived, read-only, one per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsRecord {
    /// First day of the month the row summarizes
    pub period: NaiveDate,
    /// CO2 emitted over the month (kg)
    pub emissions_kg: f64,
    /// Distance driven over the month (km)
    pub distance_km: f64,
    /// Average fuel consumption over the month (L/100km)
    pub average_consumption_l_per_100km: f64,
}

/// Source of driving, maintenance and emissions data.
///
/// Takes `&mut self` because demo implementations advance an RNG per
/// query.
pub trait MetricsDataProvider {
    /// Daily driving records for the trailing `period_days` days,
    /// ascending by date
    fn driving_history(&mut self, period_days: u32) -> Vec<DrivingRecord>;

    /// The vehicle's maintenance schedule with derived statuses
    fn maintenance_schedule(&mut self) -> Vec<MaintenanceItem>;

    /// Monthly emissions summaries for the trailing `period_months`
    /// months, ascending by period
    fn emissions_history(&mut self, period_months: u32) -> Vec<EmissionsRecord>;
}
