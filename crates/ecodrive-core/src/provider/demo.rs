//! Demo Mode - Simulated telematics data generator
//!
//! Fabricates plausible driving, maintenance and emissions data for UI
//! work without a telematics feed. Values jitter around realistic means
//! (about 30 km and 6 L/100km per day, eco scores around 80) and are
//! clamped to each field's documented domain.
//!
//! Seed the generator for deterministic fixtures; the calculation core's
//! own tests use fixed records instead and never depend on these values.

use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::maintenance::{
    evaluate_status, MaintenanceItem, MaintenanceStatus, DEFAULT_DUE_SOON_WINDOW_DAYS,
};
use crate::provider::{DrivingRecord, EmissionsRecord, MetricsDataProvider};

/// Simulated data provider backed by a seedable RNG
pub struct DemoDataProvider {
    rng: StdRng,
    today: NaiveDate,
}

impl Default for DemoDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoDataProvider {
    /// Create a provider seeded from entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            today: Utc::now().date_naive(),
        }
    }

    /// Create a provider with a fixed seed for reproducible data
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today: Utc::now().date_naive(),
        }
    }

    /// Mean plus uniform jitter in `[-spread, spread)`
    fn jitter(&mut self, mean: f64, spread: f64) -> f64 {
        mean + self.rng.gen_range(-spread..spread)
    }
}

impl MetricsDataProvider for DemoDataProvider {
    fn driving_history(&mut self, period_days: u32) -> Vec<DrivingRecord> {
        let mut records = Vec::with_capacity(period_days as usize);
        for days_back in (0..period_days as i64).rev() {
            let date = self.today - Duration::days(days_back);
            records.push(DrivingRecord {
                date,
                distance_km: self.jitter(30.0, 10.0).max(0.0),
                fuel_consumption_l_per_100km: self.jitter(6.0, 1.0).max(0.0),
                eco_score: self.jitter(80.0, 10.0).clamp(0.0, 100.0),
                harsh_braking_count: self.rng.gen_range(0..5),
                rapid_acceleration_count: self.rng.gen_range(0..5),
            });
        }
        records
    }

    fn maintenance_schedule(&mut self) -> Vec<MaintenanceItem> {
        let schedule = [
            ("Oil Change", -80, 10, 5000),
            ("Tire Rotation", -45, 45, 10_000),
            ("Air Filter", -150, 30, 15_000),
        ];

        schedule
            .iter()
            .map(|&(name, serviced_days_ago, due_in_days, interval_km)| {
                let mut item = MaintenanceItem {
                    name: name.to_string(),
                    last_service_date: self.today + Duration::days(serviced_days_ago),
                    next_due_date: self.today + Duration::days(due_in_days),
                    interval_km,
                    status: MaintenanceStatus::Ok,
                };
                item.status = evaluate_status(&item, self.today, DEFAULT_DUE_SOON_WINDOW_DAYS);
                item
            })
            .collect()
    }

    fn emissions_history(&mut self, period_months: u32) -> Vec<EmissionsRecord> {
        let current_month = self
            .today
            .with_day(1)
            .unwrap_or(self.today);

        let mut records = Vec::with_capacity(period_months as usize);
        for months_back in (0..period_months).rev() {
            let period = current_month
                .checked_sub_months(Months::new(months_back))
                .unwrap_or(current_month);
            records.push(EmissionsRecord {
                period,
                emissions_kg: self.jitter(300.0, 50.0).max(0.0),
                distance_km: self.jitter(800.0, 100.0).max(0.0),
                average_consumption_l_per_100km: self.jitter(7.0, 1.0).max(0.0),
            });
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driving_history_shape() {
        let mut provider = DemoDataProvider::with_seed(42);
        let records = provider.driving_history(30);

        assert_eq!(records.len(), 30);
        for pair in records.windows(2) {
            assert!(pair[0].date < pair[1].date, "dates must ascend");
        }
        for record in &records {
            assert!(record.distance_km >= 0.0);
            assert!(record.fuel_consumption_l_per_100km >= 0.0);
            assert!((0.0..=100.0).contains(&record.eco_score));
            assert!(record.harsh_braking_count < 5);
            assert!(record.rapid_acceleration_count < 5);
        }
    }

    #[test]
    fn test_seeded_providers_are_deterministic() {
        let mut a = DemoDataProvider::with_seed(7);
        let mut b = DemoDataProvider::with_seed(7);
        assert_eq!(a.driving_history(14), b.driving_history(14));
        assert_eq!(a.emissions_history(12), b.emissions_history(12));
    }

    #[test]
    fn test_maintenance_schedule_statuses_are_derived() {
        let mut provider = DemoDataProvider::with_seed(1);
        let schedule = provider.maintenance_schedule();

        assert_eq!(schedule.len(), 3);
        let oil = &schedule[0];
        assert_eq!(oil.name, "Oil Change");
        // Due in 10 days, inside the default 14-day window
        assert_eq!(oil.status, MaintenanceStatus::DueSoon);
        let rotation = &schedule[1];
        assert_eq!(rotation.status, MaintenanceStatus::Ok);
        for item in &schedule {
            assert!(item.next_due_date > item.last_service_date);
        }
    }

    #[test]
    fn test_emissions_history_shape() {
        let mut provider = DemoDataProvider::with_seed(3);
        let records = provider.emissions_history(12);

        assert_eq!(records.len(), 12);
        for pair in records.windows(2) {
            assert!(pair[0].period < pair[1].period);
        }
        for record in &records {
            assert_eq!(record.period.day(), 1, "period is the first of the month");
            assert!(record.emissions_kg >= 0.0);
        }
    }
}
