//! Unit Conversion Functions
//!
//! Conversions behind the app's metric/imperial toggle:
//! - Distance: km ↔ miles
//! - Volume: liters ↔ US gallons
//! - Mass: kg ↔ lbs
//! - Fuel economy: L/100km ↔ US mpg

use serde::{Deserialize, Serialize};

/// Unit system selected in the app settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilometers, liters, kilograms
    Metric,
    /// Miles, US gallons, pounds
    Imperial,
}

/// Convert kilometers to miles
pub fn km_to_miles(km: f64) -> f64 {
    km * 0.62137119223733
}

/// Convert miles to kilometers
pub fn miles_to_km(miles: f64) -> f64 {
    miles / 0.62137119223733
}

/// Convert liters to US gallons
pub fn liters_to_gallons_us(liters: f64) -> f64 {
    liters * 0.26417205235815
}

/// Convert US gallons to liters
pub fn gallons_us_to_liters(gallons: f64) -> f64 {
    gallons / 0.26417205235815
}

/// Convert kilograms to pounds
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / 0.45359237
}

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * 0.45359237
}

/// Convert L/100km to US miles per gallon.
///
/// The forms are reciprocal; a zero input maps to 0.0 by convention so a
/// parked day never divides by zero.
pub fn l_per_100km_to_mpg_us(l_per_100km: f64) -> f64 {
    if l_per_100km == 0.0 {
        return 0.0;
    }
    235.214583 / l_per_100km
}

/// Convert US miles per gallon to L/100km. Zero maps to 0.0, see
/// [`l_per_100km_to_mpg_us`].
pub fn mpg_us_to_l_per_100km(mpg: f64) -> f64 {
    if mpg == 0.0 {
        return 0.0;
    }
    235.214583 / mpg
}

/// Convert a distance for display in the selected unit system
pub fn display_distance(km: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => km,
        UnitSystem::Imperial => km_to_miles(km),
    }
}

/// Convert a fuel consumption rate for display in the selected unit
/// system (L/100km or US mpg)
pub fn display_consumption(l_per_100km: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => l_per_100km,
        UnitSystem::Imperial => l_per_100km_to_mpg_us(l_per_100km),
    }
}
