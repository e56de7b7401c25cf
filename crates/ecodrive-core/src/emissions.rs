//! Emissions Calculator
//!
//! Converts a driven distance and a consumption rate into a CO2 mass.
//! Combustion and hybrid vehicles burn fuel (L/100km) at a fixed emission
//! factor per liter of gasoline; electric vehicles draw energy (kWh/100km)
//! multiplied by the local grid's emission factor.
//!
//! All functions are pure: deterministic, side-effect free, and failing
//! only on inputs outside the documented domain.

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// Average CO2 emitted per liter of gasoline burned (kg). Domain constant,
/// not configurable per call.
pub const GASOLINE_CO2_KG_PER_LITER: f64 = 2.31;

/// Example grid emission factor (kg CO2 per kWh). Varies by country; used
/// as the default when the caller has no local figure.
pub const DEFAULT_GRID_CO2_KG_PER_KWH: f64 = 0.4;

/// How a vehicle converts stored energy into motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleEnergy {
    /// Petrol or diesel engine, rate in L/100km
    Combustion,
    /// Combined engine, still fueled in L/100km
    Hybrid,
    /// Battery electric, rate in kWh/100km
    Electric,
}

/// Input to a single emissions calculation. Pure value, no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionInput {
    /// Distance driven (km)
    pub distance_km: f64,
    /// Consumption per 100 km: liters for combustion/hybrid, kWh for electric
    pub rate_per_100km: f64,
    /// Energy type selecting the calculation strategy
    pub energy: VehicleEnergy,
    /// Grid emission factor (kg CO2/kWh). Required for electric vehicles,
    /// ignored otherwise.
    pub grid_factor_kg_per_kwh: Option<f64>,
}

/// Compute CO2 emissions (kg) for a trip.
///
/// Fails with [`MetricsError::InvalidInput`] on negative distance or rate,
/// or when an electric calculation is missing its grid factor. Zero
/// distance or zero rate yields zero emissions.
pub fn compute(input: &EmissionInput) -> Result<f64, MetricsError> {
    if input.distance_km < 0.0 {
        return Err(MetricsError::InvalidInput(format!(
            "distance must be non-negative, got {}",
            input.distance_km
        )));
    }
    if input.rate_per_100km < 0.0 {
        return Err(MetricsError::InvalidInput(format!(
            "consumption rate must be non-negative, got {}",
            input.rate_per_100km
        )));
    }

    // Fuel or energy used over the trip, per the L/100km (kWh/100km) convention
    let used_per_trip = input.distance_km * input.rate_per_100km / 100.0;

    match input.energy {
        VehicleEnergy::Combustion | VehicleEnergy::Hybrid => {
            Ok(used_per_trip * GASOLINE_CO2_KG_PER_LITER)
        }
        VehicleEnergy::Electric => {
            let grid_factor = input.grid_factor_kg_per_kwh.ok_or_else(|| {
                MetricsError::InvalidInput(
                    "electric vehicles require a grid emission factor".to_string(),
                )
            })?;
            if grid_factor < 0.0 {
                return Err(MetricsError::InvalidInput(format!(
                    "grid emission factor must be non-negative, got {grid_factor}"
                )));
            }
            Ok(used_per_trip * grid_factor)
        }
    }
}

/// Shorthand for the common petrol case
pub fn combustion_emissions(distance_km: f64, l_per_100km: f64) -> Result<f64, MetricsError> {
    compute(&EmissionInput {
        distance_km,
        rate_per_100km: l_per_100km,
        energy: VehicleEnergy::Combustion,
        grid_factor_kg_per_kwh: None,
    })
}

/// A vehicle class with a typical consumption rate, used to prefill the
/// footprint calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VehiclePreset {
    /// Display name
    pub name: &'static str,
    /// Energy type
    pub energy: VehicleEnergy,
    /// Typical rate: L/100km for combustion/hybrid, kWh/100km for electric
    pub default_rate_per_100km: f64,
}

/// Built-in vehicle presets for the footprint calculator
pub const VEHICLE_PRESETS: [VehiclePreset; 7] = [
    VehiclePreset {
        name: "Small Car (Petrol)",
        energy: VehicleEnergy::Combustion,
        default_rate_per_100km: 7.0,
    },
    VehiclePreset {
        name: "Medium Car (Petrol)",
        energy: VehicleEnergy::Combustion,
        default_rate_per_100km: 8.5,
    },
    VehiclePreset {
        name: "Large Car (Petrol)",
        energy: VehicleEnergy::Combustion,
        default_rate_per_100km: 10.0,
    },
    VehiclePreset {
        name: "Small Car (Diesel)",
        energy: VehicleEnergy::Combustion,
        default_rate_per_100km: 5.5,
    },
    VehiclePreset {
        name: "Medium Car (Diesel)",
        energy: VehicleEnergy::Combustion,
        default_rate_per_100km: 6.5,
    },
    VehiclePreset {
        name: "Hybrid",
        energy: VehicleEnergy::Hybrid,
        default_rate_per_100km: 4.5,
    },
    VehiclePreset {
        name: "Electric",
        energy: VehicleEnergy::Electric,
        default_rate_per_100km: 18.0,
    },
];
