//! # EcoDrive Companion Core Library
//!
//! Core functionality for the EcoDrive Companion eco-driving app.
//!
//! This library provides:
//! - CO2 emissions calculation for combustion, hybrid and electric vehicles
//! - Maintenance schedule evaluation (due-soon / overdue / completed)
//! - Driving-metrics aggregation (averages, totals, week-over-week deltas,
//!   chartable trend series)
//! - A data-provider boundary with a random demo implementation
//! - An LLM-backed eco-driving tips client with static fallbacks
//!
//! The UI layer calls into this crate and renders its outputs; nothing in
//! here draws charts, routes pages, or talks to hardware.
//!
//! ## Example
//!
//! ```rust
//! use ecodrive_core::prelude::*;
//!
//! let mut provider = DemoDataProvider::with_seed(7);
//! let history = provider.driving_history(30);
//! let digest = DrivingDigest::from_records(&history);
//! println!("average eco score: {}", digest.average_eco_score);
//! ```

#![warn(missing_docs)]

pub mod emissions;
pub mod error;
pub mod maintenance;
pub mod provider;
pub mod summary;
pub mod tips;
pub mod units;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::emissions::{EmissionInput, VehicleEnergy, VehiclePreset};
    pub use crate::error::MetricsError;
    pub use crate::maintenance::{MaintenanceItem, MaintenanceStatus};
    pub use crate::provider::{
        DemoDataProvider, DrivingRecord, EmissionsRecord, MetricsDataProvider,
    };
    pub use crate::summary::{DrivingDigest, Metric};
    pub use crate::tips::{MaintenanceAdvice, TipsClient};
    pub use crate::units::UnitSystem;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
