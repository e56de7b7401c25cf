//! Maintenance Schedule Evaluation
//!
//! Classifies maintenance items against the current date: flagged as due
//! soon inside a configurable lookahead window, overdue once the due date
//! has passed without a newer service, and completed when the history
//! shows a service on or after the due date.
//!
//! The source app only distinguished "Due Soon" and "OK"; an item whose
//! due date had slipped past was indistinguishable from a healthy one.
//! This module carries an explicit [`MaintenanceStatus::Overdue`] state
//! instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// Default lookahead window (days) within which an upcoming item is
/// flagged urgent
pub const DEFAULT_DUE_SOON_WINDOW_DAYS: i64 = 14;

/// Derived state of a maintenance item relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    /// Due within the lookahead window
    DueSoon,
    /// Not due yet and outside the window
    Ok,
    /// Due date passed with no newer service on record
    Overdue,
    /// Serviced on or after its due date; shown in history views
    Completed,
}

impl MaintenanceStatus {
    /// Human-readable label used by the UI layer
    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceStatus::DueSoon => "Due Soon",
            MaintenanceStatus::Ok => "OK",
            MaintenanceStatus::Overdue => "Overdue",
            MaintenanceStatus::Completed => "Completed",
        }
    }
}

/// A scheduled maintenance item with its service history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceItem {
    /// Item name, e.g. "Oil Change"
    pub name: String,
    /// Date of the most recent service
    pub last_service_date: NaiveDate,
    /// Date the next service falls due. Always after `last_service_date`.
    pub next_due_date: NaiveDate,
    /// Service interval in kilometers
    pub interval_km: u32,
    /// Derived status, kept in sync by [`evaluate_status`] and
    /// [`MaintenanceItem::record_service`]
    pub status: MaintenanceStatus,
}

/// Classify an item's status as of a reference date.
///
/// Total over well-formed items: always returns exactly one status and
/// never fails.
pub fn evaluate_status(
    item: &MaintenanceItem,
    as_of: NaiveDate,
    due_soon_window_days: i64,
) -> MaintenanceStatus {
    let days_until_due = (item.next_due_date - as_of).num_days();

    if days_until_due < 0 {
        // Past due: a service on or after the due date closes it out,
        // otherwise it is overdue rather than silently "OK".
        if item.last_service_date >= item.next_due_date {
            MaintenanceStatus::Completed
        } else {
            MaintenanceStatus::Overdue
        }
    } else if days_until_due <= due_soon_window_days {
        MaintenanceStatus::DueSoon
    } else {
        MaintenanceStatus::Ok
    }
}

impl MaintenanceItem {
    /// Build an item with its status derived from `as_of`
    pub fn new(
        name: impl Into<String>,
        last_service_date: NaiveDate,
        next_due_date: NaiveDate,
        interval_km: u32,
        as_of: NaiveDate,
    ) -> Result<Self, MetricsError> {
        if next_due_date <= last_service_date {
            return Err(MetricsError::InvalidInput(format!(
                "next due date {next_due_date} must be after last service {last_service_date}"
            )));
        }
        if interval_km == 0 {
            return Err(MetricsError::InvalidInput(
                "service interval must be positive".to_string(),
            ));
        }
        let mut item = MaintenanceItem {
            name: name.into(),
            last_service_date,
            next_due_date,
            interval_km,
            status: MaintenanceStatus::Ok,
        };
        item.status = evaluate_status(&item, as_of, DEFAULT_DUE_SOON_WINDOW_DAYS);
        Ok(item)
    }

    /// Record a new service event, updating the history dates and
    /// recomputing the status.
    ///
    /// Single-writer: callers mutate one item at a time, no concurrent
    /// access contract.
    pub fn record_service(
        &mut self,
        service_date: NaiveDate,
        next_due_date: NaiveDate,
        as_of: NaiveDate,
        due_soon_window_days: i64,
    ) -> Result<(), MetricsError> {
        if next_due_date <= service_date {
            return Err(MetricsError::InvalidInput(format!(
                "next due date {next_due_date} must be after service date {service_date}"
            )));
        }
        self.last_service_date = service_date;
        self.next_due_date = next_due_date;
        self.status = evaluate_status(self, as_of, due_soon_window_days);
        Ok(())
    }

    /// Refresh the derived status against a new reference date
    pub fn refresh_status(&mut self, as_of: NaiveDate, due_soon_window_days: i64) {
        self.status = evaluate_status(self, as_of, due_soon_window_days);
    }
}
