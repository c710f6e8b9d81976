use chrono::{DateTime, Utc};
use core_types::Measurement;
use ledger::MeasurementLedger;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A point-in-time summary of a measured fiber path.
///
/// This struct is the final output of a measurement session and serves as
/// the data transfer object for results leaving the system. The rows and
/// totals are frozen at generation time; a report does not follow later
/// ledger mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathReport {
    pub generated_at: DateTime<Utc>,

    /// The recorded measurements, in the order they were taken.
    pub measurements: Vec<Measurement>,

    /// Sum of the cable lengths of all rows, in meters.
    pub total_distance_m: Decimal,

    /// Sum of the per-row total losses, in dB.
    pub total_loss_db: Decimal,
}

impl PathReport {
    /// Freezes the current ledger contents into a report.
    pub fn from_ledger(ledger: &MeasurementLedger) -> Self {
        Self {
            generated_at: Utc::now(),
            measurements: ledger.snapshot(),
            total_distance_m: ledger.total_distance_m(),
            total_loss_db: ledger.total_loss_db(),
        }
    }
}
