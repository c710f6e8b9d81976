use crate::error::LedgerError;
use core_types::Measurement;
use rust_decimal::Decimal;
use tracing::debug;

/// Holds the measurements recorded along a fiber path, in the order they
/// were taken. Its sole responsibility is to keep that sequence intact; it
/// never recomputes the loss figures cached on its entries.
#[derive(Debug, Clone, Default)]
pub struct MeasurementLedger {
    entries: Vec<Measurement>,
}

impl MeasurementLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a completed measurement at the end of the sequence.
    pub fn append(&mut self, measurement: Measurement) {
        debug!(
            link = %measurement.link_label(),
            total_loss_db = %measurement.results.total_loss_db,
            "Recording measurement"
        );
        self.entries.push(measurement);
    }

    /// Removes and returns the measurement at `index`, shifting later
    /// entries down by one. The relative order of the survivors is
    /// preserved.
    pub fn remove_at(&mut self, index: usize) -> Result<Measurement, LedgerError> {
        if index >= self.entries.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        debug!(index, link = %removed.link_label(), "Removed measurement");
        Ok(removed)
    }

    /// Total cable distance across all entries, in meters.
    pub fn total_distance_m(&self) -> Decimal {
        self.entries.iter().map(|m| m.cable_length_m).sum()
    }

    /// Total link loss across all entries, in dB.
    ///
    /// This sums the already-rounded per-measurement totals, so the figure
    /// always matches what adding up the displayed rows would give.
    pub fn total_loss_db(&self) -> Decimal {
        self.entries.iter().map(|m| m.results.total_loss_db).sum()
    }

    /// An owned copy of the current sequence, in insertion order. Later
    /// ledger mutations do not affect the copy.
    pub fn snapshot(&self) -> Vec<Measurement> {
        self.entries.clone()
    }

    /// Borrows the current sequence, in insertion order.
    pub fn entries(&self) -> &[Measurement] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{FiberType, LossBreakdown, Wavelength};
    use rust_decimal_macros::dec;

    fn sample(start: &str, end: &str, length_m: Decimal, total_loss_db: Decimal) -> Measurement {
        Measurement {
            fiber_type: FiberType::Singlemode,
            wavelength: Wavelength::Nm1310,
            start_location: start.to_string(),
            end_location: end.to_string(),
            cable_length_m: length_m,
            splice_count: 1,
            connector_count: 2,
            results: LossBreakdown {
                fiber_loss_db: total_loss_db,
                splice_loss_db: dec!(0),
                connector_loss_db: dec!(0),
                total_loss_db,
            },
        }
    }

    #[test]
    fn a_new_ledger_is_empty_with_zero_totals() {
        let ledger = MeasurementLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.total_distance_m(), dec!(0));
        assert_eq!(ledger.total_loss_db(), dec!(0));
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut ledger = MeasurementLedger::new();
        ledger.append(sample("A", "B", dec!(1000), dec!(0.35)));
        ledger.append(sample("B", "C", dec!(500), dec!(1.50)));
        ledger.append(sample("C", "D", dec!(250), dec!(0.75)));

        let labels: Vec<String> = ledger.iter().map(Measurement::link_label).collect();
        assert_eq!(labels, ["A → B", "B → C", "C → D"]);
        assert!(!ledger.is_empty());
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn totals_are_the_sums_of_the_entries() {
        let mut ledger = MeasurementLedger::new();
        ledger.append(sample("A", "B", dec!(1000), dec!(0.35)));
        ledger.append(sample("B", "C", dec!(500), dec!(1.50)));

        assert_eq!(ledger.total_distance_m(), dec!(1500));
        assert_eq!(ledger.total_loss_db(), dec!(1.85));
    }

    #[test]
    fn remove_at_returns_the_entry_and_keeps_order() {
        let mut ledger = MeasurementLedger::new();
        ledger.append(sample("A", "B", dec!(1000), dec!(0.35)));
        ledger.append(sample("B", "C", dec!(500), dec!(1.50)));
        ledger.append(sample("C", "D", dec!(250), dec!(0.75)));

        let removed = ledger.remove_at(1).unwrap();
        assert_eq!(removed.link_label(), "B → C");

        let labels: Vec<String> = ledger.iter().map(Measurement::link_label).collect();
        assert_eq!(labels, ["A → B", "C → D"]);
        assert_eq!(ledger.total_distance_m(), dec!(1250));
        assert_eq!(ledger.total_loss_db(), dec!(1.10));

        let last = ledger.remove_at(ledger.len() - 1).unwrap();
        assert_eq!(last.link_label(), "C → D");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].link_label(), "A → B");
    }

    #[test]
    fn remove_at_rejects_out_of_range_indices() {
        let mut ledger = MeasurementLedger::new();
        ledger.append(sample("A", "B", dec!(1000), dec!(0.35)));

        assert!(matches!(
            ledger.remove_at(1),
            Err(LedgerError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(ledger.len(), 1);

        let mut empty = MeasurementLedger::new();
        assert!(matches!(
            empty.remove_at(0),
            Err(LedgerError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn snapshot_is_detached_from_later_mutations() {
        let mut ledger = MeasurementLedger::new();
        ledger.append(sample("A", "B", dec!(1000), dec!(0.35)));
        let snapshot = ledger.snapshot();
        assert_eq!(snapshot[0], sample("A", "B", dec!(1000), dec!(0.35)));

        ledger.append(sample("B", "C", dec!(500), dec!(1.50)));
        ledger.remove_at(0).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].link_label(), "A → B");
        assert_eq!(ledger.entries().len(), 1);
        assert_eq!(ledger.entries()[0].link_label(), "B → C");
    }
}
