use crate::enums::{FiberType, Wavelength};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One submitted measurement, exactly as the input-collection layer hands
/// it over, before any loss has been derived.
///
/// The collaborator is expected to have confirmed the numeric fields match
/// the "non-negative integer" / "non-negative decimal" patterns; the engine
/// still re-validates ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub fiber_type: FiberType,
    pub wavelength: Wavelength,
    /// Free-text label for the near end of the link (e.g. "ODF Site A").
    pub start_location: String,
    /// Free-text label for the far end of the link.
    pub end_location: String,
    /// Cable length in **meters**. The engine divides by 1000 before
    /// applying per-kilometer coefficients; passing kilometers here will
    /// understate the loss by a factor of a thousand.
    pub cable_length_m: Decimal,
    pub splice_count: u32,
    pub connector_count: u32,
}

/// The four derived loss figures for one link, all in dB and each rounded
/// to exactly two decimal places at creation time. They are cached on the
/// `Measurement` and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossBreakdown {
    pub fiber_loss_db: Decimal,
    pub splice_loss_db: Decimal,
    pub connector_loss_db: Decimal,
    pub total_loss_db: Decimal,
}

/// A completed point-to-point measurement: the submitted inputs plus the
/// loss breakdown derived from them.
///
/// Produced by `LossCalculator::measure` in the `attenuation` crate and
/// immutable from then on; the ledger that holds it owns its whole
/// lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub fiber_type: FiberType,
    pub wavelength: Wavelength,
    pub start_location: String,
    pub end_location: String,
    /// Cable length in meters, as submitted.
    pub cable_length_m: Decimal,
    pub splice_count: u32,
    pub connector_count: u32,
    pub results: LossBreakdown,
}

impl Measurement {
    /// Returns the "start → end" label the display layers use for a row.
    pub fn link_label(&self) -> String {
        format!("{} → {}", self.start_location, self.end_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Measurement {
        Measurement {
            fiber_type: FiberType::Singlemode,
            wavelength: Wavelength::Nm1310,
            start_location: "Site A".to_string(),
            end_location: "Site B".to_string(),
            cable_length_m: dec!(1000),
            splice_count: 2,
            connector_count: 2,
            results: LossBreakdown {
                fiber_loss_db: dec!(0.35),
                splice_loss_db: dec!(0.30),
                connector_loss_db: dec!(1.00),
                total_loss_db: dec!(1.65),
            },
        }
    }

    #[test]
    fn link_label_joins_locations() {
        assert_eq!(sample().link_label(), "Site A → Site B");
    }

    #[test]
    fn measurement_serializes_with_nested_results() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["fiber_type"], "singlemode");
        assert_eq!(json["wavelength"], "1310");
        assert_eq!(json["results"]["total_loss_db"], "1.65");
    }

    #[test]
    fn measurement_input_round_trips_through_json() {
        let input = MeasurementInput {
            fiber_type: FiberType::Multimode,
            wavelength: Wavelength::Nm850,
            start_location: "Rack 1".to_string(),
            end_location: "Rack 9".to_string(),
            cable_length_m: dec!(500),
            splice_count: 2,
            connector_count: 1,
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: MeasurementInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
