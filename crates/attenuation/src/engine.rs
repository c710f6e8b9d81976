use crate::coefficients::Coefficients;
use crate::error::AttenuationError;
use core_types::{FiberType, LossBreakdown, Measurement, MeasurementInput, Wavelength};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// A stateless calculator for deriving the loss breakdown of a single
/// point-to-point fiber link.
#[derive(Debug, Default)]
pub struct LossCalculator {}

impl LossCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pure calculation kernel.
    ///
    /// # Arguments
    ///
    /// * `fiber_type` / `wavelength` - the pair to look up in the
    ///   coefficient table. The pairing itself is validated here.
    /// * `cable_length_m` - cable length in **meters**; divided by 1000
    ///   before the per-kilometer coefficient is applied.
    /// * `splice_count` / `connector_count` - how many fusion splices and
    ///   connector interfaces the link passes through.
    ///
    /// # Returns
    ///
    /// A `LossBreakdown` with all four figures in dB, each rounded to two
    /// decimal places (midpoints away from zero), or an `AttenuationError`
    /// if the inputs fail validation. No state is touched on either path.
    pub fn compute(
        &self,
        fiber_type: FiberType,
        wavelength: Wavelength,
        cable_length_m: Decimal,
        splice_count: u32,
        connector_count: u32,
    ) -> Result<LossBreakdown, AttenuationError> {
        // --- 1. Validation ---
        // Upstream collects validated fields; ranges are still checked here.
        if cable_length_m < Decimal::ZERO {
            return Err(AttenuationError::NegativeCableLength(cable_length_m));
        }
        let coefficients = Coefficients::for_pair(fiber_type, wavelength).ok_or(
            AttenuationError::UnsupportedWavelength {
                fiber_type,
                wavelength,
            },
        )?;

        // --- 2. Loss terms ---
        let length_km = cable_length_m / dec!(1000);
        let fiber_loss = length_km * coefficients.fiber_db_per_km;
        let splice_loss = Decimal::from(splice_count) * coefficients.splice_db;
        let connector_loss = Decimal::from(connector_count) * coefficients.connector_db;
        let total_loss = fiber_loss + splice_loss + connector_loss;

        tracing::debug!(
            %fiber_type,
            %wavelength,
            %cable_length_m,
            splice_count,
            connector_count,
            %total_loss,
            "Computed link loss"
        );

        // --- 3. Fixed-point rounding ---
        // The total is rounded from the raw sum, not summed from the
        // rounded terms.
        Ok(LossBreakdown {
            fiber_loss_db: round_db(fiber_loss),
            splice_loss_db: round_db(splice_loss),
            connector_loss_db: round_db(connector_loss),
            total_loss_db: round_db(total_loss),
        })
    }

    /// Validates one submitted measurement and assembles the full record.
    ///
    /// This is the only sanctioned way a `Measurement` comes into being:
    /// a record that fails validation here never reaches a ledger.
    pub fn measure(&self, input: MeasurementInput) -> Result<Measurement, AttenuationError> {
        let results = self.compute(
            input.fiber_type,
            input.wavelength,
            input.cable_length_m,
            input.splice_count,
            input.connector_count,
        )?;

        Ok(Measurement {
            fiber_type: input.fiber_type,
            wavelength: input.wavelength,
            start_location: input.start_location,
            end_location: input.end_location,
            cable_length_m: input.cable_length_m,
            splice_count: input.splice_count,
            connector_count: input.connector_count,
            results,
        })
    }
}

/// Rounds a dB figure to the two decimal places the display layer shows,
/// sending midpoints away from zero (standard fixed-point display
/// rounding: 1.005 becomes 1.01, not 1.00). The result always carries
/// exactly two decimals, so a raw 0.5 renders and serializes as "0.50".
pub(crate) fn round_db(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::SUPPORTED_PAIRS;

    fn input(fiber_type: FiberType, wavelength: Wavelength) -> MeasurementInput {
        MeasurementInput {
            fiber_type,
            wavelength,
            start_location: "Site A".to_string(),
            end_location: "Site B".to_string(),
            cable_length_m: dec!(1000),
            splice_count: 0,
            connector_count: 0,
        }
    }

    #[test]
    fn zero_inputs_yield_zero_loss_for_every_pair() {
        let calculator = LossCalculator::new();
        for (fiber_type, wavelength) in SUPPORTED_PAIRS {
            let result = calculator
                .compute(fiber_type, wavelength, Decimal::ZERO, 0, 0)
                .unwrap();
            assert_eq!(result.fiber_loss_db, Decimal::ZERO);
            assert_eq!(result.splice_loss_db, Decimal::ZERO);
            assert_eq!(result.connector_loss_db, Decimal::ZERO);
            assert_eq!(result.total_loss_db, Decimal::ZERO);
        }
    }

    #[test]
    fn one_kilometer_of_singlemode_1310() {
        let result = LossCalculator::new()
            .compute(FiberType::Singlemode, Wavelength::Nm1310, dec!(1000), 0, 0)
            .unwrap();
        assert_eq!(result.fiber_loss_db, dec!(0.35));
        assert_eq!(result.splice_loss_db, Decimal::ZERO);
        assert_eq!(result.connector_loss_db, Decimal::ZERO);
        assert_eq!(result.total_loss_db, dec!(0.35));
    }

    #[test]
    fn multimode_850_with_splices_and_a_connector() {
        // 0.5 km x 3.0 + 2 x 0.15 + 1 x 0.5
        let result = LossCalculator::new()
            .compute(FiberType::Multimode, Wavelength::Nm850, dec!(500), 2, 1)
            .unwrap();
        assert_eq!(result.fiber_loss_db, dec!(1.50));
        assert_eq!(result.splice_loss_db, dec!(0.30));
        assert_eq!(result.connector_loss_db, dec!(0.50));
        assert_eq!(result.total_loss_db, dec!(2.30));
    }

    #[test]
    fn cable_length_is_meters_not_kilometers() {
        // 10 m of singlemode 1310 is 0.0035 dB and rounds to 0.00;
        // a kilometer reading here would produce 3.50.
        let result = LossCalculator::new()
            .compute(FiberType::Singlemode, Wavelength::Nm1310, dec!(10), 0, 0)
            .unwrap();
        assert_eq!(result.fiber_loss_db, Decimal::ZERO);
    }

    #[test]
    fn loss_figures_always_carry_two_decimals() {
        // One connector: the raw term is 0.5, which must reach the wire
        // and the tables as "0.50", never "0.5".
        let result = LossCalculator::new()
            .compute(FiberType::Multimode, Wavelength::Nm850, dec!(0), 0, 1)
            .unwrap();
        assert_eq!(result.fiber_loss_db.to_string(), "0.00");
        assert_eq!(result.splice_loss_db.to_string(), "0.00");
        assert_eq!(result.connector_loss_db.to_string(), "0.50");
        assert_eq!(result.total_loss_db.to_string(), "0.50");
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        // 335 m x 3.0 dB/km = 1.005 dB exactly.
        let result = LossCalculator::new()
            .compute(FiberType::Multimode, Wavelength::Nm850, dec!(335), 0, 0)
            .unwrap();
        assert_eq!(result.fiber_loss_db, dec!(1.01));
        assert_eq!(result.total_loss_db, dec!(1.01));
    }

    #[test]
    fn unsupported_pair_is_rejected() {
        let result = LossCalculator::new().compute(
            FiberType::Singlemode,
            Wavelength::Nm850,
            dec!(1000),
            0,
            0,
        );
        assert!(matches!(
            result,
            Err(AttenuationError::UnsupportedWavelength {
                fiber_type: FiberType::Singlemode,
                wavelength: Wavelength::Nm850,
            })
        ));
    }

    #[test]
    fn negative_cable_length_is_rejected() {
        let result = LossCalculator::new().compute(
            FiberType::Singlemode,
            Wavelength::Nm1310,
            dec!(-1),
            0,
            0,
        );
        assert!(matches!(
            result,
            Err(AttenuationError::NegativeCableLength(_))
        ));
    }

    #[test]
    fn compute_is_deterministic() {
        let calculator = LossCalculator::new();
        let first = calculator
            .compute(FiberType::Singlemode, Wavelength::Nm1550, dec!(2500), 3, 2)
            .unwrap();
        let second = calculator
            .compute(FiberType::Singlemode, Wavelength::Nm1550, dec!(2500), 3, 2)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn measure_assembles_the_full_record() {
        let measurement = LossCalculator::new()
            .measure(input(FiberType::Singlemode, Wavelength::Nm1310))
            .unwrap();
        assert_eq!(measurement.start_location, "Site A");
        assert_eq!(measurement.end_location, "Site B");
        assert_eq!(measurement.cable_length_m, dec!(1000));
        assert_eq!(measurement.results.total_loss_db, dec!(0.35));
    }

    #[test]
    fn measure_rejects_what_compute_rejects() {
        let mut bad = input(FiberType::Multimode, Wavelength::Nm1550);
        bad.cable_length_m = dec!(500);
        assert!(matches!(
            LossCalculator::new().measure(bad),
            Err(AttenuationError::UnsupportedWavelength { .. })
        ));
    }
}
