use crate::coefficients::{Coefficients, CONNECTOR_LOSS_DB, SPLICE_LOSS_DB};
use crate::engine::round_db;
use crate::error::AttenuationError;
use configuration::{LimitsProfileId, LimitsSettings};
use core_types::{FiberType, Measurement, Wavelength};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One named variant of the loss-bounds table.
///
/// Field practice disagrees on two numbers for this nominally identical
/// feature: the multimode-1300 fiber coefficient (1.0 vs 0.7 dB/km) and
/// the multiplier that turns the expected loss into the maximum acceptable
/// loss (1.2x vs 3x). Both variants are kept as explicit constants;
/// configuration picks one and may override the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LossBudgetProfile {
    pub name: &'static str,
    /// Nominal multimode-1300 fiber coefficient in dB/km, the one table
    /// entry the variants disagree on.
    pub multimode_1300_db_per_km: Decimal,
    /// Factor applied to the expected loss to obtain the maximum
    /// acceptable loss.
    pub max_multiplier: Decimal,
}

/// The tighter variant: canonical multimode-1300 nominal, 1.2x headroom.
pub const CONSERVATIVE: LossBudgetProfile = LossBudgetProfile {
    name: "conservative",
    multimode_1300_db_per_km: dec!(1.0),
    max_multiplier: dec!(1.2),
};

/// The looser variant: reduced multimode-1300 nominal, 3x headroom.
pub const PERMISSIVE: LossBudgetProfile = LossBudgetProfile {
    name: "permissive",
    multimode_1300_db_per_km: dec!(0.7),
    max_multiplier: dec!(3.0),
};

impl LossBudgetProfile {
    /// The per-km fiber coefficient this profile expects for a pair.
    ///
    /// Profiles agree with the canonical coefficient table everywhere
    /// except multimode-1300.
    pub fn nominal_fiber_db_per_km(
        &self,
        fiber_type: FiberType,
        wavelength: Wavelength,
    ) -> Option<Decimal> {
        match (fiber_type, wavelength) {
            (FiberType::Multimode, Wavelength::Nm1300) => Some(self.multimode_1300_db_per_km),
            _ => Coefficients::for_pair(fiber_type, wavelength).map(|c| c.fiber_db_per_km),
        }
    }
}

/// The verdict for one measurement, all figures in dB and rounded to two
/// decimal places like everything the display layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetCheck {
    /// Loss the profile expects for the link as built.
    pub expected_loss_db: Decimal,
    /// Expected loss times the multiplier; the acceptance bound.
    pub max_loss_db: Decimal,
    /// The measurement's cached total loss.
    pub actual_loss_db: Decimal,
    /// Whether the actual loss sits at or below the bound.
    pub within_budget: bool,
}

/// Judges completed measurements against a profile's loss bounds.
#[derive(Debug, Clone)]
pub struct LossBudget {
    profile: LossBudgetProfile,
    max_multiplier: Decimal,
}

impl LossBudget {
    /// Builds the evaluator for a profile with the profile's own
    /// multiplier.
    pub fn new(profile: LossBudgetProfile) -> Self {
        Self {
            profile,
            max_multiplier: profile.max_multiplier,
        }
    }

    /// Builds the evaluator from loaded settings, applying the multiplier
    /// override when one is configured.
    ///
    /// The configuration layer rejects non-positive overrides at load
    /// time; hand-assembled `LimitsSettings` are checked again here.
    pub fn from_settings(settings: &LimitsSettings) -> Result<Self, AttenuationError> {
        let profile = match settings.profile {
            LimitsProfileId::Conservative => CONSERVATIVE,
            LimitsProfileId::Permissive => PERMISSIVE,
        };
        let max_multiplier = settings.max_multiplier.unwrap_or(profile.max_multiplier);
        if max_multiplier <= Decimal::ZERO {
            return Err(AttenuationError::InvalidBudgetMultiplier(max_multiplier));
        }
        Ok(Self {
            profile,
            max_multiplier,
        })
    }

    pub fn profile(&self) -> &LossBudgetProfile {
        &self.profile
    }

    pub fn max_multiplier(&self) -> Decimal {
        self.max_multiplier
    }

    /// Evaluates a completed measurement against the bounds.
    ///
    /// Expected loss is computed from the profile's nominal coefficients
    /// over the measurement's as-built geometry; the bound and the verdict
    /// use the same two-decimal rounding as the displayed figures. The
    /// measurement's cached total is trusted as the actual value.
    pub fn evaluate(&self, measurement: &Measurement) -> Result<BudgetCheck, AttenuationError> {
        let nominal = self
            .profile
            .nominal_fiber_db_per_km(measurement.fiber_type, measurement.wavelength)
            .ok_or(AttenuationError::UnsupportedWavelength {
                fiber_type: measurement.fiber_type,
                wavelength: measurement.wavelength,
            })?;

        let length_km = measurement.cable_length_m / dec!(1000);
        let expected = length_km * nominal
            + Decimal::from(measurement.splice_count) * SPLICE_LOSS_DB
            + Decimal::from(measurement.connector_count) * CONNECTOR_LOSS_DB;

        let expected_loss_db = round_db(expected);
        let max_loss_db = round_db(expected_loss_db * self.max_multiplier);
        let actual_loss_db = measurement.results.total_loss_db;

        Ok(BudgetCheck {
            expected_loss_db,
            max_loss_db,
            actual_loss_db,
            within_budget: actual_loss_db <= max_loss_db,
        })
    }
}
