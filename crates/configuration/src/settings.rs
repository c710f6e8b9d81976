use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Loss-budget settings for pass/fail checks. Absent sections fall back
    /// to the conservative defaults.
    #[serde(default)]
    pub limits: LimitsSettings,
}

/// Selects and tunes the loss-bound profile used to judge a link's total
/// loss. The two named profiles encode the two variants found in the field
/// (they disagree on the multimode-1300 nominal coefficient and on the
/// max-bound multiplier); neither is hardcoded as ground truth.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsSettings {
    /// Which named bounds profile to use.
    #[serde(default)]
    pub profile: LimitsProfileId,

    /// Optional override of the profile's max-bound multiplier. Must be
    /// greater than zero. Leave unset to use the profile's own value.
    #[serde(default)]
    pub max_multiplier: Option<Decimal>,
}

impl Default for LimitsSettings {
    fn default() -> Self {
        Self {
            profile: LimitsProfileId::default(),
            max_multiplier: None,
        }
    }
}

/// Identifier for the named loss-bound profiles. The constants behind the
/// names live in the `attenuation` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitsProfileId {
    /// Multimode-1300 nominal 1.0 dB/km, 1.2x max-bound multiplier.
    #[default]
    Conservative,
    /// Multimode-1300 nominal 0.7 dB/km, 3.0x max-bound multiplier.
    Permissive,
}

impl LimitsProfileId {
    /// Returns the configuration-file spelling of the profile name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitsProfileId::Conservative => "conservative",
            LimitsProfileId::Permissive => "permissive",
        }
    }
}

impl fmt::Display for LimitsProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
