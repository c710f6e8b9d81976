use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two fiber categories supported by the loss engine.
///
/// The wire labels ("singlemode" / "multimode") match the form values used
/// by the input-collection layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiberType {
    Singlemode,
    Multimode,
}

impl FiberType {
    /// Returns the wire label for this fiber type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FiberType::Singlemode => "singlemode",
            FiberType::Multimode => "multimode",
        }
    }
}

impl fmt::Display for FiberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FiberType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "singlemode" => Ok(FiberType::Singlemode),
            "multimode" => Ok(FiberType::Multimode),
            other => Err(CoreError::UnknownFiberType(other.to_string())),
        }
    }
}

/// The operating wavelengths the coefficient table knows about, keyed by
/// their nanometer labels.
///
/// Which wavelengths are valid for which fiber type is a property of the
/// coefficient table in the `attenuation` crate, not of this enum; an enum
/// value here only guarantees the label itself is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wavelength {
    #[serde(rename = "850")]
    Nm850,
    #[serde(rename = "1300")]
    Nm1300,
    #[serde(rename = "1310")]
    Nm1310,
    #[serde(rename = "1550")]
    Nm1550,
}

impl Wavelength {
    /// Returns the wire label for this wavelength.
    pub fn as_str(&self) -> &'static str {
        match self {
            Wavelength::Nm850 => "850",
            Wavelength::Nm1300 => "1300",
            Wavelength::Nm1310 => "1310",
            Wavelength::Nm1550 => "1550",
        }
    }

    /// Returns the wavelength in nanometers.
    pub fn nanometers(&self) -> u32 {
        match self {
            Wavelength::Nm850 => 850,
            Wavelength::Nm1300 => 1300,
            Wavelength::Nm1310 => 1310,
            Wavelength::Nm1550 => 1550,
        }
    }
}

impl fmt::Display for Wavelength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wavelength {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "850" => Ok(Wavelength::Nm850),
            "1300" => Ok(Wavelength::Nm1300),
            "1310" => Ok(Wavelength::Nm1310),
            "1550" => Ok(Wavelength::Nm1550),
            other => Err(CoreError::UnknownWavelength(other.to_string())),
        }
    }
}
