use core_types::{FiberType, Wavelength};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Loss per fusion splice in dB, shared by every supported pair.
pub const SPLICE_LOSS_DB: Decimal = dec!(0.15);

/// Loss per connector interface in dB, shared by every supported pair.
pub const CONNECTOR_LOSS_DB: Decimal = dec!(0.5);

/// Every (fiber type, wavelength) pair the coefficient table knows, in the
/// order the selection UI presents them.
pub const SUPPORTED_PAIRS: [(FiberType, Wavelength); 4] = [
    (FiberType::Singlemode, Wavelength::Nm1310),
    (FiberType::Singlemode, Wavelength::Nm1550),
    (FiberType::Multimode, Wavelength::Nm850),
    (FiberType::Multimode, Wavelength::Nm1300),
];

/// The attenuation coefficients for one (fiber type, wavelength) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Fiber attenuation in dB per kilometer of cable.
    pub fiber_db_per_km: Decimal,
    /// Loss per fusion splice in dB.
    pub splice_db: Decimal,
    /// Loss per connector interface in dB.
    pub connector_db: Decimal,
}

impl Coefficients {
    /// Looks up the coefficients for a pair.
    ///
    /// Returns `None` when the wavelength is not used with that fiber type
    /// (e.g. singlemode at 850 nm); callers treat that as a validation
    /// error, never as a default.
    pub fn for_pair(fiber_type: FiberType, wavelength: Wavelength) -> Option<Self> {
        let fiber_db_per_km = match (fiber_type, wavelength) {
            (FiberType::Singlemode, Wavelength::Nm1310) => dec!(0.35),
            (FiberType::Singlemode, Wavelength::Nm1550) => dec!(0.22),
            (FiberType::Multimode, Wavelength::Nm850) => dec!(3.0),
            (FiberType::Multimode, Wavelength::Nm1300) => dec!(1.0),
            _ => return None,
        };
        Some(Self {
            fiber_db_per_km,
            splice_db: SPLICE_LOSS_DB,
            connector_db: CONNECTOR_LOSS_DB,
        })
    }
}

/// The wavelengths the table accepts for a fiber type, in display order.
///
/// The presentation layer derives its wavelength options from this instead
/// of hardcoding the pairing.
pub fn supported_wavelengths(fiber_type: FiberType) -> &'static [Wavelength] {
    match fiber_type {
        FiberType::Singlemode => &[Wavelength::Nm1310, Wavelength::Nm1550],
        FiberType::Multimode => &[Wavelength::Nm850, Wavelength::Nm1300],
    }
}
