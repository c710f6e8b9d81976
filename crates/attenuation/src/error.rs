use core_types::{FiberType, Wavelength};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttenuationError {
    #[error("Wavelength {wavelength} nm is not valid for {fiber_type} fiber.")]
    UnsupportedWavelength {
        fiber_type: FiberType,
        wavelength: Wavelength,
    },

    #[error("Cable length must be non-negative, got {0} m.")]
    NegativeCableLength(Decimal),

    #[error("A splitter needs at least 2 output ports, got {0}.")]
    PortCountTooSmall(u32),

    #[error("Loss-budget multiplier must be greater than 0, got {0}.")]
    InvalidBudgetMultiplier(Decimal),

    #[error("Calculation error: {0}")]
    Calculation(String),
}
