use crate::engine::round_db;
use crate::error::AttenuationError;
use rust_decimal::prelude::*;
use serde::Serialize;

/// Result of splitting an input signal across the ports of an ideal
/// passive optical splitter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitterSplit {
    /// Theoretical splitting loss, 10 * log10(ports), in dB.
    pub splitting_loss_db: Decimal,
    /// Power left on each output port in dBm.
    pub output_power_dbm: Decimal,
}

/// Computes the ideal splitting loss for a passive splitter and the
/// per-port output power.
///
/// A splitter needs at least two ports to split anything; one port is a
/// patch and zero is not a device. The logarithm runs through f64 because
/// `Decimal` has no log10; the error it introduces is far below the
/// two-decimal display precision.
pub fn split_power(input_power_dbm: Decimal, ports: u32) -> Result<SplitterSplit, AttenuationError> {
    if ports < 2 {
        return Err(AttenuationError::PortCountTooSmall(ports));
    }

    let raw_loss_db = 10.0 * f64::from(ports).log10();
    let raw_loss = Decimal::from_f64(raw_loss_db).ok_or_else(|| {
        AttenuationError::Calculation(format!(
            "splitting loss for {ports} ports is not representable"
        ))
    })?;

    // The per-port power is rounded from the unrounded loss so the two
    // displayed figures come from the same raw value.
    Ok(SplitterSplit {
        splitting_loss_db: round_db(raw_loss),
        output_power_dbm: round_db(input_power_dbm - raw_loss),
    })
}
