//! # OptiCalc Measurement Ledger
//!
//! This crate provides the in-memory record of completed measurements along
//! a fiber path. It is the single holder of measurement state in the system.
//!
//! ## Architectural Principles
//!
//! - **State vs. Logic Decoupling:** The `attenuation` crate computes loss
//!   figures; this crate only stores and aggregates them. The ledger never
//!   recomputes a dB value.
//! - **Order is the Contract:** Entries keep strict insertion order, and
//!   removal is positional. Display layers rely on row index N meaning the
//!   Nth recorded measurement.
//!
//! ## Public API
//!
//! - `MeasurementLedger`: The ordered, append-only-plus-removal store.
//! - `LedgerError`: The specific error types that can be returned from this
//!   crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod measurements;

// Re-export the key components to provide a clean, public-facing API.
pub use error::LedgerError;
pub use measurements::MeasurementLedger;
