//! # OptiCalc Attenuation Engine
//!
//! This crate computes optical link loss from physical link parameters. It is
//! the arithmetic heart of the system: every displayed dB figure originates
//! here.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` and `configuration`.
//! - **Stateless Calculation:** The `LossCalculator` is a stateless
//!   calculator. It takes link parameters as input and produces a
//!   `LossBreakdown` as output. This makes it highly reliable and easy to
//!   test.
//! - **Fixed-Point Arithmetic:** All loss figures are `Decimal`, rounded to
//!   two decimal places with half-away-from-zero ties. Identical inputs
//!   always produce identical outputs.
//!
//! ## Public API
//!
//! - `LossCalculator`: The main struct that contains the calculation logic.
//! - `LossBudget`: Evaluates measurements against named loss-bound profiles.
//! - `split_power`: Ideal passive-splitter loss and per-port output power.
//! - `AttenuationError`: The specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod coefficients;
pub mod engine;
pub mod error;
pub mod limits;
pub mod splitter;

// Re-export the key components to create a clean, public-facing API.
pub use coefficients::{
    supported_wavelengths, Coefficients, CONNECTOR_LOSS_DB, SPLICE_LOSS_DB, SUPPORTED_PAIRS,
};
pub use engine::LossCalculator;
pub use error::AttenuationError;
pub use limits::{BudgetCheck, LossBudget, LossBudgetProfile, CONSERVATIVE, PERMISSIVE};
pub use splitter::{split_power, SplitterSplit};
