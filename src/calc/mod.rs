//! Household energy-balance calculator.
//!
//! [`calculate`] maps a [`crate::input::SimulationInput`] to a
//! [`SimulationResult`]: a runtime or charge-time estimate plus a star
//! rating. It holds no state, performs no I/O and never fails.

/// Daily demand, generation and storage arithmetic.
pub mod balance;
mod calculator;
/// Discrete star ratings.
pub mod rating;
pub mod types;

pub use balance::EnergyBalance;
pub use calculator::calculate;
pub use rating::StarRating;
pub use types::{Estimate, SimulationResult};
