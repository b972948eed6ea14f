//! Household solar and battery energy-balance calculator.
//!
//! ```
//! use house_energy_sim::calc::{StarRating, calculate};
//! use house_energy_sim::input::SimulationInput;
//! use house_energy_sim::loads::Appliance;
//!
//! let input = SimulationInput::new(0, 5).with_load(Appliance::Fan, true, 10.0);
//! let result = calculate(&input);
//! assert_eq!(result.result_text, "120.0 hours of runtime");
//! assert_eq!(result.star_rating, StarRating::Five);
//! ```

#[cfg(feature = "api")]
pub mod api;
pub mod calc;
pub mod cli;
pub mod config;
pub mod input;
pub mod io;
/// Panel and battery grid placement.
pub mod layout;
pub mod loads;
pub mod report;
pub mod sweep;
pub mod telemetry;
#[cfg(feature = "tui")]
pub mod tui;
