//! Core crate contains the main building blocks to turn a static catalog of attractions into
//! a ***day-by-day travel itinerary***.
//!
//! The planning is a pure function of its inputs: attractions of the requested city are filtered
//! by selected interests and then sliced into consecutive days.
//!
//! # Examples
//!
//! ```
//! use yatra_core::prelude::*;
//!
//! let catalog = get_builtin_catalog();
//! let days = generate_itinerary(&catalog, "Delhi", 3, &[Interest::HeritageCulture]).unwrap();
//!
//! assert_eq!(days.len(), 3);
//! assert_eq!(days[0].attractions[0].name, "Red Fort");
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[macro_use]
mod macros;

pub mod construction;
pub mod models;
pub mod planner;
pub mod prelude;
pub mod utils;
