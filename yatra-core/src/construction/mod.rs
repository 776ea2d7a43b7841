//! The construction module contains the logic to select attractions and to distribute them across days.

mod filter;
pub use self::filter::*;

mod partition;
pub use self::partition::*;
