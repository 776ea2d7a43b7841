//! A collection of models to represent a trip request, an attraction catalog and a resulting itinerary.

mod attraction;
pub use self::attraction::*;

mod catalog;
pub use self::catalog::*;

mod plan;
pub use self::plan::*;

mod trip;
pub use self::trip::*;
