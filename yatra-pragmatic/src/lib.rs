//! Pragmatic crate allows users to specify trip requests and attraction catalogs via simple
//! **pragmatic** json format and to get itineraries back as json or plain text.
//!
//! Besides format models, it contains a set of validation rules which report problems with
//! coded [`format::FormatError`] entries instead of failing on the first one.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod format;
pub mod validation;
