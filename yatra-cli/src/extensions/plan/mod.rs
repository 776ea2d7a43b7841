//! Contains planner configuration and helpers to produce itineraries.

pub mod config;
