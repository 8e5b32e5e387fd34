//! Integration test suite.
//!
//! 1. End-to-end scenarios over the public entry points
//! 2. Properties that must hold for every table shape

pub mod helpers;
pub mod properties;
pub mod scenarios;
