//! Diesel models and external configuration types.

pub mod client;
#[cfg(feature = "cli")]
pub mod config;
