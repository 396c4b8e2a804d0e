//! Client ledger: a small CRM store with a pure derivation engine for
//! dashboard metrics, urgency badges and list filtering.

pub mod db;
pub mod derivation;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
