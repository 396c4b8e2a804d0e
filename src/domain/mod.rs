//! Domain aggregates exposed by the ledger service layer.

pub mod client;
pub mod status;
pub mod types;
