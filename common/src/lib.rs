//! Pure helpers shared by the gateway configuration tooling: address forms,
//! list reconciliation, size units, LIO formatting and configuration.

pub mod config;
pub mod diff;
pub mod error;
pub mod lio;
pub mod network;
pub mod size;

pub use error::GatewayError;
