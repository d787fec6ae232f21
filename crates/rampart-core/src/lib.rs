//! Game state store and service configuration for Rampart.
//!
//! - [`store`] -- [`GameState`], the single owner of the placement sequence
//! - [`config`] -- [`ServiceConfig`], loaded from `rampart-config.yaml`

pub mod config;
pub mod store;

pub use config::{ConfigError, ServiceConfig};
pub use store::GameState;
