//! Configuration management
//!
//! Handles the YAML file listing the known Jenkins servers and the name of
//! the current one.

pub mod error;
pub mod paths;
pub mod server;
pub mod store;

pub use server::Config;
pub use store::ConfigStore;
