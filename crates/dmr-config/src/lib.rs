//! DMR FleetWatch configuration management
//!
//! This crate provides configuration loading and parsing:
//! - TOML configuration file parsing
//! - Monitor configuration structure with operational defaults

pub mod monitor_config;
pub mod toml_config;

pub use monitor_config::*;
pub use toml_config::*;
