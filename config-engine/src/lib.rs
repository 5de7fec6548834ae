//! Layered configuration for the SagarCare ward engine
//!
//! Values are merged from, in increasing priority:
//! - built-in defaults (any `Serialize` value)
//! - configuration files (TOML, JSON or YAML, chosen by extension)
//! - environment variables under a prefix, nested keys split on `__`
//!
//! # Example
//!
//! ```rust,no_run
//! use config_engine::{ConfigEngine, ConfigSource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! #[serde(default)]
//! struct AppConfig {
//!     database_url: String,
//!     log_level: String,
//! }
//!
//! # fn main() -> Result<(), config_engine::ConfigError> {
//! let config: AppConfig = ConfigEngine::new()
//!     .with_defaults(&AppConfig::default())
//!     .add_source(ConfigSource::optional_file("sagarcare.toml"))
//!     .add_source(ConfigSource::env("SAGARCARE_"))
//!     .load()?;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod providers;

pub use engine::*;
pub use error::*;
pub use providers::*;
