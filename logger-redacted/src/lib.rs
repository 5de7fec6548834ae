//! Logging for the SagarCare ward engine with patient contact redaction
//!
//! Log output goes through `tracing`. Messages that may carry a patient's
//! phone number or email address should be emitted with [`redacted_info!`]
//! or [`redacted_debug!`], which run the formatted text through the global
//! [`PiiRedactor`] before it reaches the subscriber.
//!
//! # Detected data
//!
//! - **Phone numbers**: `9876543210` → `********10`
//! - **Email addresses**: `asha.k@example.com` → `a***@e***`
//! - **Custom patterns**: any regex registered in [`RedactionConfig`]
//!
//! Patient ids (`P12345`), room numbers and admit dates are left readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{init_logging, redacted_info, LoggerConfig};
//!
//! init_logging(&LoggerConfig::default()).expect("logging");
//! redacted_info!("Admitted P12345, contact {}", "9876543210");
//! // Output: "Admitted P12345, contact ********10"
//! ```

pub mod config;
pub mod macros;
pub mod redactor;

pub use config::*;
pub use redactor::*;

use error_common::{CareError, CareResult};
use lazy_static::lazy_static;
use parking_lot::RwLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

lazy_static! {
    static ref GLOBAL_REDACTOR: RwLock<Option<PiiRedactor>> =
        RwLock::new(Some(PiiRedactor::default()));
}

/// Redact `text` with the global redactor. Returns the text unchanged when
/// redaction was disabled through [`LoggerConfig::redaction_enabled`].
pub fn redact(text: &str) -> String {
    match GLOBAL_REDACTOR.read().as_ref() {
        Some(redactor) => redactor.redact(text),
        None => text.to_string(),
    }
}

/// Replace the global redactor according to `config`
pub fn configure_redaction(config: &LoggerConfig) {
    let redactor = config.redaction_enabled.then(|| {
        PiiRedactor::new(RedactionConfig {
            hash_for_correlation: config.hash_for_correlation,
            ..RedactionConfig::default()
        })
    });
    *GLOBAL_REDACTOR.write() = redactor;
}

/// Default filter when `RUST_LOG` is not set
fn default_directives(level: &str) -> String {
    format!(
        "sagarcare={0},admission_service={0},billing_service={0},database_layer={0},config_engine={0},sqlx=warn",
        level
    )
}

/// Install the global tracing subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggerConfig) -> CareResult<()> {
    configure_redaction(config);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(&config.log_level)))
        .map_err(|e| CareError::Config(format!("Invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| CareError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_name_every_crate() {
        let directives = default_directives("debug");
        assert!(directives.contains("admission_service=debug"));
        assert!(directives.contains("sqlx=warn"));
        assert!(EnvFilter::try_new(directives).is_ok());
    }

    // Single test so the global redactor is not toggled concurrently
    #[test]
    fn test_configure_redaction_toggles_global_redactor() {
        assert_eq!(redact("call 9876543210"), "call ********10");

        configure_redaction(&LoggerConfig {
            redaction_enabled: false,
            ..LoggerConfig::default()
        });
        assert_eq!(redact("call 9876543210"), "call 9876543210");

        configure_redaction(&LoggerConfig::default());
        assert_eq!(redact("call 9876543210"), "call ********10");
    }
}
