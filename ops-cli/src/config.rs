use admission_service::AdmissionPolicy;
use billing_service::FeeSchedule;
use config_engine::{ConfigEngine, ConfigError, ConfigSource};
use database_layer::LocalStoreConfig;
use logger_redacted::LoggerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variables overriding the configuration file, e.g.
/// `SAGARCARE_STORE__URL` or `SAGARCARE_FEES__ICU_ROOM`
pub const ENV_PREFIX: &str = "SAGARCARE_";

/// Everything the front desk needs at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: LocalStoreConfig,
    pub admission: AdmissionPolicy,
    pub fees: FeeSchedule,
    pub logging: LoggerConfig,
}

impl AppConfig {
    /// Defaults, then `path` if it exists, then the environment
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        ConfigEngine::new()
            .with_defaults(&AppConfig::default())
            .add_source(ConfigSource::optional_file(path))
            .add_source(ConfigSource::env(ENV_PREFIX))
            .load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use logger_redacted::LogFormat;

    #[test]
    fn test_missing_file_gives_defaults() {
        Jail::expect_with(|_jail| {
            let config = AppConfig::load(Path::new("sagarcare.toml")).map_err(|e| e.to_string())?;
            assert_eq!(config.store.url, "sqlite:hospital.db");
            assert_eq!(config.admission.max_id_attempts, 16);
            assert_eq!(config.fees, FeeSchedule::default());
            assert!(config.logging.redaction_enabled);
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env_layers() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "sagarcare.toml",
                r#"
                [store]
                url = "sqlite:ward.db"
                seed_rooms = false

                [fees]
                icu_room = 5500

                [logging]
                format = "json"
                "#,
            )?;
            jail.set_env("SAGARCARE_FEES__DOCTOR_FEE", "900");
            jail.set_env("SAGARCARE_ADMISSION__MAX_ID_ATTEMPTS", "4");

            let config = AppConfig::load(Path::new("sagarcare.toml")).map_err(|e| e.to_string())?;
            assert_eq!(config.store.url, "sqlite:ward.db");
            assert!(!config.store.seed_rooms);
            assert!(config.store.enable_wal);
            assert_eq!(config.fees.icu_room, 5500);
            assert_eq!(config.fees.doctor_fee, 900);
            assert_eq!(config.fees.private_room, 2500);
            assert_eq!(config.admission.max_id_attempts, 4);
            assert_eq!(config.logging.format, LogFormat::Json);
            Ok(())
        });
    }
}
