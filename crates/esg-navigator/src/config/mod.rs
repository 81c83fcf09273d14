use crate::workflows::sales::QualificationRules;
use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("ESG_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("ESG_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("ESG_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("ESG_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let rules_path = env::var("ESG_QUALIFICATION_RULES")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig { rules_path },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the lead qualification rules come from.
#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    pub rules_path: Option<PathBuf>,
}

impl ScoringConfig {
    /// Standard rules unless a JSON rules document was configured.
    pub fn qualification_rules(&self) -> Result<QualificationRules, ConfigError> {
        let Some(path) = &self.rules_path else {
            return Ok(QualificationRules::standard());
        };

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::RulesUnreadable {
            path: path.clone(),
            source,
        })?;

        let rules: QualificationRules =
            serde_json::from_str(&raw).map_err(|source| ConfigError::RulesInvalid {
                path: path.clone(),
                source,
            })?;

        rules.validate().map_err(|reason| ConfigError::RulesRejected {
            path: path.clone(),
            reason,
        })?;

        Ok(rules)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    RulesUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    RulesInvalid {
        path: PathBuf,
        source: serde_json::Error,
    },
    RulesRejected {
        path: PathBuf,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "ESG_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "ESG_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::RulesUnreadable { path, .. } => {
                write!(f, "unable to read qualification rules at {}", path.display())
            }
            ConfigError::RulesInvalid { path, source } => write!(
                f,
                "qualification rules at {} are invalid: {source}",
                path.display()
            ),
            ConfigError::RulesRejected { path, reason } => write!(
                f,
                "qualification rules at {} were rejected: {reason}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::RulesUnreadable { source, .. } => Some(source),
            ConfigError::RulesInvalid { source, .. } => Some(source),
            ConfigError::RulesRejected { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("ESG_ENV");
        env::remove_var("ESG_HOST");
        env::remove_var("ESG_PORT");
        env::remove_var("ESG_LOG_LEVEL");
        env::remove_var("ESG_QUALIFICATION_RULES");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.scoring.rules_path.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ESG_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ESG_PORT", "eighty");
        let err = AppConfig::load().expect_err("port should be rejected");
        assert!(matches!(err, ConfigError::InvalidPort));
        reset_env();
    }

    #[test]
    fn production_aliases_resolve() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ESG_ENV", "PROD");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        reset_env();
    }

    #[test]
    fn standard_rules_without_a_path() {
        let rules = ScoringConfig::default()
            .qualification_rules()
            .expect("standard rules");
        assert_eq!(rules, QualificationRules::standard());
    }

    #[test]
    fn rules_document_round_trips_through_disk() {
        let path = env::temp_dir().join(format!(
            "esg-navigator-rules-{}.json",
            std::process::id()
        ));
        let mut rules = QualificationRules::standard();
        rules.base_score = 40;
        fs::write(&path, serde_json::to_vec(&rules).expect("serialize rules"))
            .expect("write rules");

        let loaded = ScoringConfig {
            rules_path: Some(path.clone()),
        }
        .qualification_rules()
        .expect("rules load");
        fs::remove_file(&path).ok();

        assert_eq!(loaded.base_score, 40);
    }

    #[test]
    fn overlapping_status_thresholds_are_rejected() {
        let path = env::temp_dir().join(format!(
            "esg-navigator-overlap-{}.json",
            std::process::id()
        ));
        let mut rules = QualificationRules::standard();
        rules.nurture_threshold = 80;
        fs::write(&path, serde_json::to_vec(&rules).expect("serialize rules"))
            .expect("write rules");

        let err = ScoringConfig {
            rules_path: Some(path.clone()),
        }
        .qualification_rules()
        .expect_err("thresholds overlap");
        fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::RulesRejected { .. }));
        assert!(err.to_string().contains("nurture_threshold 80"));
    }

    #[test]
    fn missing_rules_file_is_reported() {
        let config = ScoringConfig {
            rules_path: Some(PathBuf::from("/nonexistent/esg-rules.json")),
        };
        let err = config.qualification_rules().expect_err("missing file");
        assert!(matches!(err, ConfigError::RulesUnreadable { .. }));
    }
}
