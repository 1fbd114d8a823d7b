use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::simulator::SimulatorConfig;

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub simulator: SimulatorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let simulator = load_simulator_config()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            simulator,
        })
    }
}

fn load_simulator_config() -> Result<SimulatorConfig, ConfigError> {
    let defaults = SimulatorConfig::default();

    let noise_std_dev = match env::var("SIM_NOISE_STD_DEV") {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidNoiseStdDev { value: raw.clone() })?;
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidNoiseStdDev { value: raw });
            }
            value
        }
        Err(_) => defaults.noise_std_dev,
    };

    let seed = match env::var("SIM_SEED") {
        Ok(raw) if raw.trim().is_empty() => None,
        Ok(raw) => Some(
            raw.trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed { value: raw })?,
        ),
        Err(_) => defaults.seed,
    };

    Ok(SimulatorConfig {
        noise_std_dev,
        seed,
    })
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNoiseStdDev { value: String },
    InvalidSeed { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNoiseStdDev { value } => write!(
                f,
                "SIM_NOISE_STD_DEV must be a finite, non-negative number (got '{value}')"
            ),
            ConfigError::InvalidSeed { value } => {
                write!(f, "SIM_SEED must be a valid u64 (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNoiseStdDev { .. }
            | ConfigError::InvalidSeed { .. } => None,
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
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("SIM_NOISE_STD_DEV");
        env::remove_var("SIM_SEED");
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
        assert_eq!(config.simulator, SimulatorConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_simulator_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SIM_NOISE_STD_DEV", "0");
        env::set_var("SIM_SEED", "42");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.simulator.noise_std_dev, 0.0);
        assert_eq!(config.simulator.seed, Some(42));
        reset_env();
    }

    #[test]
    fn rejects_negative_noise() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SIM_NOISE_STD_DEV", "-1.5");
        match AppConfig::load() {
            Err(ConfigError::InvalidNoiseStdDev { value }) => assert_eq!(value, "-1.5"),
            other => panic!("expected invalid noise error, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn rejects_malformed_seed() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SIM_SEED", "not-a-number");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidSeed { .. })
        ));
        reset_env();
    }
}
