use crate::constants::DISCHARGE_DEFAULT;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use strum::{Display, EnumString};

/// Top-level application configuration shared by the server and the shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Logging sinks and verbosity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    pub console: bool,
    /// Emit JSON lines to the log file instead of plain text.
    pub json: bool,
    /// Directory for daily rolling log files; no file output when unset.
    pub directory: Option<PathBuf>,
    /// Extra module directives, e.g. `v2g_dashboard=debug,tower_http=info`.
    pub filter: Option<String>,
}

/// Simulation behavior knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rules: RuleSet,
    /// Initial discharge slider position, in percent.
    pub discharge_default: u8,
}

/// Which compatibility rules the resolver applies.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RuleSet {
    /// The rules exactly as the dashboard has always applied them, including the
    /// inverted discharging verdicts.
    #[default]
    Observed,
    /// Rules derived from the charger/region/car compatibility table.
    Table,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 8050, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, json: false, directory: None, filter: None }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { rules: RuleSet::default(), discharge_default: DISCHARGE_DEFAULT }
    }
}
