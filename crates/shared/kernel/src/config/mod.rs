use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use v2g_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};

/// Error raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error ({context}): {source}")]
    Config {
        #[source]
        source: config::ConfigError,
        context: Cow<'static, str>,
    },
}

trait ConfigResultExt<T> {
    fn context(self, context: &'static str) -> Result<T, ConfigError>;
}

impl<T> ConfigResultExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: &'static str) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: context.into() })
    }
}

/// Loads layered configuration: a settings file, then environment overrides.
///
/// 1. **File**: `path` when given (must exist), otherwise the optional `server` file
///    (`server.toml`, `server.json`, ...) in the working directory.
/// 2. **Environment**: variables prefixed with `V2G__`, nesting with double
///    underscores. `V2G__SERVER__PORT=9000` sets `server.port`.
///
/// Fields missing from every source fall back to the target type's serde defaults.
///
/// # Errors
/// Returns [`ConfigError`] when an explicit file is missing, a source cannot be parsed,
/// or the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use v2g_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     #[serde(default)]
///     port: u16,
/// }
///
/// let cfg: Settings = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path.as_ref().map(AsRef::as_ref), None)
}

/// Like [`load_config`], but reads overrides from `vars` instead of the process
/// environment. Keys use the same `V2G__SECTION__FIELD` form.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, I>(path: Option<impl AsRef<Path>>, vars: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    load(path.as_ref().map(AsRef::as_ref), Some(vars.into_iter().collect()))
}

fn load<T>(path: Option<&Path>, vars: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(vars),
        );

    if required {
        info!("Loading config from {}", effective_path.display());
    } else {
        debug!("Loading optional config from {}", effective_path.display());
    }

    builder
        .build()
        .context("failed to build config")?
        .try_deserialize::<T>()
        .context("failed to deserialize config")
}
