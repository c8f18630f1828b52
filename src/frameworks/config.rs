use crate::interface_adapters::clients::EDSM_SPHERE_SYSTEMS_URL;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::{env, error::Error, fmt, fs, io};

pub const DEFAULT_CONFIG_FILE: &str = "default-config.json";
pub const USER_CONFIG_FILE: &str = "user-config.json";

// Effective settings after the user file has been laid over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    // Directory receiving ImportStars.txt; empty means the working directory.
    #[serde(rename = "OutputDir")]
    pub output_dir: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    NotAnObject { path: PathBuf },
    Invalid(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "config file {} is not accessible: {source}", path.display())
            }
            ConfigError::Json { path, source } => {
                write!(f, "config file {} is not valid JSON: {source}", path.display())
            }
            ConfigError::NotAnObject { path } => {
                write!(f, "config file {} must contain a JSON object", path.display())
            }
            ConfigError::Invalid(source) => write!(f, "effective configuration is invalid: {source}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json { source, .. } | ConfigError::Invalid(source) => Some(source),
            ConfigError::NotAnObject { .. } => None,
        }
    }
}

// Directory holding both config files: DZHNV_CONFIG_DIR, else next to the executable.
pub fn config_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = env::var("DZHNV_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let exe = env::current_exe()?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}

pub fn edsm_api_url() -> String {
    env::var("EDSM_API_URL").unwrap_or_else(|_| EDSM_SPHERE_SYSTEMS_URL.to_string())
}

/// Loads the effective configuration from `dir`, creating missing files first.
///
/// `default-config.json` is seeded with the built-in defaults and
/// `user-config.json` with an empty object. Only keys present in the default
/// document are taken from the user document.
pub fn load(dir: &Path) -> Result<ClientConfig, ConfigError> {
    let default_path = dir.join(DEFAULT_CONFIG_FILE);
    let user_path = dir.join(USER_CONFIG_FILE);

    let seed = serde_json::to_string(&ClientConfig::default()).map_err(|source| {
        ConfigError::Json {
            path: default_path.clone(),
            source,
        }
    })?;
    ensure_file(&default_path, &seed)?;
    ensure_file(&user_path, "{}")?;

    let defaults = read_object(&default_path)?;
    let user = read_object(&user_path)?;
    let merged = merge(defaults, &user);

    let config: ClientConfig =
        serde_json::from_value(Value::Object(merged)).map_err(ConfigError::Invalid)?;
    tracing::info!(output_dir = %config.output_dir.display(), "configuration loaded.");
    Ok(config)
}

/// Overlays `user` onto `defaults` key by key. User-only keys are dropped.
pub fn merge(defaults: Map<String, Value>, user: &Map<String, Value>) -> Map<String, Value> {
    for key in user.keys().filter(|key| !defaults.contains_key(*key)) {
        tracing::warn!(%key, "ignoring user setting without a default.");
    }

    defaults
        .into_iter()
        .map(|(key, default)| {
            let value = user.get(&key).cloned().unwrap_or(default);
            (key, value)
        })
        .collect()
}

fn ensure_file(path: &Path, contents: &str) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, contents).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "created config file.");
    Ok(())
}

fn read_object(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}
