use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use phonebook_store::PhonePolicy;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonebook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PROMPT: &str = ">>>> ";
pub const DEFAULT_FAREWELL: &str = "Goodbye!";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub prompt: String,
    pub farewell: String,
    pub phones: PhonesConfig,
}

#[derive(Debug, Clone)]
pub struct PhonesConfig {
    pub allow_duplicates: bool,
}

impl PhonesConfig {
    pub fn policy(&self) -> PhonePolicy {
        if self.allow_duplicates {
            PhonePolicy::AllowDuplicates
        } else {
            PhonePolicy::RejectDuplicates
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            farewell: DEFAULT_FAREWELL.to_string(),
            phones: PhonesConfig {
                allow_duplicates: true,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    prompt: Option<String>,
    farewell: Option<String>,
    phones: Option<PhonesFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhonesFile {
    allow_duplicates: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) if path.as_os_str().is_empty() => Err(ConfigError::InvalidConfigPath(path)),
        Some(path) => Ok(path),
        None => default_config_path(env::var_os("XDG_CONFIG_HOME"), dirs::home_dir()),
    }
}

/// An empty `XDG_CONFIG_HOME` counts as unset.
fn default_config_path(
    xdg_config_home: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    let base = match xdg_config_home.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => home.ok_or(ConfigError::MissingHomeDir)?.join(".config"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(prompt) = parsed.prompt {
        if prompt.is_empty() {
            return Err(ConfigError::EmptyPrompt);
        }
        config.prompt = prompt;
    }

    if let Some(farewell) = parsed.farewell {
        config.farewell = farewell;
    }

    if let Some(phones) = parsed.phones {
        if let Some(allow_duplicates) = phones.allow_duplicates {
            config.phones.allow_duplicates = allow_duplicates;
        }
    }

    Ok(config)
}
