// SPDX-FileCopyrightText: 2026 Cursus Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The name of the Cursus application.
pub const APP_NAME: &str = "cursus";

const CURSUS_CONFIG_ENV: &str = "CURSUS_CONFIG";

/// Resolved configuration for the Cursus CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the enrolled-courses snapshot (JSON).
    pub courses_path: PathBuf,

    /// Directory holding the draft session file.
    pub state_dir: PathBuf,
}

/// Locate and parse the configuration file.
///
/// Priority: explicit `--config` flag, then the `CURSUS_CONFIG` environment
/// variable, then `config.toml` under the user config directory.
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CURSUS_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    let raw: ConfigRaw = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {e}", path.display()))?
        .parse()?;

    let courses_path = expand_path(&raw.courses_path)?;
    let state_dir = match &raw.state_dir {
        Some(dir) => expand_path(dir)
            .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
        None => get_state_dir()?.join(APP_NAME),
    };

    Ok(Config {
        courses_path,
        state_dir,
    })
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    courses_path: PathBuf,

    #[serde(default)]
    state_dir: Option<PathBuf>,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| format!("Failed to parse config: {e}").into())
    }
}

/// Handle tilde and home environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".into())
}
