//! Config file location
//!
//! The file lives directly under the user's home directory:
//! - Windows: `%HOMEDRIVE%%HOMEPATH%\.jenkins-cli.yaml` (or `%USERPROFILE%`)
//! - Linux:   `$XDG_CONFIG_HOME/.jenkins-cli.yaml` when set, else `$HOME`
//! - Others:  `$HOME/.jenkins-cli.yaml`

use std::path::PathBuf;

use tracing::debug;

use crate::config::error::{ConfigError, Result};
use crate::constants::{config, env};

/// Resolves the home directory for `os` from an environment lookup.
///
/// Returns an empty string when none of the consulted variables are set.
pub fn resolve_home<F>(os: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).unwrap_or_default();

    match os {
        "windows" => {
            let home = var(env::HOMEDRIVE) + &var(env::HOMEPATH);
            if home.is_empty() {
                var(env::USERPROFILE)
            } else {
                home
            }
        }
        "linux" => {
            let xdg = var(env::XDG_CONFIG_HOME);
            if xdg.is_empty() { var(env::HOME) } else { xdg }
        }
        _ => var(env::HOME),
    }
}

/// Home directory of the current user, from the process environment
pub fn user_home_dir() -> Result<PathBuf> {
    let home = resolve_home(std::env::consts::OS, |key| std::env::var(key).ok());
    if !home.is_empty() {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir().ok_or(ConfigError::NoHomeDir)
}

/// Default location of the config file
pub fn default_config_path() -> Result<PathBuf> {
    let path = user_home_dir()?.join(config::FILENAME);
    debug!(path = %path.display(), "Resolved default config path");
    Ok(path)
}
