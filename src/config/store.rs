//! In-memory config bound to its file on disk
//!
//! A `ConfigStore` is created once per invocation by loading the config file,
//! handed to the command handler, and written back to the same path on save.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::error::{ConfigError, Result};
use crate::config::paths;
use crate::config::server::{Config, JenkinsServer};

#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    config: Config,
}

impl ConfigStore {
    /// Load the config file at `path`; later saves write back to it.
    ///
    /// An empty file yields an empty config.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        let config = if contents.trim().is_empty() {
            debug!(path = %path.display(), "Config file is empty");
            Config::default()
        } else {
            serde_yaml::from_str::<Config>(&contents).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        };

        info!(
            path = %path.display(),
            servers = config.servers.len(),
            "Loaded config"
        );
        Ok(Self { path, config })
    }

    /// Load from the default location in the user's home directory
    pub fn load_default() -> Result<Self> {
        Self::load(paths::default_config_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Server named by `current`, if it is set and resolves
    pub fn current_server(&self) -> Option<&JenkinsServer> {
        let current = &self.config.current;
        if current.is_empty() {
            return None;
        }

        let server = self.config.find_server(current);
        if server.is_none() {
            warn!(current = %current, "Current Jenkins does not match any configured server");
        }
        server
    }

    /// Case-sensitive lookup; returns the first server with this name
    pub fn find_server_by_name(&self, name: &str) -> Option<&JenkinsServer> {
        self.config.find_server(name)
    }

    /// Make `name` the current server and persist the change.
    ///
    /// Nothing changes if no server has that name. If the write fails the
    /// previous value is restored in memory.
    pub fn set_current(&mut self, name: &str) -> Result<()> {
        if self.find_server_by_name(name).is_none() {
            return Err(ConfigError::ServerNotFound(name.to_string()));
        }

        let previous = std::mem::replace(&mut self.config.current, name.to_string());
        if let Err(e) = self.save() {
            self.config.current = previous;
            return Err(e);
        }

        info!(current = %name, "Switched current Jenkins");
        Ok(())
    }

    /// Write the whole config back to the file it was loaded from.
    ///
    /// The file is overwritten in place.
    pub fn save(&self) -> Result<()> {
        let yaml = serde_yaml::to_string(&self.config)?;

        fs::write(&self.path, yaml).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), "Saved config");
        Ok(())
    }

    /// YAML text of the sample config, for bootstrapping a new file
    pub fn generate_sample() -> Result<String> {
        Ok(serde_yaml::to_string(&Config::sample())?)
    }
}
