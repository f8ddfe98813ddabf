//! Application-wide constants
//!
//! This module contains the string literals used throughout the CLI,
//! providing a single source of truth for file names, environment variables,
//! sample values and output formats.

/// Configuration paths and filenames
pub mod config {
    /// Configuration filename, placed directly under the resolved home directory
    pub const FILENAME: &str = ".jenkins-cli.yaml";

    /// Environment variable overriding the configuration file location
    pub const PATH_ENV: &str = "JCLI_CONFIG";
}

/// Environment variables consulted when resolving the home directory
pub mod env {
    /// Unix home directory
    pub const HOME: &str = "HOME";

    /// XDG config base, preferred over `HOME` on Linux
    pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";

    /// Windows drive letter part of the profile path (e.g. `C:`)
    pub const HOMEDRIVE: &str = "HOMEDRIVE";

    /// Windows path part of the profile path (e.g. `\Users\me`)
    pub const HOMEPATH: &str = "HOMEPATH";

    /// Windows fallback profile path
    pub const USERPROFILE: &str = "USERPROFILE";
}

/// Values of the generated sample configuration
pub mod sample {
    pub const SERVER_NAME: &str = "yourServer";
    pub const URL: &str = "http://localhost:8080/jenkins";
    pub const USERNAME: &str = "admin";
    pub const TOKEN: &str = "111e3a2f0231198855dceaff96f20540a9";
}

/// Text printed by the `config` subcommand
pub mod output {
    /// Header line of `config --list`
    pub const LIST_HEADER: &str = "number-name\turl";
}
