//! Jenkins server entries and the top-level config document
//!
//! Mirrors the on-disk YAML layout: a `current` server name plus the ordered
//! `jenkins_servers` list. Missing keys fall back to empty values so that
//! hand-edited files with partial entries still load.

use serde::{Deserialize, Serialize};

use crate::constants::sample;

/// Connection settings for one Jenkins server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JenkinsServer {
    /// Identifier used by `current` and by lookups
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub username: String,
    /// API token, stored in plaintext
    #[serde(default)]
    pub token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub proxy: String,
    #[serde(
        default,
        rename = "proxyAuth",
        skip_serializing_if = "String::is_empty"
    )]
    pub proxy_auth: String,
}

/// Config file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the active server, empty when unset.
    /// Not required to match any entry in `servers`.
    #[serde(default)]
    pub current: String,
    #[serde(default, rename = "jenkins_servers")]
    pub servers: Vec<JenkinsServer>,
}

impl Config {
    /// Canned config printed by `config --generate`
    pub fn sample() -> Self {
        Self {
            current: sample::SERVER_NAME.to_string(),
            servers: vec![JenkinsServer {
                name: sample::SERVER_NAME.to_string(),
                url: sample::URL.to_string(),
                username: sample::USERNAME.to_string(),
                token: sample::TOKEN.to_string(),
                ..Default::default()
            }],
        }
    }

    /// First server whose name matches exactly
    pub fn find_server(&self, name: &str) -> Option<&JenkinsServer> {
        self.servers.iter().find(|server| server.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(name: &str, url: &str) -> JenkinsServer {
        JenkinsServer {
            name: name.to_string(),
            url: url.to_string(),
            username: "admin".to_string(),
            token: "secret".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config {
            current: "b".to_string(),
            servers: vec![
                server("a", "http://a.example.com"),
                JenkinsServer {
                    proxy: "http://proxy.example.com:3128".to_string(),
                    proxy_auth: "user:pass".to_string(),
                    ..server("b", "http://b.example.com")
                },
                server("c", "http://c.example.com"),
            ],
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let deserialized: Config = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(deserialized, config);
        let names: Vec<&str> = deserialized.servers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_roundtrip_empty_and_dangling_current() {
        let empty = Config::default();
        let yaml = serde_yaml::to_string(&empty).unwrap();
        assert_eq!(serde_yaml::from_str::<Config>(&yaml).unwrap(), empty);

        let dangling = Config {
            current: "gone".to_string(),
            servers: vec![server("a", "http://a.example.com")],
        };
        let yaml = serde_yaml::to_string(&dangling).unwrap();
        assert_eq!(serde_yaml::from_str::<Config>(&yaml).unwrap(), dangling);
    }

    #[test]
    fn test_yaml_key_names() {
        let config = Config {
            current: "a".to_string(),
            servers: vec![JenkinsServer {
                proxy: "http://proxy:3128".to_string(),
                proxy_auth: "user:pass".to_string(),
                ..server("a", "http://a")
            }],
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("current: a"));
        assert!(yaml.contains("jenkins_servers:"));
        assert!(yaml.contains("username: admin"));
        assert!(yaml.contains("proxyAuth:"));
        assert!(!yaml.contains("proxy_auth"));
    }

    #[test]
    fn test_optional_proxy_fields_omitted_when_empty() {
        let yaml = serde_yaml::to_string(&Config::sample()).unwrap();
        assert!(!yaml.contains("proxy"));
    }

    #[test]
    fn test_partial_entries_use_defaults() {
        let yaml = "jenkins_servers:\n  - name: a\n    url: http://a\n    unknown: ignored\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.current, "");
        assert_eq!(config.servers.len(), 1);
        assert_eq!(config.servers[0].username, "");
        assert_eq!(config.servers[0].token, "");
        assert_eq!(config.servers[0].proxy, "");
    }

    #[test]
    fn test_find_server_returns_first_match() {
        let config = Config {
            current: String::new(),
            servers: vec![
                server("a", "http://first"),
                server("b", "http://b"),
                server("a", "http://second"),
            ],
        };

        assert_eq!(config.find_server("a").unwrap().url, "http://first");
        assert_eq!(config.find_server("b").unwrap().url, "http://b");
        assert!(config.find_server("A").is_none());
        assert!(config.find_server("c").is_none());
    }

    #[test]
    fn test_sample_config() {
        let sample = Config::sample();

        assert_eq!(sample.current, "yourServer");
        assert_eq!(sample.servers.len(), 1);
        assert_eq!(sample.servers[0].name, "yourServer");
        assert_eq!(sample.servers[0].url, "http://localhost:8080/jenkins");
        assert_eq!(sample.servers[0].username, "admin");
    }
}
