use pagecraft_sections::DuplicatePolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog package files, loaded in order
    #[serde(default = "default_catalogs")]
    pub catalogs: Vec<String>,

    /// Maximum undo levels per page (0 = unlimited)
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,

    /// How repeated section/template ids are handled
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Prefix for generated section instance ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_catalogs() -> Vec<String> {
    vec!["catalog.json".to_string()]
}

fn default_history_depth() -> usize {
    100
}

fn default_id_prefix() -> String {
    "s".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Absolute paths of the catalog packages
    pub fn catalog_paths(&self, cwd: &str) -> Vec<PathBuf> {
        self.catalogs
            .iter()
            .map(|catalog| PathBuf::from(cwd).join(catalog))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogs: default_catalogs(),
            history_depth: default_history_depth(),
            duplicate_policy: DuplicatePolicy::default(),
            id_prefix: default_id_prefix(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "catalogs": ["sections/core.json", "sections/creator.json"],
            "historyDepth": 25,
            "duplicatePolicy": "reject",
            "idPrefix": "sec"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.catalogs, vec!["sections/core.json", "sections/creator.json"]);
        assert_eq!(config.history_depth, 25);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.id_prefix, "sec");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalogs, vec!["catalog.json"]);
        assert_eq!(config.history_depth, 100);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Overwrite);
        assert_eq!(config.id_prefix, "s");
    }

    #[test]
    fn test_load_missing_and_present() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        let config = Config::load(cwd).unwrap();
        assert_eq!(config.history_depth, 100);

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "logLevel": "debug" }"#).unwrap();
        let config = Config::load(cwd).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.catalog_paths(cwd), vec![dir.path().join("catalog.json")]);
    }
}
