//! CLI configuration.

use anyhow::{Context, Result};
use relay_catalog::reconcile::OrphanPolicy;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Mapping configuration.
    #[serde(default)]
    pub mapping: MappingConfig,

    /// Record source configuration.
    #[serde(default)]
    pub source: SourceConfig,
}

impl RelayConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Mapping pass settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Channel tag stamped on product payloads.
    #[serde(default = "default_channel")]
    pub channel: String,

    /// What to do with matrix children whose parent is missing.
    #[serde(default)]
    pub orphan_policy: OrphanPolicy,
}

fn default_channel() -> String {
    relay_catalog::DEFAULT_CHANNEL.to_string()
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            orphan_policy: OrphanPolicy::default(),
        }
    }
}

/// Record source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to a fixture file backing the in-memory source.
    #[serde(default)]
    pub fixture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.mapping.channel, "NetSuite");
        assert_eq!(config.mapping.orphan_policy, OrphanPolicy::Lenient);
        assert!(config.source.fixture.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let config: RelayConfig = toml::from_str(
            r#"
            [mapping]
            channel = "NetSuite Sandbox"
            orphan_policy = "strict"

            [source]
            fixture = "fixtures/inventory.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.mapping.channel, "NetSuite Sandbox");
        assert_eq!(config.mapping.orphan_policy, OrphanPolicy::Strict);
        assert_eq!(config.source.fixture.as_deref(), Some("fixtures/inventory.json"));
    }
}
