//! Configuration module

use crate::types::NameKind;
use serde::{Deserialize, Serialize};

/// Registry configuration
///
/// The only tunable is the allow-list of timer name kinds. The list is
/// ordinary data so deployments can admit custom kinds from a config file
/// instead of patching code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Name kinds accepted by `validate`
    pub allowed_kinds: Vec<NameKind>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            allowed_kinds: vec![NameKind::Int, NameKind::Float, NameKind::Text],
        }
    }
}

impl RegistryConfig {
    /// Load config from the file named by `PTIME_CONFIG`, falling back to
    /// the defaults when the variable is unset or the file is absent.
    pub fn from_env() -> anyhow::Result<Self> {
        let config_path =
            std::env::var("PTIME_CONFIG").unwrap_or_else(|_| "config/ptime.json".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: RegistryConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(RegistryConfig::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
