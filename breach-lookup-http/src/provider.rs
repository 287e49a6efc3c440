use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use breach_lookup::{BoxError, ConfigProvider};
use serde::Deserialize;

use crate::error::Error;

/// Connector settings for one tenant, as stored in the tenants file.
///
/// The enable flag is kept as a string; the core's gate owns its parsing
/// semantics.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantEntry {
    pub enable: String,
    #[serde(default)]
    pub api_key: String,
}

/// Configuration provider backed by a JSON object keyed by tenant domain,
/// loaded once at startup:
///
/// ```json
/// { "acme.example": { "enable": "true", "api_key": "..." } }
/// ```
pub struct FileConfigProvider {
    tenants: HashMap<String, TenantEntry>,
}

impl FileConfigProvider {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)?;
        let tenants = serde_json::from_str(&raw).map_err(|source| Error::TenantFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { tenants })
    }

    pub fn from_entries(tenants: HashMap<String, TenantEntry>) -> Self {
        Self { tenants }
    }
}

#[async_trait]
impl ConfigProvider for FileConfigProvider {
    async fn resolve(&self, tenant: &str) -> Result<Vec<String>, BoxError> {
        let entry = self
            .tenants
            .get(tenant)
            .ok_or_else(|| BoxError::from(format!("no connector configuration for tenant '{tenant}'")))?;
        Ok(vec![entry.enable.clone(), entry.api_key.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> FileConfigProvider {
        let raw = r#"{ "acme": { "enable": "true", "api_key": "key" }, "beta": { "enable": "false" } }"#;
        let tenants = serde_json::from_str(raw).unwrap();
        FileConfigProvider::from_entries(tenants)
    }

    #[tokio::test]
    async fn resolves_properties_in_fixed_order() {
        let properties = provider().resolve("acme").await.unwrap();
        assert_eq!(properties, vec!["true".to_string(), "key".to_string()]);
    }

    #[tokio::test]
    async fn missing_api_key_defaults_to_blank() {
        let properties = provider().resolve("beta").await.unwrap();
        assert_eq!(properties, vec!["false".to_string(), String::new()]);
    }

    #[tokio::test]
    async fn unknown_tenant_is_an_error() {
        assert!(provider().resolve("nobody").await.is_err());
    }
}
