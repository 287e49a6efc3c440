use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Error;

/// Boxed error type returned by configuration providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Per-tenant settings for the breach checker.
///
/// Read-only input, fetched fresh on every call. A config with the checker
/// disabled or a blank API key means "feature unavailable"; there is no
/// partial-enabled state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantConfig {
    pub enabled: bool,
    pub api_key: String,
}

impl TenantConfig {
    /// True when the checker may actually query the provider: enabled and
    /// holding a non-blank API key.
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}

/// Source of per-tenant connector properties.
///
/// A provider returns exactly two string values for a tenant, in order: the
/// enable flag and the API key. Anything else is treated by [`TenantGate`]
/// as an unavailable configuration.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn resolve(&self, tenant: &str) -> Result<Vec<String>, BoxError>;
}

/// Resolves and validates tenant configuration ahead of any hashing or
/// network I/O, so disabled tenants never hash or transmit anything.
pub struct TenantGate {
    provider: Arc<dyn ConfigProvider>,
}

impl TenantGate {
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self { provider }
    }

    /// Fetches the tenant's config from the provider. Nothing is cached.
    ///
    /// The enable flag parses case-insensitively as `"true"`; any other
    /// value is disabled.
    pub async fn resolve(&self, tenant: &str) -> Result<TenantConfig, Error> {
        let properties =
            self.provider.resolve(tenant).await.map_err(|source| Error::ConfigUnavailable {
                tenant: tenant.to_string(),
                source,
            })?;

        let [enabled, api_key]: [String; 2] =
            properties.try_into().map_err(|properties: Vec<String>| {
                Error::ConfigUnavailable {
                    tenant: tenant.to_string(),
                    source: format!(
                        "expected 2 connector properties, got {}",
                        properties.len()
                    )
                    .into(),
                }
            })?;

        Ok(TenantConfig { enabled: enabled.eq_ignore_ascii_case("true"), api_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProvider(Vec<String>);

    #[async_trait]
    impl ConfigProvider for StaticProvider {
        async fn resolve(&self, _tenant: &str) -> Result<Vec<String>, BoxError> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ConfigProvider for FailingProvider {
        async fn resolve(&self, _tenant: &str) -> Result<Vec<String>, BoxError> {
            Err("store offline".into())
        }
    }

    fn gate(properties: Vec<&str>) -> TenantGate {
        TenantGate::new(Arc::new(StaticProvider(
            properties.into_iter().map(String::from).collect(),
        )))
    }

    #[tokio::test]
    async fn resolve_parses_enable_flag_case_insensitively() {
        let cfg = gate(vec!["TRUE", "key"]).resolve("acme").await.unwrap();
        assert!(cfg.enabled);
        assert_eq!(cfg.api_key, "key");

        let cfg = gate(vec!["false", "key"]).resolve("acme").await.unwrap();
        assert!(!cfg.enabled);

        let cfg = gate(vec!["yes", "key"]).resolve("acme").await.unwrap();
        assert!(!cfg.enabled);
    }

    #[tokio::test]
    async fn resolve_rejects_wrong_property_arity() {
        let err = gate(vec!["true"]).resolve("acme").await.unwrap_err();
        assert!(matches!(err, Error::ConfigUnavailable { .. }));

        let err = gate(vec!["true", "key", "extra"]).resolve("acme").await.unwrap_err();
        assert!(matches!(err, Error::ConfigUnavailable { .. }));
    }

    #[tokio::test]
    async fn resolve_surfaces_provider_failure() {
        let gate = TenantGate::new(Arc::new(FailingProvider));
        let err = gate.resolve("acme").await.unwrap_err();
        assert!(matches!(err, Error::ConfigUnavailable { tenant, .. } if tenant == "acme"));
    }

    #[test]
    fn usability_requires_enable_flag_and_non_blank_key() {
        let usable = TenantConfig { enabled: true, api_key: "key".into() };
        assert!(usable.is_usable());

        let disabled = TenantConfig { enabled: false, api_key: "key".into() };
        assert!(!disabled.is_usable());

        let blank_key = TenantConfig { enabled: true, api_key: "   ".into() };
        assert!(!blank_key.is_usable());

        let empty_key = TenantConfig { enabled: true, api_key: String::new() };
        assert!(!empty_key.is_usable());
    }
}
