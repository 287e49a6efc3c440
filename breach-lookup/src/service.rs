use serde::Serialize;

use crate::client::BreachLookupClient;
use crate::config::TenantGate;
use crate::error::Error;
use crate::hash::{sha1_hex, split_digest};

/// Outcome of a breach check.
///
/// A count of zero means the password was not found, or the checker is not
/// usable for the tenant. Serializes as the `{"count": <int>}` wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreachResult {
    pub count: u64,
}

/// Composes the tenant gate, hasher and range client into the two public
/// operations of the checker.
///
/// Holds no mutable state; a single instance is safe to share across
/// concurrent callers.
pub struct BreachCheckService {
    gate: TenantGate,
    client: BreachLookupClient,
}

impl BreachCheckService {
    pub fn new(gate: TenantGate, client: BreachLookupClient) -> Self {
        Self { gate, client }
    }

    /// Advisory enablement probe.
    ///
    /// Reflects only the enable flag, whether or not an API key is present,
    /// and degrades to `false` when the configuration cannot be resolved.
    /// Never fails a caller's status check.
    pub async fn is_enabled(&self, tenant: &str) -> bool {
        match self.gate.resolve(tenant).await {
            Ok(cfg) => cfg.enabled,
            Err(err) => {
                tracing::debug!(tenant, error = %err, "unresolvable configuration, reporting disabled");
                false
            }
        }
    }

    /// Reports how many times the password appears in the breach corpus.
    ///
    /// A tenant that is disabled or missing an API key short-circuits to a
    /// zero count before any hashing or network I/O. Past that gate, every
    /// failure surfaces as [`Error::BreachCheck`] with the cause attached,
    /// so a failed lookup can never be mistaken for "not breached".
    #[tracing::instrument(skip(self, password))]
    pub async fn check_password(
        &self,
        password: &str,
        tenant: &str,
    ) -> Result<BreachResult, Error> {
        let cfg = self.gate.resolve(tenant).await.map_err(Error::into_check_error)?;
        if !cfg.is_usable() {
            return Ok(BreachResult { count: 0 });
        }

        let digest = sha1_hex(password);
        let (prefix, suffix) = split_digest(&digest).map_err(Error::into_check_error)?;

        let counts =
            self.client.query(&cfg.api_key, prefix).await.map_err(Error::into_check_error)?;

        Ok(BreachResult { count: counts.get(suffix).copied().unwrap_or(0) })
    }
}
