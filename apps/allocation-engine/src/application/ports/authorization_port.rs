//! Authorization port
//!
//! Capability checks consulted before every mutating operation. The
//! real identity system lives outside this crate; callers plug in
//! whatever directory they have.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::shared::IdentityId;

/// Capability queries against the caller-identity system.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationPort: Send + Sync {
    /// May this identity perform manager-level actions?
    async fn is_manager(&self, identity: &IdentityId) -> bool;

    /// May this identity perform administrator-level actions?
    async fn is_administrator(&self, identity: &IdentityId) -> bool;
}

/// In-memory role sets, for tests and single-process deployments.
#[derive(Debug, Default, Clone)]
pub struct StaticRoleGate {
    managers: HashSet<String>,
    administrators: HashSet<String>,
}

impl StaticRoleGate {
    /// Create an empty gate that denies everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant the manager capability to an identity.
    #[must_use]
    pub fn with_manager(mut self, identity: impl Into<String>) -> Self {
        self.managers.insert(identity.into());
        self
    }

    /// Grant the administrator capability to an identity.
    #[must_use]
    pub fn with_administrator(mut self, identity: impl Into<String>) -> Self {
        self.administrators.insert(identity.into());
        self
    }
}

#[async_trait]
impl AuthorizationPort for StaticRoleGate {
    async fn is_manager(&self, identity: &IdentityId) -> bool {
        self.managers.contains(identity.as_str())
    }

    async fn is_administrator(&self, identity: &IdentityId) -> bool {
        self.administrators.contains(identity.as_str())
    }
}
