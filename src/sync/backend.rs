// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster operations the sync engine depends on.

use crate::error::Result;
use crate::types::NamespaceSnapshot;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;

#[async_trait]
pub trait SyncBackend: Send + Sync {
    /// List all namespaces in the cluster, including terminating ones
    async fn list_namespaces(&self) -> Result<Vec<NamespaceSnapshot>>;

    /// Fetch a secret, `None` if it does not exist
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Option<Secret>>;

    /// Create a new secret in the namespace set in its metadata
    async fn create_secret(&self, secret: &Secret) -> Result<Secret>;

    /// Replace an existing secret. The resource version in the metadata is
    /// used for optimistic concurrency.
    async fn replace_secret(&self, secret: &Secret) -> Result<Secret>;
}
