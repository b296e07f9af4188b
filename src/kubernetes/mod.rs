// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for CRD discovery, namespace listing and secret access.

pub mod crd;
pub mod namespaces;
pub mod secrets;

pub use crd::wait_for_secret_copier_crd;

use crate::error::Result;
use crate::sync::SyncBackend;
use crate::types::NamespaceSnapshot;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::Client;

/// [`SyncBackend`] talking to the Kubernetes API server
#[derive(Clone)]
pub struct KubeBackend {
    client: Client,
}

impl KubeBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SyncBackend for KubeBackend {
    async fn list_namespaces(&self) -> Result<Vec<NamespaceSnapshot>> {
        namespaces::list_namespaces(&self.client).await
    }

    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Option<Secret>> {
        secrets::get_secret(&self.client, namespace, name).await
    }

    async fn create_secret(&self, secret: &Secret) -> Result<Secret> {
        secrets::create_secret(&self.client, secret).await
    }

    async fn replace_secret(&self, secret: &Secret) -> Result<Secret> {
        secrets::replace_secret(&self.client, secret).await
    }
}
