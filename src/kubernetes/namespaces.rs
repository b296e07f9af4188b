// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace listing

use crate::error::{Result, SecretCopierError};
use crate::types::NamespaceSnapshot;
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// List all namespaces in the cluster as snapshots
#[instrument(skip(client))]
pub async fn list_namespaces(client: &Client) -> Result<Vec<NamespaceSnapshot>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    let list = namespaces
        .list(&ListParams::default())
        .await
        .map_err(|e| SecretCopierError::ListFailure(format!("namespaces: {}", e)))?;

    debug!("Listed {} namespaces", list.items.len());

    Ok(list.items.iter().map(NamespaceSnapshot::from).collect())
}
