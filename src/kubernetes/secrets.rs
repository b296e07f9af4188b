// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret reads and writes against the API server

use crate::error::{Result, SecretCopierError};
use k8s_openapi::api::core::v1::Secret;
use kube::{api::PostParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

/// Get a secret, returning `None` when it does not exist
#[instrument(skip(client))]
pub async fn get_secret(client: &Client, namespace: &str, name: &str) -> Result<Option<Secret>> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    match secrets.get(name).await {
        Ok(secret) => Ok(Some(secret)),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("Secret {}/{} does not exist", namespace, name);
            Ok(None)
        }
        Err(e) => Err(SecretCopierError::ReadFailure(format!(
            "secret {}/{}: {}",
            namespace, name, e
        ))),
    }
}

/// Create a secret in the namespace from its metadata
#[instrument(skip(client, secret), fields(secret = %format!("{}/{}", secret.namespace().unwrap_or_default(), secret.name_any())))]
pub async fn create_secret(client: &Client, secret: &Secret) -> Result<Secret> {
    let namespace = secret.namespace().unwrap_or_default();
    let secrets: Api<Secret> = Api::namespaced(client.clone(), &namespace);

    secrets
        .create(&PostParams::default(), secret)
        .await
        .map_err(|e| {
            SecretCopierError::WriteFailure(format!(
                "create secret {}/{}: {}",
                namespace,
                secret.name_any(),
                e
            ))
        })
}

/// Replace a secret. Fails with a conflict if the resource version is stale.
#[instrument(skip(client, secret), fields(secret = %format!("{}/{}", secret.namespace().unwrap_or_default(), secret.name_any())))]
pub async fn replace_secret(client: &Client, secret: &Secret) -> Result<Secret> {
    let namespace = secret.namespace().unwrap_or_default();
    let name = secret.name_any();
    let secrets: Api<Secret> = Api::namespaced(client.clone(), &namespace);

    secrets
        .replace(&name, &PostParams::default(), secret)
        .await
        .map_err(|e| {
            SecretCopierError::WriteFailure(format!(
                "update secret {}/{}: {}",
                namespace, name, e
            ))
        })
}
