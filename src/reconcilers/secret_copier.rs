// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! SecretCopier reconciler - runs a sync pass per SecretCopier whenever the
//! copier, one of its source secrets or a matching namespace changes.

use crate::config::Config;
use crate::error::{Result, SecretCopierError};
use crate::kubernetes::KubeBackend;
use crate::sync::{copiers_for_namespace, copiers_for_secret, next_pass_delay, run_pass};
use crate::types::{NamespaceSnapshot, SecretCopier};
use futures::StreamExt;
use k8s_openapi::api::core::v1::{Namespace, Secret};
use kube::{
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct SecretCopierReconciler {
    client: Client,
    backend: KubeBackend,
    config: Config,
}

impl SecretCopierReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self {
            backend: KubeBackend::new(client.clone()),
            client,
            config,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let copiers: Api<SecretCopier> = Api::all(self.client.clone());
        let secrets: Api<Secret> = Api::all(self.client.clone());
        let namespaces: Api<Namespace> = Api::all(self.client.clone());

        let controller = Controller::new(copiers, WatcherConfig::default());
        let secret_index = controller.store();
        let namespace_index = controller.store();
        let context = Arc::new(self);

        controller
            .watches(secrets, WatcherConfig::default(), move |secret: Secret| {
                let namespace = secret.namespace().unwrap_or_default();
                copiers_for_secret(&secret_index.state(), &namespace, &secret.name_any())
            })
            .watches(
                namespaces,
                WatcherConfig::default(),
                move |namespace: Namespace| {
                    copiers_for_namespace(
                        &namespace_index.state(),
                        &NamespaceSnapshot::from(&namespace),
                    )
                },
            )
            .shutdown_on_signal()
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled secret copier: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(copier: Arc<SecretCopier>, ctx: Arc<SecretCopierReconciler>) -> Result<Action> {
    let name = copier.name_any();

    // Owned copies are cleaned up by the garbage collector
    if copier.is_being_deleted() {
        debug!("SecretCopier {} is being deleted, skipping", name);
        return Ok(Action::await_change());
    }

    if copier.spec.rules.is_empty() {
        debug!("No rules to process for SecretCopier {}", name);
        return Ok(Action::await_change());
    }

    let summary = run_pass(&ctx.backend, &copier).await?;

    info!(
        "Reconciled SecretCopier {}: {} created, {} updated, {} unchanged, {} skipped, {} failed",
        name, summary.created, summary.updated, summary.unchanged, summary.skipped, summary.failed
    );

    match next_pass_delay(&copier)? {
        Some(delay) => Ok(Action::requeue(delay)),
        None => Ok(Action::await_change()),
    }
}

fn error_policy(
    _copier: Arc<SecretCopier>,
    error: &SecretCopierError,
    ctx: Arc<SecretCopierReconciler>,
) -> Action {
    error!("Reconciliation error: {}", error);
    Action::requeue(ctx.config.error_requeue)
}
