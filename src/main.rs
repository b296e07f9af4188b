// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;

use secret_copier::config::Config;
use secret_copier::kubernetes::wait_for_secret_copier_crd;
use secret_copier::reconcilers::SecretCopierReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, filtered through RUST_LOG
    tracing_subscriber::fmt::init();

    info!("Starting SecretCopier operator");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: error_requeue={:?}, wait_for_crd={}",
        config.error_requeue, config.wait_for_crd
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    if config.wait_for_crd {
        info!("Waiting for SecretCopier CRD to become available...");
        wait_for_secret_copier_crd(&client).await?;
    }

    let reconciler = SecretCopierReconciler::new(client, config);

    info!("Starting reconciler...");
    reconciler.run().await?;

    info!("Reconciler stopped, shutting down");
    Ok(())
}
