// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: an in-memory cluster backend and a mock Kubernetes API.

use crate::error::{Result as CopierResult, SecretCopierError};
use crate::selectors::TargetNamespaces;
use crate::sync::SyncBackend;
use crate::types::{
    NamespaceSnapshot, ReclaimPolicy, SecretCopier, SecretCopierRule, SecretCopierSpec,
    SourceSecret, TargetSecret,
};
use async_trait::async_trait;
use http::{Request, Response};
use http_body_util::BodyExt;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;
use kube::client::Body;
use kube::Client;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// Build a SecretCopier with a UID so owner references can be derived
pub fn make_copier(name: &str, rules: Vec<SecretCopierRule>) -> SecretCopier {
    SecretCopier {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            uid: Some(format!("{}-uid", name)),
            ..Default::default()
        },
        spec: SecretCopierSpec {
            rules,
            sync_period: "1m".to_string(),
        },
    }
}

/// Build a rule copying `namespace/name` with default targeting
pub fn make_rule(namespace: &str, name: &str) -> SecretCopierRule {
    SecretCopierRule {
        source_secret: SourceSecret {
            name: name.to_string(),
            namespace: namespace.to_string(),
        },
        target_namespaces: TargetNamespaces::default(),
        target_secret: TargetSecret::default(),
        reclaim_policy: ReclaimPolicy::Delete,
    }
}

pub fn make_secret(
    namespace: &str,
    name: &str,
    data: Option<BTreeMap<String, ByteString>>,
    labels: &[(&str, &str)],
) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            labels: (!labels.is_empty()).then(|| {
                labels
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            }),
            ..Default::default()
        },
        data,
        type_: Some("Opaque".to_string()),
        ..Default::default()
    }
}

type SecretKey = (String, String);

fn key_of(secret: &Secret) -> SecretKey {
    (
        secret.metadata.namespace.clone().unwrap_or_default(),
        secret.metadata.name.clone().unwrap_or_default(),
    )
}

/// In-memory cluster state implementing [`SyncBackend`].
///
/// Writes assign a fresh resource version, and replacing a secret with a
/// stale resource version fails like a conflict on the API server.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    namespaces: Arc<Mutex<Vec<NamespaceSnapshot>>>,
    secrets: Arc<Mutex<BTreeMap<SecretKey, Secret>>>,
    failing_writes: Arc<Mutex<HashSet<SecretKey>>>,
    failing_reads: Arc<Mutex<HashSet<SecretKey>>>,
    racing_reads: Arc<Mutex<HashSet<SecretKey>>>,
    fail_listing: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
    versions: Arc<AtomicUsize>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespaces(self, namespaces: Vec<NamespaceSnapshot>) -> Self {
        *self.namespaces.lock().unwrap() = namespaces;
        self
    }

    /// Store a secret directly, bypassing write accounting
    pub fn insert_secret(&self, mut secret: Secret) {
        secret.metadata.resource_version = Some(self.next_version());
        self.secrets.lock().unwrap().insert(key_of(&secret), secret);
    }

    pub fn secret(&self, namespace: &str, name: &str) -> Option<Secret> {
        self.secrets
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    pub fn fail_writes_to(&self, namespace: &str, name: &str) {
        self.failing_writes
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()));
    }

    pub fn fail_reads_to(&self, namespace: &str, name: &str) {
        self.failing_reads
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()));
    }

    /// Let another writer touch `namespace/name` right after the next read
    /// of it, so the caller holds a stale resource version.
    pub fn race_next_read_of(&self, namespace: &str, name: &str) {
        self.racing_reads
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()));
    }

    pub fn fail_listing(&self) {
        self.fail_listing.store(true, Ordering::SeqCst);
    }

    /// Number of successful creates and replaces
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn next_version(&self) -> String {
        (self.versions.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }

    fn check_writable(&self, key: &SecretKey) -> CopierResult<()> {
        if self.failing_writes.lock().unwrap().contains(key) {
            return Err(SecretCopierError::WriteFailure(format!(
                "secret {}/{}: forbidden",
                key.0, key.1
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SyncBackend for InMemoryBackend {
    async fn list_namespaces(&self) -> CopierResult<Vec<NamespaceSnapshot>> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(SecretCopierError::ListFailure(
                "namespaces: connection refused".to_string(),
            ));
        }
        Ok(self.namespaces.lock().unwrap().clone())
    }

    async fn get_secret(&self, namespace: &str, name: &str) -> CopierResult<Option<Secret>> {
        let key = (namespace.to_string(), name.to_string());
        if self.failing_reads.lock().unwrap().contains(&key) {
            return Err(SecretCopierError::ReadFailure(format!(
                "secret {}/{}: timeout",
                namespace, name
            )));
        }

        let secret = self.secret(namespace, name);
        if self.racing_reads.lock().unwrap().remove(&key) {
            if let Some(current) = secret.clone() {
                self.insert_secret(current);
            }
        }
        Ok(secret)
    }

    async fn create_secret(&self, secret: &Secret) -> CopierResult<Secret> {
        let key = key_of(secret);
        self.check_writable(&key)?;

        let mut secrets = self.secrets.lock().unwrap();
        if secrets.contains_key(&key) {
            return Err(SecretCopierError::WriteFailure(format!(
                "secret {}/{}: already exists",
                key.0, key.1
            )));
        }

        let mut created = secret.clone();
        created.metadata.uid = Some(format!("{}-{}-uid", key.0, key.1));
        created.metadata.resource_version = Some(self.next_version());
        secrets.insert(key, created.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(created)
    }

    async fn replace_secret(&self, secret: &Secret) -> CopierResult<Secret> {
        let key = key_of(secret);
        self.check_writable(&key)?;

        let mut secrets = self.secrets.lock().unwrap();
        let current_version = secrets
            .get(&key)
            .and_then(|s| s.metadata.resource_version.clone());
        if current_version.is_none() || current_version != secret.metadata.resource_version {
            return Err(SecretCopierError::WriteFailure(format!(
                "secret {}/{}: conflict",
                key.0, key.1
            )));
        }

        let mut replaced = secret.clone();
        replaced.metadata.resource_version = Some(self.next_version());
        secrets.insert(key, replaced.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(replaced)
    }
}

/// A request seen by [`MockService`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for PUT requests matching the exact path
    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests received so far with the given method
    pub fn requests_with(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let response = self.find_response(&method, &path);
        let requests = self.requests.clone();

        Box::pin(async move {
            let body = req.into_body().collect().await?.to_bytes();
            requests.lock().unwrap().push(RecordedRequest {
                method,
                path,
                body: body.to_vec(),
            });

            let (status, body) = response.unwrap_or_else(|| {
                // Default 404 for unmatched requests
                (404, not_found_json("resource", "unknown"))
            });

            let response = Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap();
            Ok::<_, tower::BoxError>(response)
        })
    }
}

/// Create a mock namespace list JSON response
pub fn namespace_list_json(names: &[&str]) -> String {
    let items: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "apiVersion": "v1",
                "kind": "Namespace",
                "metadata": { "name": name, "uid": format!("{}-uid", name) },
                "status": { "phase": "Active" }
            })
        })
        .collect();

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "NamespaceList",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Create a mock secret JSON response
pub fn secret_json(secret: &Secret) -> String {
    let mut value = serde_json::to_value(secret).unwrap();
    value["apiVersion"] = "v1".into();
    value["kind"] = "Secret".into();
    value.to_string()
}

/// Create a status response with the given code
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(
        404,
        "NotFound",
        &format!("{} \"{}\" not found", resource, name),
    )
}
