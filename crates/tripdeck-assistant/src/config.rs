//! Runtime configuration store for the assistant backend connection.
//!
//! An explicit store object handed by reference into the request client;
//! single-writer semantics without hidden process-global state.

use std::sync::{Mutex, PoisonError};

use tracing::info;

/// Backend connection settings.
///
/// Always a complete record: fields left unset fall back to their defaults,
/// never to an undefined state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Base URL of the assistant backend. Empty means not configured.
    pub endpoint: String,
    /// Bearer credential. Empty means no authorization header is sent.
    pub credential: String,
    /// Model identifier forwarded with each request.
    pub model: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            credential: String::new(),
            model: "default".to_string(),
        }
    }
}

/// A partial update: only the fields present are merged in.
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
    pub endpoint: Option<String>,
    pub credential: Option<String>,
    pub model: Option<String>,
}

/// Mutable holder for the current [`AssistantConfig`].
///
/// Lives for the process lifetime; the request client reads it on every
/// send, so updates take effect on the next request.
#[derive(Debug, Default)]
pub struct ConfigStore {
    inner: Mutex<AssistantConfig>,
}

impl ConfigStore {
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            inner: Mutex::new(config),
        }
    }

    /// Merge the given patch into the current configuration and return the
    /// resulting full configuration.
    ///
    /// Shallow merge: unspecified fields retain their prior value. No URL
    /// validation is performed here; malformed values surface as failures
    /// only when the endpoint is used.
    pub fn configure(&self, patch: ConfigPatch) -> AssistantConfig {
        // The guarded value is plain data, so a poisoned lock is still usable.
        let mut config = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(endpoint) = patch.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(credential) = patch.credential {
            config.credential = credential;
        }
        if let Some(model) = patch.model {
            config.model = model;
        }
        info!(
            endpoint = %config.endpoint,
            model = %config.model,
            credential = if config.credential.is_empty() { "not configured" } else { "configured" },
            "Assistant configuration updated"
        );
        config.clone()
    }

    /// A copy of the current configuration. Mutating the returned value
    /// does not affect the store.
    pub fn config(&self) -> AssistantConfig {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
