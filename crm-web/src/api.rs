use gloo_storage::{LocalStorage, Storage};
use shared::config::ClientConfig;
use shared::{CrmClient, SessionStore, TokenStorage};
use std::cell::OnceCell;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

thread_local! {
    static SHARED_SESSION: OnceCell<SessionStore> = const { OnceCell::new() };
}

/// Bearer token persisted in the browser's local storage.
#[derive(Debug, Clone)]
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl TokenStorage for LocalTokenStorage {
    // Raw strings, not JSON, so tokens written by other tooling still load.
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(&self.key).ok().flatten()
    }

    fn store(&self, token: &str) {
        if LocalStorage::raw().set_item(&self.key, token).is_err() {
            warn("could not persist session token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}

/// The browser-wide session store, created on first use.
pub fn shared_session() -> SessionStore {
    SHARED_SESSION.with(|cell| {
        cell.get_or_init(|| {
            let config = ClientConfig::default();
            if let Err(err) = config.validate() {
                warn(&format!("{err}; requests will likely fail"));
            }
            SessionStore::new(
                CrmClient::from_config(&config),
                Arc::new(LocalTokenStorage::new(&config.token_storage_key)),
            )
        })
        .clone()
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_roundtrip() {
        let storage = LocalTokenStorage::new("crm-test-token");
        storage.clear();
        assert_eq!(storage.load(), None);

        storage.store("tok-123");
        assert_eq!(storage.load().as_deref(), Some("tok-123"));
        // Stored raw, not JSON-quoted.
        assert_eq!(
            LocalStorage::raw().get_item("crm-test-token").ok().flatten().as_deref(),
            Some("tok-123")
        );

        storage.clear();
        storage.clear();
        assert_eq!(storage.load(), None);
    }

    #[wasm_bindgen_test]
    fn test_shared_session_is_a_singleton() {
        assert_eq!(shared_session(), shared_session());
    }
}
