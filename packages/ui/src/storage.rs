//! `window.localStorage` as a [`KeyValueStorage`] backend.
use cms::{KeyValueStorage, StoreError};

/// Browser storage. Holds no JS handle, so it stays `Send + Sync`; the storage object is
/// looked up on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use wasm_bindgen::{JsCast, JsValue};

    fn local_storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }

    fn map_error(key: &str, err: JsValue) -> StoreError {
        if let Some(dom) = err.dyn_ref::<web_sys::DomException>() {
            if dom.name() == "QuotaExceededError" {
                return StoreError::QuotaExceeded {
                    key: key.to_string(),
                };
            }
            return StoreError::Backend {
                key: key.to_string(),
                message: dom.message(),
            };
        }
        StoreError::Backend {
            key: key.to_string(),
            message: format!("{err:?}"),
        }
    }

    impl KeyValueStorage for BrowserStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
            local_storage()?.get_item(key).map_err(|e| map_error(key, e))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
            local_storage()?.set_item(key, value).map_err(|e| map_error(key, e))
        }

        fn remove_item(&self, key: &str) -> Result<(), StoreError> {
            local_storage()?.remove_item(key).map_err(|e| map_error(key, e))
        }

        fn describe(&self) -> String {
            "browser localStorage".to_string()
        }
    }
}

// Outside the browser there is no localStorage; every call reports it as unavailable.
#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn describe(&self) -> String {
        "browser localStorage (unavailable)".to_string()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_build_reports_unavailable() {
        let storage = BrowserStorage;
        assert!(matches!(storage.get_item("language"), Err(StoreError::Unavailable)));
        assert!(matches!(
            storage.set_item("language", "\"en\""),
            Err(StoreError::Unavailable)
        ));
    }
}
