use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a raw string from localStorage
pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Read and decode a JSON value; missing or malformed entries read as `None`
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed localStorage entry '{}': {}", key, e);
            None
        }
    }
}

/// Encode and save a JSON value. Storage being unavailable is not an error.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => {
            let _ = storage.set_item(key, &json);
        }
        Err(e) => log::warn!("Failed to encode localStorage entry '{}': {}", key, e),
    }
}
