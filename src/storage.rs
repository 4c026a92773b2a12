//! Persistence: the whole `AppState` as one JSON blob in local storage,
//! plus the session-scoped visitor marker.

use crate::model::AppState;
use crate::util::clog;

pub const STORAGE_KEY: &str = "enrichment_map_v1";
const SESSION_VISIT_KEY: &str = "enrichment_visited";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Load the persisted state; absent or unreadable data falls back to a
/// fresh default with a randomized visitor count.
pub fn load_or_default() -> AppState {
    if let Some(store) = local_storage() {
        if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
            match serde_json::from_str(&raw) {
                Ok(state) => return state,
                Err(_) => clog("stored state unreadable, starting fresh"),
            }
        }
    }
    AppState::fresh(random_visitor_count())
}

pub fn save(state: &AppState) {
    if let Some(store) = local_storage() {
        if let Ok(raw) = serde_json::to_string(state) {
            let _ = store.set_item(STORAGE_KEY, &raw);
        }
    }
}

/// True exactly once per browser session; keeps the visitor counter from
/// incrementing on every reload.
pub fn first_visit_this_session() -> bool {
    let Some(store) = session_storage() else {
        return false;
    };
    match store.get_item(SESSION_VISIT_KEY) {
        Ok(None) => {
            let _ = store.set_item(SESSION_VISIT_KEY, "1");
            true
        }
        _ => false,
    }
}

fn random_visitor_count() -> u32 {
    2048 + (js_sys::Math::random() * 500.0).floor() as u32
}
