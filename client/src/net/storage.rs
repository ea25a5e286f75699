//! `localStorage`-backed persistence for the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth client reads the session on every `get_session` call, so a page
//! reload resumes the previous sign-in. During server rendering there is no
//! storage and every call is a no-op.

use gateway::auth::SESSION_STORAGE_KEY;
use gateway::{Session, SessionStore};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
            match serde_json::from_str(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    log::warn!("discarding unreadable stored session: {e}");
                    self.clear();
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, session: &Session) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let Ok(raw) = serde_json::to_string(session) else {
                return;
            };
            let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, SESSION_STORAGE_KEY);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(SESSION_STORAGE_KEY);
            }
        }
    }
}
