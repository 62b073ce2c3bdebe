// ============================================================================
// SESSION STATE - Persisted credential + change notifications
// ============================================================================
// Single owner of the stored session. Every read goes to storage so that
// writes from another store handle (or a reload) are picked up.
// ============================================================================

use std::rc::Rc;

use crate::models::SessionCredential;
use crate::services::ApiError;
use crate::state::reactivity::{Subscribers, Subscription};
use crate::utils::{BrowserStorage, KeyValueStorage, STORAGE_KEY_SESSION};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    SignedIn(SessionCredential),
    Updated(SessionCredential),
    SignedOut,
    /// The backend rejected the credential (401)
    Expired,
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
    key: &'static str,
    subscribers: Subscribers<SessionEvent>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            key: STORAGE_KEY_SESSION,
            subscribers: Subscribers::new(),
        }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    pub fn get(&self) -> Option<SessionCredential> {
        let raw = self.storage.get_item(self.key)?;
        match serde_json::from_str::<SessionCredential>(&raw) {
            Ok(credential) => Some(credential),
            Err(e) => {
                log::warn!("⚠️ [SESSION] Discarding malformed stored session: {}", e);
                self.storage.remove_item(self.key);
                None
            }
        }
    }

    /// Bearer token, if a session with a non-blank token is stored
    pub fn token(&self) -> Option<String> {
        self.get()
            .filter(SessionCredential::has_token)
            .map(|credential| credential.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set(&self, credential: SessionCredential) -> Result<(), ApiError> {
        let replacing = self.get().is_some();
        self.write(&credential)?;
        log::info!("🔐 [SESSION] Session stored for user {}", credential.id);
        let event = if replacing {
            SessionEvent::Updated(credential)
        } else {
            SessionEvent::SignedIn(credential)
        };
        self.subscribers.notify(&event);
        Ok(())
    }

    /// Applies `update` to the stored credential. `Ok(None)` when no session is stored.
    pub fn update_user<F>(&self, update: F) -> Result<Option<SessionCredential>, ApiError>
    where
        F: FnOnce(&mut SessionCredential),
    {
        let Some(mut credential) = self.get() else {
            return Ok(None);
        };
        update(&mut credential);
        self.write(&credential)?;
        self.subscribers
            .notify(&SessionEvent::Updated(credential.clone()));
        Ok(Some(credential))
    }

    pub fn clear(&self) {
        self.storage.remove_item(self.key);
        log::info!("👋 [SESSION] Session cleared");
        self.subscribers.notify(&SessionEvent::SignedOut);
    }

    /// Clears the credential after an authentication failure and emits `Expired`
    pub fn expire(&self) {
        self.storage.remove_item(self.key);
        log::warn!("⚠️ [SESSION] Session expired");
        self.subscribers.notify(&SessionEvent::Expired);
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&SessionEvent) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    fn write(&self, credential: &SessionCredential) -> Result<(), ApiError> {
        let json =
            serde_json::to_string(credential).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.storage
            .set_item(self.key, &json)
            .map_err(ApiError::Storage)
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}
