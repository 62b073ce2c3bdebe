// ============================================================================
// USE SESSION HOOK - Current credential, re-rendered on session events
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_services::use_services;
use crate::models::{Role, SessionCredential};
use crate::state::SessionEvent;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub credential: Option<SessionCredential>,
    pub logout: Callback<()>,
}

impl UseSessionHandle {
    pub fn is_logged_in(&self) -> bool {
        self.credential.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.credential.as_ref().map(|c| c.role)
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let services = use_services();
    let credential = {
        let session = services.session.clone();
        use_state(move || session.get())
    };

    // Follow login, profile updates, logout and expiry
    {
        let credential = credential.clone();
        use_effect_with(services.session.clone(), move |session| {
            let subscription = session.subscribe(move |event| match event {
                SessionEvent::SignedIn(c) | SessionEvent::Updated(c) => {
                    credential.set(Some(c.clone()))
                }
                SessionEvent::SignedOut | SessionEvent::Expired => credential.set(None),
            });
            move || drop(subscription)
        });
    }

    let logout = {
        let auth = services.auth.clone();
        Callback::from(move |_| auth.logout())
    };

    UseSessionHandle {
        credential: (*credential).clone(),
        logout,
    }
}
