use std::rc::Rc;

use crate::state::{SessionEvent, SessionStore, Subscription};

pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Full-page navigation through `window.location`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ [NAV] No window, cannot navigate to {}", route);
            return;
        };
        if let Err(e) = window.location().set_href(route) {
            log::error!("❌ [NAV] Navigation to {} failed: {:?}", route, e);
        }
    }
}

/// Sends the user to `login_route` every time the session expires.
/// Logout does not redirect; the view that logged out decides where to go.
pub fn install_expiry_redirect(
    session: &SessionStore,
    navigator: Rc<dyn Navigator>,
    login_route: impl Into<String>,
) -> Subscription {
    let login_route = login_route.into();
    session.subscribe(move |event| {
        if *event == SessionEvent::Expired {
            log::info!("🔄 [NAV] Session expired, redirecting to {}", login_route);
            navigator.navigate(&login_route);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, SessionCredential};
    use crate::services::http::mock::MockTransport;
    use crate::services::{ApiClient, ApiError};
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        routes: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: &str) {
            self.routes.borrow_mut().push(route.to_string());
        }
    }

    #[test]
    fn unauthorized_response_navigates_to_login_once() {
        let session = SessionStore::new(Rc::new(MemoryStorage::new()));
        let navigator = Rc::new(RecordingNavigator::default());
        let _redirect = install_expiry_redirect(&session, navigator.clone(), "/login");

        let transport = Rc::new(MockTransport::new());
        transport.respond(401, "");
        let api = ApiClient::with_transport("http://lms.test", transport.clone(), session.clone());

        let result: Result<serde_json::Value, _> =
            block_on(api.get("/api/students", &[("page", "0"), ("size", "10")]));

        assert_eq!(result, Err(ApiError::Unauthorized { server_message: None }));
        assert!(transport.last_request().header("Authorization").is_none());
        assert_eq!(*navigator.routes.borrow(), vec!["/login".to_string()]);
    }

    #[test]
    fn logout_does_not_navigate() {
        let session = SessionStore::new(Rc::new(MemoryStorage::new()));
        let navigator = Rc::new(RecordingNavigator::default());
        let _redirect = install_expiry_redirect(&session, navigator.clone(), "/login");

        session
            .set(SessionCredential {
                id: 1,
                role: Role::Admin,
                full_name: "Root".into(),
                email: None,
                token: "t".into(),
            })
            .unwrap();
        session.clear();

        assert!(navigator.routes.borrow().is_empty());
    }
}
