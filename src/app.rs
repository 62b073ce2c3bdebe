// ============================================================================
// APP - Builds the shared services once and wires session expiry to login
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::context::AppServices;
use crate::navigation::{install_expiry_redirect, BrowserNavigator, Navigator};
use crate::services::{ApiClient, GlooTransport, HttpTransport};
use crate::state::SessionStore;
use crate::utils::{BrowserStorage, KeyValueStorage};

thread_local! {
    static SERVICES: RefCell<Option<AppServices>> = RefCell::new(None);
}

/// Builds services on the given storage/transport and installs the expiry redirect
pub fn build_services(
    config: &AppConfig,
    storage: Rc<dyn KeyValueStorage>,
    transport: Rc<dyn HttpTransport>,
    navigator: Rc<dyn Navigator>,
) -> AppServices {
    let session = SessionStore::new(storage);
    install_expiry_redirect(&session, navigator, config.login_route.clone()).forget();
    let api = ApiClient::with_transport(config.backend_url.clone(), transport, session);
    AppServices::new(api)
}

/// Browser services for `config`, registered as the app-wide instance
pub fn bootstrap(config: &AppConfig) -> AppServices {
    let services = build_services(
        config,
        Rc::new(BrowserStorage),
        Rc::new(GlooTransport),
        Rc::new(BrowserNavigator),
    );
    log::info!("🚀 [APP] Services ready ({})", services.api.base_url());
    SERVICES.with(|cell| *cell.borrow_mut() = Some(services.clone()));
    services
}

/// App-wide services, bootstrapped from `CONFIG` on first use
pub fn services() -> AppServices {
    let existing = SERVICES.with(|cell| cell.borrow().clone());
    existing.unwrap_or_else(|| bootstrap(&crate::config::CONFIG))
}
