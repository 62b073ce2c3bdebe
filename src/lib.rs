// ============================================================================
// LMS ADMIN WEB - DATA LAYER FOR THE ADMINISTRATION DASHBOARD
// ============================================================================
// Layers:
// - Models: typed contracts shared with the backend
// - Services: authenticated HTTP client + one service per resource
// - State: session store, subscribers and fetch state machines
// - Hooks: use_api / use_paginated_api / use_session for Yew views
// - Context: services shared through the component tree
// ============================================================================

pub mod config;
pub mod utils;
pub mod models;
pub mod state;
pub mod services;
pub mod hooks;
pub mod context;
pub mod navigation;
pub mod app;

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;

pub use crate::app::{bootstrap, services};
pub use crate::context::{AppServices, ServicesProvider};
pub use crate::hooks::{use_api, use_paginated_api, use_services, use_session};
pub use crate::services::{describe_error, ApiClient, ApiError};
pub use crate::state::{PageOptions, SessionEvent, SessionStore};

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!(
        "🚀 LMS Admin - {} ({})",
        CONFIG.environment,
        CONFIG.backend_url
    );

    app::bootstrap(&CONFIG);
    Ok(())
}
