use yew::prelude::*;

use crate::context::AppServices;

/// Services from the nearest `ServicesProvider`, or the app-wide instance
#[hook]
pub fn use_services() -> AppServices {
    use_context::<AppServices>().unwrap_or_else(crate::app::services)
}
