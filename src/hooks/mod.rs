pub mod use_api;
pub mod use_paginated_api;
pub mod use_services;
pub mod use_session;

pub use use_api::{use_api, UseApiHandle};
pub use use_paginated_api::{use_paginated_api, UsePaginatedApiHandle};
pub use use_services::use_services;
pub use use_session::{use_session, UseSessionHandle};
