// ============================================================================
// STATE MODULE - Session store, subscribers and fetch state machines
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod query_state;
pub mod page_state;

pub use reactivity::{Subscribers, Subscription};
pub use session_state::{SessionEvent, SessionStore};
pub use query_state::{run_query, QueryAction, QueryRunner, QueryState, RequestSequence, RequestToken};
pub use page_state::{run_page_query, PageAction, PageCommand, PageOptions, PageRunner, PageState};
