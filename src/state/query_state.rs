// ============================================================================
// QUERY STATE - Single fetch lifecycle (data / loading / error)
// ============================================================================
// Each fetch cycle carries a RequestToken. Completions whose token is not
// the latest issued one are dropped, so a slow superseded request can never
// overwrite the result of a newer one.
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use yew::Reducible;

use crate::services::{describe_error, ApiError};

/// Monotonically increasing per-hook request id
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Issues request tokens for one hook instance
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum QueryAction<T> {
    Started(RequestToken),
    Resolved { token: RequestToken, data: T },
    Failed { token: RequestToken, message: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    latest: Option<RequestToken>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            latest: None,
        }
    }
}

impl<T> QueryState<T> {
    /// State of a mounted hook whose first fetch has not been dispatched yet
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Applies `action`; returns false when it was stale and ignored
    pub fn apply(&mut self, action: QueryAction<T>) -> bool {
        match action {
            QueryAction::Started(token) => {
                if self.latest.map_or(false, |latest| token <= latest) {
                    return false;
                }
                self.latest = Some(token);
                self.loading = true;
                self.error = None;
                true
            }
            QueryAction::Resolved { token, data } => {
                if !self.is_current(token) {
                    log::debug!("[USE_API] Dropping stale response {:?}", token);
                    return false;
                }
                self.data = Some(data);
                self.error = None;
                self.loading = false;
                true
            }
            QueryAction::Failed { token, message } => {
                if !self.is_current(token) {
                    log::debug!("[USE_API] Dropping stale failure {:?}", token);
                    return false;
                }
                self.error = Some(message);
                self.loading = false;
                true
            }
        }
    }

    fn is_current(&self, token: RequestToken) -> bool {
        self.loading && self.latest == Some(token)
    }
}

impl<T: Clone + 'static> Reducible for QueryState<T> {
    type Action = QueryAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Latest producer and request sequence of one `use_api` instance
pub struct QueryRunner<F> {
    producer: Option<F>,
    sequence: RequestSequence,
}

impl<F> Default for QueryRunner<F> {
    fn default() -> Self {
        Self {
            producer: None,
            sequence: RequestSequence::default(),
        }
    }
}

impl<F> QueryRunner<F> {
    /// Called on every render so refetch sees the newest captures
    pub fn set_producer(&mut self, producer: F) {
        self.producer = Some(producer);
    }

    /// Calls the producer and returns the fetch cycle to spawn.
    /// `None` until a producer is set.
    pub fn start<T, Fut, D>(&mut self, dispatch: D) -> Option<impl Future<Output = ()>>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
        D: Fn(QueryAction<T>),
    {
        let request = (self.producer.as_ref()?)();
        let token = self.sequence.next();
        Some(run_query(token, request, dispatch))
    }
}

/// Runs one fetch cycle, reporting start and completion through `dispatch`
pub async fn run_query<T, Fut, D>(token: RequestToken, request: Fut, dispatch: D)
where
    Fut: Future<Output = Result<T, ApiError>>,
    D: Fn(QueryAction<T>),
{
    dispatch(QueryAction::Started(token));
    match request.await {
        Ok(data) => dispatch(QueryAction::Resolved { token, data }),
        Err(e) => {
            let message = describe_error(&e);
            log::error!("❌ [USE_API] {}", message);
            dispatch(QueryAction::Failed { token, message });
        }
    }
}
