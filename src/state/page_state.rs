// ============================================================================
// PAGE STATE - Paginated listing with free-text search
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use yew::Reducible;

use crate::models::{Page, PageQuery};
use crate::services::{describe_error, ApiError};
use crate::state::query_state::{RequestSequence, RequestToken};

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction<T> {
    Started(RequestToken),
    Resolved {
        token: RequestToken,
        page_index: u32,
        page: Page<T>,
    },
    Failed {
        token: RequestToken,
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState<T> {
    pub data: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    latest: Option<RequestToken>,
}

impl<T> PageState<T> {
    pub fn new(initial_page: u32) -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: None,
            current_page: initial_page,
            total_pages: 0,
            total_elements: 0,
            latest: None,
        }
    }

    /// Like `new`, but already loading: the first load is about to start
    pub fn pending(initial_page: u32) -> Self {
        Self {
            loading: true,
            ..Self::new(initial_page)
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page.saturating_add(1) < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Applies `action`; returns false when it was stale and ignored
    pub fn apply(&mut self, action: PageAction<T>) -> bool {
        match action {
            PageAction::Started(token) => {
                if self.latest.map_or(false, |latest| token <= latest) {
                    return false;
                }
                self.latest = Some(token);
                self.loading = true;
                self.error = None;
                true
            }
            PageAction::Resolved {
                token,
                page_index,
                page,
            } => {
                if !self.is_current(token) {
                    log::debug!("[PAGINATION] Dropping stale page {}", page_index);
                    return false;
                }
                self.data = page.content;
                self.total_pages = page.total_pages;
                self.total_elements = page.total_elements;
                self.current_page = page_index;
                self.loading = false;
                true
            }
            PageAction::Failed { token, message } => {
                if !self.is_current(token) {
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

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Clone + 'static> Reducible for PageState<T> {
    type Action = PageAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Producer arguments for each paginated operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub initial_page: u32,
    pub page_size: u32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            initial_page: 0,
            page_size: crate::config::CONFIG.default_page_size,
        }
    }
}

impl PageOptions {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn initial(&self) -> PageQuery {
        self.go_to_page(self.initial_page)
    }

    /// Page `n`, no search term
    pub fn go_to_page(&self, page: u32) -> PageQuery {
        PageQuery::new(page, self.page_size, "")
    }

    /// First page filtered by `term`
    pub fn search(&self, term: &str) -> PageQuery {
        PageQuery::new(0, self.page_size, term)
    }

    /// Current page again. The last search term is not carried over.
    pub fn refresh(&self, current_page: u32) -> PageQuery {
        PageQuery::new(current_page, self.page_size, "")
    }

    pub fn query_for(&self, command: &PageCommand, current_page: u32) -> PageQuery {
        match command {
            PageCommand::Initial => self.initial(),
            PageCommand::GoToPage(page) => self.go_to_page(*page),
            PageCommand::Search(term) => self.search(term),
            PageCommand::Refresh => self.refresh(current_page),
        }
    }
}

/// What a paginated view asked for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageCommand {
    Initial,
    GoToPage(u32),
    Search(String),
    Refresh,
}

/// Latest producer, options and request sequence of one paginated hook
pub struct PageRunner<F> {
    producer: Option<F>,
    options: PageOptions,
    sequence: RequestSequence,
}

impl<F> PageRunner<F> {
    pub fn new(options: PageOptions) -> Self {
        Self {
            producer: None,
            options,
            sequence: RequestSequence::default(),
        }
    }

    pub fn options(&self) -> PageOptions {
        self.options
    }

    /// Called on every render so later loads see the newest captures
    pub fn update(&mut self, producer: F, options: PageOptions) {
        self.producer = Some(producer);
        self.options = options;
    }

    /// Builds the query for `command`, calls the producer and returns the
    /// load cycle to spawn. `None` until a producer is set.
    pub fn start<T, Fut, D>(
        &mut self,
        command: &PageCommand,
        current_page: u32,
        dispatch: D,
    ) -> Option<impl Future<Output = ()>>
    where
        F: Fn(PageQuery) -> Fut,
        Fut: Future<Output = Result<Page<T>, ApiError>>,
        D: Fn(PageAction<T>),
    {
        let query = self.options.query_for(command, current_page);
        let request = (self.producer.as_ref()?)(query.clone());
        let token = self.sequence.next();
        Some(run_page_query(token, query, request, dispatch))
    }
}

/// Runs one page load, reporting start and completion through `dispatch`
pub async fn run_page_query<T, Fut, D>(
    token: RequestToken,
    query: PageQuery,
    request: Fut,
    dispatch: D,
) where
    Fut: Future<Output = Result<Page<T>, ApiError>>,
    D: Fn(PageAction<T>),
{
    dispatch(PageAction::Started(token));
    match request.await {
        Ok(page) => {
            log::debug!(
                "[PAGINATION] Page {} loaded: {} items ({} total)",
                query.page,
                page.content.len(),
                page.total_elements
            );
            dispatch(PageAction::Resolved {
                token,
                page_index: query.page,
                page,
            })
        }
        Err(e) => {
            let message = describe_error(&e);
            log::error!("❌ [PAGINATION] {}", message);
            dispatch(PageAction::Failed { token, message });
        }
    }
}
