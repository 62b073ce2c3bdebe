// ============================================================================
// USE PAGINATED API HOOK - Page navigation + search over a listing endpoint
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{Page, PageQuery};
use crate::services::ApiError;
use crate::state::{PageCommand, PageOptions, PageRunner, PageState};

pub struct UsePaginatedApiHandle<T: Clone + 'static> {
    pub state: UseReducerHandle<PageState<T>>,
    pub page_size: u32,
    /// Loads page `n` without a search term
    pub go_to_page: Callback<u32>,
    /// Loads the first page filtered by the term
    pub search: Callback<String>,
    /// Reloads the current page; does not reapply the last search term
    pub refresh: Callback<()>,
}

impl<T: Clone + 'static> UsePaginatedApiHandle<T> {
    pub fn data(&self) -> &[T] {
        &self.state.data
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.state.total_pages
    }

    pub fn total_elements(&self) -> u64 {
        self.state.total_elements
    }
}

impl<T: Clone + 'static> Clone for UsePaginatedApiHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            page_size: self.page_size,
            go_to_page: self.go_to_page.clone(),
            search: self.search.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

#[hook]
pub fn use_paginated_api<T, F, Fut>(producer: F, options: PageOptions) -> UsePaginatedApiHandle<T>
where
    T: Clone + 'static,
    F: Fn(PageQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let state = use_reducer(|| PageState::<T>::pending(options.initial_page));
    let runner = use_mut_ref(|| PageRunner::<F>::new(options));
    runner.borrow_mut().update(producer, options);

    let load: Rc<dyn Fn(PageCommand)> = {
        let dispatcher = state.dispatcher();
        let runner = runner.clone();
        // page shown by this render; refresh reloads it
        let current_page = state.current_page;
        Rc::new(move |command: PageCommand| {
            let dispatcher = dispatcher.clone();
            let cycle = runner
                .borrow_mut()
                .start(&command, current_page, move |action| dispatcher.dispatch(action));
            if let Some(cycle) = cycle {
                spawn_local(cycle);
            }
        })
    };

    // Initial load, once
    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load(PageCommand::Initial);
            || ()
        });
    }

    let go_to_page = {
        let load = load.clone();
        Callback::from(move |page: u32| load(PageCommand::GoToPage(page)))
    };

    let search = {
        let load = load.clone();
        Callback::from(move |term: String| {
            log::debug!("[PAGINATION] Search '{}'", term);
            load(PageCommand::Search(term))
        })
    };

    let refresh = Callback::from(move |_| load(PageCommand::Refresh));

    UsePaginatedApiHandle {
        state,
        page_size: options.page_size,
        go_to_page,
        search,
        refresh,
    }
}
