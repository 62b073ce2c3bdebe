// ============================================================================
// USE API HOOK - Single fetch bound to a dependency value
// ============================================================================
// Runs the producer on mount and whenever `deps` changes; `refetch` runs it
// again on demand. Superseded requests are not cancelled: their completions
// are discarded by the reducer (see state::query_state).
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::ApiError;
use crate::state::{QueryRunner, QueryState};

pub struct UseApiHandle<T: Clone + 'static> {
    pub state: UseReducerHandle<QueryState<T>>,
    pub refetch: Callback<()>,
}

impl<T: Clone + 'static> UseApiHandle<T> {
    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }
}

impl<T: Clone + 'static> Clone for UseApiHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            refetch: self.refetch.clone(),
        }
    }
}

#[hook]
pub fn use_api<T, F, Fut, D>(producer: F, deps: D) -> UseApiHandle<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    D: PartialEq + 'static,
{
    let state = use_reducer(QueryState::<T>::pending);
    // Latest producer, so refetch sees the values captured by the last render
    let runner = use_mut_ref(QueryRunner::<F>::default);
    runner.borrow_mut().set_producer(producer);

    let run: Rc<dyn Fn()> = {
        let dispatcher = state.dispatcher();
        let runner = runner.clone();
        Rc::new(move || {
            let dispatcher = dispatcher.clone();
            let cycle = runner
                .borrow_mut()
                .start(move |action| dispatcher.dispatch(action));
            if let Some(cycle) = cycle {
                spawn_local(cycle);
            }
        })
    };

    {
        let run = run.clone();
        use_effect_with(deps, move |_| {
            run();
            || ()
        });
    }

    let refetch = Callback::from(move |_| {
        log::debug!("🔄 [USE_API] Refetch");
        run();
    });

    UseApiHandle { state, refetch }
}
