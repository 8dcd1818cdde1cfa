//! Data-loading hooks shared by the screens.

use crate::session::use_session_handle;
use gloo_timers::callback::Timeout;
use shared::fetch::Loadable;
use shared::{ApiError, CrmClient};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, UseStateHandle, hook, use_effect_with, use_mut_ref, use_state};

const FLASH_MILLIS: u32 = 4_000;

/// Result of [`use_fetch`]: the current state plus a way to run it again.
pub struct FetchHandle<T> {
    pub state: UseStateHandle<Loadable<T>>,
    pub reload: Callback<()>,
}

impl<T> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            reload: self.reload.clone(),
        }
    }
}

impl<T> std::fmt::Debug for FetchHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchHandle").finish_non_exhaustive()
    }
}

/// Loads remote data on mount, whenever `deps` change and on `reload`.
///
/// Responses that arrive after the component unmounted, or after a newer
/// request started, are dropped.
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch: F) -> FetchHandle<T>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(CrmClient, D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| Loadable::<T>::Loading);
    let generation = use_state(|| 0_u32);
    let client = use_session_handle().store.client().clone();
    let fetch = Rc::new(fetch);

    {
        let state = state.clone();
        use_effect_with((deps, *generation), move |(deps, _)| {
            let alive = Rc::new(Cell::new(true));
            state.set(Loadable::Loading);
            {
                let alive = alive.clone();
                let deps = deps.clone();
                spawn_local(async move {
                    let result: Result<T, ApiError> = fetch(client, deps).await;
                    if alive.get() {
                        state.set(Loadable::from_result(result));
                    }
                });
            }
            move || alive.set(false)
        });
    }

    let reload = {
        let generation = generation.clone();
        Callback::from(move |()| generation.set(generation.wrapping_add(1)))
    };

    FetchHandle { state, reload }
}

/// Transient success message that clears itself after a few seconds.
#[derive(Clone, Debug)]
pub struct Flash {
    pub message: Option<String>,
    pub show: Callback<String>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_flash() -> Flash {
    let message = use_state(|| None::<String>);
    let timer = use_mut_ref(|| None::<Timeout>);

    let dismiss = {
        let message = message.clone();
        let timer = timer.clone();
        Callback::from(move |()| {
            timer.borrow_mut().take();
            message.set(None);
        })
    };
    let show = {
        let message = message.clone();
        Callback::from(move |text: String| {
            message.set(Some(text));
            let message = message.clone();
            // Replacing the handle cancels the previous countdown.
            *timer.borrow_mut() = Some(Timeout::new(FLASH_MILLIS, move || message.set(None)));
        })
    };

    Flash {
        message: (*message).clone(),
        show,
        dismiss,
    }
}
