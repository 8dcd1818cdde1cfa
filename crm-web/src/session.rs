//! Glue between the shared session store and Yew's reactive state.

use crate::api::shared_session;
use crate::models::app_state::AppState;
use shared::{Session, SessionStore};
use std::rc::Rc;
use yew::{hook, use_context};
use yewdux::prelude::{Dispatch, use_dispatch, use_selector};

/// Session store plus the dispatcher that republishes its snapshots.
#[derive(Clone)]
pub struct SessionHandle {
    pub store: SessionStore,
    dispatch: Dispatch<AppState>,
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl SessionHandle {
    /// Copy the store's state into [`AppState`] so subscribers re-render.
    pub fn publish(&self) {
        let session = self.store.snapshot();
        self.dispatch.reduce_mut(|state| state.session = session);
    }

    pub fn logout(&self) {
        self.store.logout();
        self.publish();
    }
}

#[hook]
pub fn use_session_handle() -> SessionHandle {
    let store = use_context::<SessionStore>().unwrap_or_else(shared_session);
    let dispatch = use_dispatch::<AppState>();
    SessionHandle { store, dispatch }
}

/// Current session snapshot; re-renders on every published change.
#[hook]
pub fn use_session() -> Rc<Session> {
    use_selector(|state: &AppState| state.session.clone())
}
