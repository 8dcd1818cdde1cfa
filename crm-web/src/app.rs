use crate::api::shared_session;
use crate::models::app_state::AppState;
use crate::routes::{Route, switch};
use shared::SessionStore;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{ContextProvider, Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Root component: owns the session store and validates any stored token once.
#[function_component(App)]
pub fn app() -> Html {
    let store = use_state(shared_session);
    let dispatch = use_dispatch::<AppState>();

    {
        let store = (*store).clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let session = store.initialize().await;
                log(&format!(
                    "Session ready (signed in: {})",
                    session.is_authenticated()
                ));
                dispatch.reduce_mut(|state| state.session = session);
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SessionStore> context={(*store).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionStore>>
    }
}
