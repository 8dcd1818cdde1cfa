use crate::components::{alert::Alert, loading::Loading};
use shared::fetch::Loadable;
use yew::{Callback, Html, html};

/// Renders the loading placeholder, the error with a retry button, or `ready`.
pub fn render_loadable<T>(
    state: &Loadable<T>,
    on_retry: &Callback<()>,
    ready: impl FnOnce(&T) -> Html,
) -> Html {
    match state {
        Loadable::Loading => html! { <Loading /> },
        Loadable::Failed(err) => html! {
            <Alert message={err.message().to_string()} on_retry={Some(on_retry.clone())} />
        },
        Loadable::Ready(value) => ready(value),
    }
}
