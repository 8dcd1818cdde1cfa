//! Browser console for the CRM: routing, role-gated screens and forms.

mod api;
mod app;
mod components;
mod containers;
mod format;
mod hooks;
mod language;
mod models;
mod pages;
mod routes;
mod session;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::supported_languages;
use models::app_state::AppState;
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::Dispatch;
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let cx = yewdux::Context::new();
    Dispatch::<AppState>::new(&cx).set(AppState::default());
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: language::DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn panic_message(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = info
        .payload()
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| info.payload().downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    match info.location() {
        Some(at) => format!("CRM console panicked: {payload} ({}:{})", at.file(), at.line()),
        None => format!("CRM console panicked: {payload}"),
    }
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        web_sys::console::error_1(&panic_message(info).into());
    }));

    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(body) => {
            web_sys::console::log_1(&"Mounting CRM console".into());
            Renderer::<InternationalApp>::with_root(body.into()).render();
        }
        None => web_sys::console::error_1(&"No <body> element to mount into".into()),
    }
}
