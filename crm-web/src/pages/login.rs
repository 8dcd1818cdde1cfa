use crate::components::{Alert, TextField};
use crate::routes::Route;
use crate::session::use_session_handle;
use i18nrs::yew::use_translation;
use shared::validation::{validate_email, validate_required};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Email/password sign-in. The router moves the user on once the session
/// holds a profile.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, _) = use_translation();
    let handle = use_session_handle();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| None::<AttrValue>);
    let password_error = use_state(|| None::<AttrValue>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let error = error.clone();
        let loading = loading.clone();
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }

            let email_check = validate_email(&email).err();
            let password_check = validate_required(&password).err();
            email_error.set(email_check.map(|err| i18n.t(err.message_key()).into()));
            password_error.set(password_check.map(|err| i18n.t(err.message_key()).into()));
            if email_check.is_some() || password_check.is_some() {
                return;
            }

            loading.set(true);
            error.set(None);
            let handle = handle.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match handle.store.login(&email_value, &password_value).await {
                    Ok(user) => {
                        log(&format!("Signed in as {}", user.email));
                        handle.publish();
                    }
                    Err(err) => {
                        error.set(Some(err.message().to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };
    let on_email_blur = {
        let email = email.clone();
        let email_error = email_error.clone();
        let i18n = i18n.clone();
        Callback::from(move |()| {
            email_error.set(validate_email(&email).err().map(|err| i18n.t(err.message_key()).into()));
        })
    };

    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 p-4">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{ i18n.t("auth.login.heading") }</h2>
                    <p class="text-base-content/70">{ i18n.t("auth.login.subheading") }</p>
                    if let Some(message) = &*error {
                        <Alert message={message.clone()} />
                    }
                    <TextField
                        id="email"
                        label={i18n.t("auth.fields.email")}
                        input_type="email"
                        value={(*email).clone()}
                        on_input={on_email}
                        on_blur={Some(on_email_blur)}
                        error={(*email_error).clone()}
                        disabled={is_busy}
                    />
                    <TextField
                        id="password"
                        label={i18n.t("auth.fields.password")}
                        input_type="password"
                        value={(*password).clone()}
                        on_input={on_password}
                        error={(*password_error).clone()}
                        disabled={is_busy}
                    />
                    <div class="flex justify-end">
                        <Link<Route> to={Route::ForgotPassword} classes="link link-hover text-sm">
                            { i18n.t("auth.login.forgot") }
                        </Link<Route>>
                    </div>
                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            if is_busy {
                                <span class="loading loading-spinner"></span>
                                { i18n.t("auth.login.submitting") }
                            } else {
                                { i18n.t("auth.login.submit") }
                            }
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        { i18n.t("auth.login.no_account") }{ " " }
                        <Link<Route> to={Route::Signup} classes="link link-primary">
                            { i18n.t("auth.login.signup_link") }
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
