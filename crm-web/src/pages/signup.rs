use crate::components::{Alert, TextField};
use crate::routes::Route;
use crate::session::use_session_handle;
use i18nrs::yew::use_translation;
use shared::validation::{validate_confirm_password, validate_email, validate_password};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Account creation. New accounts start with an incomplete profile, so the
/// router sends them on to onboarding.
#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let (i18n, _) = use_translation();
    let handle = use_session_handle();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let email_error = use_state(|| None::<AttrValue>);
    let password_error = use_state(|| None::<AttrValue>);
    let confirm_error = use_state(|| None::<AttrValue>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let confirm_error = confirm_error.clone();
        let error = error.clone();
        let loading = loading.clone();
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }

            let translate = |err: shared::validation::ValidationError| -> AttrValue {
                i18n.t(err.message_key()).into()
            };
            let checks = [
                (validate_email(&email).err(), &email_error),
                (validate_password(&password).err(), &password_error),
                (validate_confirm_password(&confirm, &password).err(), &confirm_error),
            ];
            let mut valid = true;
            for (check, slot) in checks {
                valid &= check.is_none();
                slot.set(check.map(translate));
            }
            if !valid {
                return;
            }

            loading.set(true);
            error.set(None);
            let handle = handle.clone();
            let name_value = (*name).clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                let name = Some(name_value.as_str()).filter(|name| !name.trim().is_empty());
                match handle.store.signup(&email_value, &password_value, name).await {
                    Ok(_) => handle.publish(),
                    Err(err) => {
                        error.set(Some(err.message().to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |value: String| state.set(value))
    };
    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 p-4">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{ i18n.t("auth.signup.heading") }</h2>
                    if let Some(message) = &*error {
                        <Alert message={message.clone()} />
                    }
                    <TextField
                        id="name"
                        label={i18n.t("auth.fields.name")}
                        value={(*name).clone()}
                        on_input={setter(&name)}
                        disabled={is_busy}
                    />
                    <TextField
                        id="email"
                        label={i18n.t("auth.fields.email")}
                        input_type="email"
                        value={(*email).clone()}
                        on_input={setter(&email)}
                        error={(*email_error).clone()}
                        disabled={is_busy}
                    />
                    <TextField
                        id="password"
                        label={i18n.t("auth.fields.password")}
                        input_type="password"
                        value={(*password).clone()}
                        on_input={setter(&password)}
                        error={(*password_error).clone()}
                        disabled={is_busy}
                    />
                    <TextField
                        id="confirm-password"
                        label={i18n.t("auth.fields.confirm_password")}
                        input_type="password"
                        value={(*confirm).clone()}
                        on_input={setter(&confirm)}
                        error={(*confirm_error).clone()}
                        disabled={is_busy}
                    />
                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { i18n.t("auth.signup.submit") }
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        { i18n.t("auth.signup.have_account") }{ " " }
                        <Link<Route> to={Route::Login} classes="link link-primary">
                            { i18n.t("auth.signup.login_link") }
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
