use crate::components::{Alert, FilePicker, TextField, read_upload};
use crate::session::{use_session, use_session_handle};
use i18nrs::yew::use_translation;
use shared::models::ProfileUpdate;
use shared::validation::{validate_phone, validate_required};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

fn non_empty(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Onboarding form shown until the backend marks the profile complete.
#[function_component(CompleteProfilePage)]
pub fn complete_profile_page() -> Html {
    let (i18n, _) = use_translation();
    let handle = use_session_handle();
    let session = use_session();
    let user = session.user.clone();

    let name = use_state(|| user.as_ref().and_then(|user| user.name.clone()).unwrap_or_default());
    let phone = use_state(|| {
        user.as_ref()
            .and_then(|user| user.phone_number.clone())
            .unwrap_or_default()
    });
    let country = use_state(|| user.as_ref().and_then(|user| user.country.clone()).unwrap_or_default());
    let city = use_state(|| user.as_ref().and_then(|user| user.city.clone()).unwrap_or_default());
    let picture = use_state(|| user.as_ref().and_then(|user| user.profile_picture.clone()));
    let name_error = use_state(|| None::<AttrValue>);
    let phone_error = use_state(|| None::<AttrValue>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_picture = {
        let picture = picture.clone();
        let error = error.clone();
        let busy = busy.clone();
        let client = handle.store.client().clone();
        Callback::from(move |files: Vec<File>| {
            let Some(file) = files.into_iter().next() else {
                return;
            };
            busy.set(true);
            let picture = picture.clone();
            let error = error.clone();
            let busy = busy.clone();
            let client = client.clone();
            spawn_local(async move {
                let result = match read_upload(&file).await {
                    Ok(upload) => client.upload_image(upload).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(uploaded) => picture.set(Some(uploaded.url)),
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                busy.set(false);
            });
        })
    };

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let country = country.clone();
        let city = city.clone();
        let picture = picture.clone();
        let name_error = name_error.clone();
        let phone_error = phone_error.clone();
        let error = error.clone();
        let busy = busy.clone();
        let handle = handle.clone();
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let name_check = validate_required(&name).err();
            let phone_check = validate_phone(&phone).err();
            name_error.set(name_check.map(|err| i18n.t(err.message_key()).into()));
            phone_error.set(phone_check.map(|err| i18n.t(err.message_key()).into()));
            if name_check.is_some() || phone_check.is_some() {
                return;
            }

            let update = ProfileUpdate {
                name: non_empty(&name),
                profile_picture: (*picture).clone(),
                phone_number: non_empty(&phone),
                country: non_empty(&country),
                city: non_empty(&city),
            };
            busy.set(true);
            error.set(None);
            let handle = handle.clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match handle.store.update_profile(&update).await {
                    Ok(_) => handle.publish(),
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                busy.set(false);
            });
        })
    };

    let on_logout = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.logout())
    };
    let setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |value: String| state.set(value))
    };
    let is_busy = *busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 p-4">
            <div class="card w-full max-w-lg shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{ i18n.t("auth.complete.heading") }</h2>
                    <p class="text-base-content/70">{ i18n.t("auth.complete.subheading") }</p>
                    if let Some(message) = &*error {
                        <Alert message={message.clone()} />
                    }
                    if let Some(url) = &*picture {
                        <div class="avatar self-center">
                            <div class="w-24 rounded-full">
                                <img src={url.clone()} alt="" />
                            </div>
                        </div>
                    }
                    <FilePicker
                        label={i18n.t("auth.complete.picture")}
                        accept="image/*"
                        on_select={on_picture}
                        disabled={is_busy}
                    />
                    <TextField
                        id="name"
                        label={i18n.t("auth.fields.name")}
                        value={(*name).clone()}
                        on_input={setter(&name)}
                        error={(*name_error).clone()}
                        disabled={is_busy}
                    />
                    <TextField
                        id="phone"
                        label={i18n.t("auth.fields.phone")}
                        input_type="tel"
                        value={(*phone).clone()}
                        on_input={setter(&phone)}
                        error={(*phone_error).clone()}
                        disabled={is_busy}
                    />
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <TextField
                            id="country"
                            label={i18n.t("auth.fields.country")}
                            value={(*country).clone()}
                            on_input={setter(&country)}
                            disabled={is_busy}
                        />
                        <TextField
                            id="city"
                            label={i18n.t("auth.fields.city")}
                            value={(*city).clone()}
                            on_input={setter(&city)}
                            disabled={is_busy}
                        />
                    </div>
                    <div class="card-actions justify-between mt-4">
                        <button class="btn btn-ghost" type="button" disabled={is_busy} onclick={on_logout}>
                            { i18n.t("header.logout") }
                        </button>
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { i18n.t("auth.complete.submit") }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims_and_drops_blanks() {
        assert_eq!(non_empty("  Lisbon "), Some("Lisbon".to_string()));
        assert_eq!(non_empty("   "), None);
    }
}
