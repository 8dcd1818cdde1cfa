use crate::components::{Alert, AlertKind, FilePicker, TextField, read_upload, render_loadable};
use crate::containers::account_directory::{AccountDirectory, AccountKind};
use crate::hooks::{use_fetch, use_flash};
use crate::session::{use_session, use_session_handle};
use i18nrs::yew::use_translation;
use shared::models::{ProfileUpdate, Settings, UserProfile, UserRole};
use shared::validation::{
    ValidationError, validate_confirm_password, validate_email, validate_password, validate_phone,
    validate_required,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|value| !value.is_empty())
}

fn setter(state: &UseStateHandle<String>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| state.set(value))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PasswordErrors {
    current: Option<ValidationError>,
    new: Option<ValidationError>,
    confirm: Option<ValidationError>,
}

impl PasswordErrors {
    fn check(current: &str, new: &str, confirm: &str) -> Self {
        Self {
            current: validate_required(current).err(),
            new: validate_password(new).err(),
            confirm: validate_confirm_password(confirm, new).err(),
        }
    }

    fn is_empty(&self) -> bool {
        self.current.is_none() && self.new.is_none() && self.confirm.is_none()
    }
}

/// Support address is optional but must be well formed when present.
fn check_support_email(value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        None
    } else {
        validate_email(value).err()
    }
}

#[derive(Properties, PartialEq)]
struct ProfileSectionProps {
    user: UserProfile,
}

#[function_component(ProfileSection)]
fn profile_section(props: &ProfileSectionProps) -> Html {
    let (i18n, _) = use_translation();
    let handle = use_session_handle();
    let flash = use_flash();
    let user = &props.user;

    let name = use_state(|| user.name.clone().unwrap_or_default());
    let phone = use_state(|| user.phone_number.clone().unwrap_or_default());
    let country = use_state(|| user.country.clone().unwrap_or_default());
    let city = use_state(|| user.city.clone().unwrap_or_default());
    let picture = use_state(|| user.profile_picture.clone());
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
                let uploaded = match read_upload(&file).await {
                    Ok(upload) => client.upload_image(upload).await,
                    Err(err) => Err(err),
                };
                match uploaded {
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
        let phone_error = phone_error.clone();
        let error = error.clone();
        let busy = busy.clone();
        let handle = handle.clone();
        let show = flash.show.clone();
        let saved = i18n.t("settings.profile_saved");
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let phone_check = validate_phone(&phone).err();
            phone_error.set(phone_check.map(|err| i18n.t(err.message_key()).into()));
            if phone_check.is_some() {
                return;
            }
            let update = ProfileUpdate {
                name: optional(&name),
                profile_picture: (*picture).clone(),
                phone_number: optional(&phone),
                country: optional(&country),
                city: optional(&city),
            };
            busy.set(true);
            error.set(None);
            let handle = handle.clone();
            let error = error.clone();
            let busy = busy.clone();
            let show = show.clone();
            let saved = saved.clone();
            spawn_local(async move {
                match handle.store.update_profile(&update).await {
                    Ok(_) => {
                        handle.publish();
                        show.emit(saved);
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                busy.set(false);
            });
        })
    };
    let is_busy = *busy;

    html! {
        <form class="card bg-base-200 shadow" {onsubmit} novalidate=true>
            <div class="card-body space-y-2">
                <h2 class="card-title">{ i18n.t("settings.profile") }</h2>
                if let Some(message) = flash.message.clone() {
                    <Alert {message} kind={AlertKind::Success} on_dismiss={flash.dismiss.clone()} />
                }
                if let Some(message) = (*error).clone() {
                    <Alert {message} />
                }
                <div class="flex items-center gap-4">
                    <div class="avatar placeholder">
                        <div class="w-16 rounded-full bg-neutral text-neutral-content">
                            if let Some(url) = (*picture).clone() {
                                <img src={url} alt="" />
                            } else {
                                <span>{ props.user.initials() }</span>
                            }
                        </div>
                    </div>
                    <div class="flex-1">
                        <FilePicker
                            label={i18n.t("auth.complete.picture")}
                            accept="image/*"
                            on_select={on_picture}
                            disabled={is_busy}
                        />
                    </div>
                </div>
                <p class="text-sm">{ format!("{}: {}", i18n.t("auth.fields.email"), props.user.email) }</p>
                <TextField
                    id="settings-name"
                    label={i18n.t("auth.fields.name")}
                    value={(*name).clone()}
                    on_input={setter(&name)}
                    disabled={is_busy}
                />
                <TextField
                    id="settings-phone"
                    label={i18n.t("auth.fields.phone")}
                    input_type="tel"
                    value={(*phone).clone()}
                    on_input={setter(&phone)}
                    error={(*phone_error).clone()}
                    disabled={is_busy}
                />
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <TextField
                        id="settings-country"
                        label={i18n.t("auth.fields.country")}
                        value={(*country).clone()}
                        on_input={setter(&country)}
                        disabled={is_busy}
                    />
                    <TextField
                        id="settings-city"
                        label={i18n.t("auth.fields.city")}
                        value={(*city).clone()}
                        on_input={setter(&city)}
                        disabled={is_busy}
                    />
                </div>
                <div class="card-actions justify-end">
                    <button class="btn btn-primary" type="submit" disabled={is_busy}>{ i18n.t("common.save") }</button>
                </div>
            </div>
        </form>
    }
}

#[function_component(PasswordSection)]
fn password_section() -> Html {
    let (i18n, _) = use_translation();
    let handle = use_session_handle();
    let flash = use_flash();
    let current = use_state(String::new);
    let new = use_state(String::new);
    let confirm = use_state(String::new);
    let errors = use_state(PasswordErrors::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let onsubmit = {
        let current = current.clone();
        let new = new.clone();
        let confirm = confirm.clone();
        let errors = errors.clone();
        let error = error.clone();
        let busy = busy.clone();
        let show = flash.show.clone();
        let changed = i18n.t("settings.password_changed");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let found = PasswordErrors::check(&current, &new, &confirm);
            errors.set(found);
            if !found.is_empty() {
                return;
            }
            busy.set(true);
            error.set(None);
            let store = handle.store.clone();
            let current = current.clone();
            let new = new.clone();
            let confirm = confirm.clone();
            let error = error.clone();
            let busy = busy.clone();
            let show = show.clone();
            let changed = changed.clone();
            spawn_local(async move {
                match store.change_password(&current, &new).await {
                    Ok(response) => {
                        current.set(String::new());
                        new.set(String::new());
                        confirm.set(String::new());
                        show.emit(response.message.unwrap_or(changed));
                    }
                    Err(err) => {
                        log(&format!("Password change rejected: {err}"));
                        error.set(Some(err.message().to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };
    let message = |error: Option<ValidationError>| -> Option<AttrValue> {
        error.map(|error| i18n.t(error.message_key()).into())
    };
    let is_busy = *busy;

    html! {
        <form class="card bg-base-200 shadow" {onsubmit} novalidate=true>
            <div class="card-body space-y-2">
                <h2 class="card-title">{ i18n.t("settings.password") }</h2>
                if let Some(message) = flash.message.clone() {
                    <Alert {message} kind={AlertKind::Success} on_dismiss={flash.dismiss.clone()} />
                }
                if let Some(message) = (*error).clone() {
                    <Alert {message} />
                }
                <TextField
                    id="current-password"
                    label={i18n.t("settings.current_password")}
                    input_type="password"
                    value={(*current).clone()}
                    on_input={setter(&current)}
                    error={message(errors.current)}
                    disabled={is_busy}
                />
                <TextField
                    id="new-password"
                    label={i18n.t("settings.new_password")}
                    input_type="password"
                    value={(*new).clone()}
                    on_input={setter(&new)}
                    error={message(errors.new)}
                    disabled={is_busy}
                />
                <TextField
                    id="confirm-new-password"
                    label={i18n.t("auth.fields.confirm_password")}
                    input_type="password"
                    value={(*confirm).clone()}
                    on_input={setter(&confirm)}
                    error={message(errors.confirm)}
                    disabled={is_busy}
                />
                <div class="card-actions justify-end">
                    <button class="btn btn-primary" type="submit" disabled={is_busy}>
                        { i18n.t("settings.change_password") }
                    </button>
                </div>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct OrganisationFormProps {
    settings: Settings,
    on_saved: Callback<()>,
}

#[function_component(OrganisationForm)]
fn organisation_form(props: &OrganisationFormProps) -> Html {
    let (i18n, _) = use_translation();
    let client = use_session_handle().store.client().clone();
    let flash = use_flash();
    let initial = &props.settings;
    let company = use_state(|| initial.company_name.clone().unwrap_or_default());
    let support = use_state(|| initial.support_email.clone().unwrap_or_default());
    let currency = use_state(|| initial.currency.clone().unwrap_or_default());
    let timezone = use_state(|| initial.timezone.clone().unwrap_or_default());
    let notify = use_state(|| initial.email_notifications);
    let support_error = use_state(|| None::<AttrValue>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_notify = {
        let notify = notify.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            notify.set(input.checked());
        })
    };

    let onsubmit = {
        let company = company.clone();
        let support = support.clone();
        let currency = currency.clone();
        let timezone = timezone.clone();
        let notify = notify.clone();
        let support_error = support_error.clone();
        let error = error.clone();
        let busy = busy.clone();
        let base = props.settings.clone();
        let on_saved = props.on_saved.clone();
        let show = flash.show.clone();
        let saved = i18n.t("settings.organisation_saved");
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let support_check = check_support_email(&support);
            support_error.set(support_check.map(|err| i18n.t(err.message_key()).into()));
            if support_check.is_some() {
                return;
            }
            let settings = Settings {
                company_name: optional(&company),
                support_email: optional(&support),
                currency: optional(&currency),
                timezone: optional(&timezone),
                email_notifications: *notify,
                ..base.clone()
            };
            busy.set(true);
            error.set(None);
            let client = client.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_saved = on_saved.clone();
            let show = show.clone();
            let saved = saved.clone();
            spawn_local(async move {
                match client.update_settings(&settings).await {
                    Ok(_) => {
                        show.emit(saved);
                        on_saved.emit(());
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                busy.set(false);
            });
        })
    };
    let is_busy = *busy;

    html! {
        <form class="space-y-2" {onsubmit} novalidate=true>
            if let Some(message) = flash.message.clone() {
                <Alert {message} kind={AlertKind::Success} on_dismiss={flash.dismiss.clone()} />
            }
            if let Some(message) = (*error).clone() {
                <Alert {message} />
            }
            <TextField
                id="company-name"
                label={i18n.t("settings.company_name")}
                value={(*company).clone()}
                on_input={setter(&company)}
                disabled={is_busy}
            />
            <TextField
                id="support-email"
                label={i18n.t("settings.support_email")}
                input_type="email"
                value={(*support).clone()}
                on_input={setter(&support)}
                error={(*support_error).clone()}
                disabled={is_busy}
            />
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <TextField
                    id="currency"
                    label={i18n.t("settings.currency")}
                    value={(*currency).clone()}
                    on_input={setter(&currency)}
                    placeholder="USD"
                    disabled={is_busy}
                />
                <TextField
                    id="timezone"
                    label={i18n.t("settings.timezone")}
                    value={(*timezone).clone()}
                    on_input={setter(&timezone)}
                    placeholder="UTC"
                    disabled={is_busy}
                />
            </div>
            <label class="label cursor-pointer justify-start gap-3">
                <input type="checkbox" class="toggle toggle-primary" checked={*notify} onchange={on_notify} disabled={is_busy} />
                <span class="label-text">{ i18n.t("settings.email_notifications") }</span>
            </label>
            <div class="flex justify-end">
                <button class="btn btn-primary" type="submit" disabled={is_busy}>{ i18n.t("common.save") }</button>
            </div>
        </form>
    }
}

#[function_component(OrganisationSection)]
fn organisation_section() -> Html {
    let (i18n, _) = use_translation();
    let settings = use_fetch((), |client, ()| async move { client.settings().await });
    let reload = settings.reload.clone();

    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body">
                <h2 class="card-title">{ i18n.t("settings.organisation") }</h2>
                { render_loadable(&*settings.state, &settings.reload, |current: &Settings| html! {
                    <OrganisationForm settings={current.clone()} on_saved={reload} />
                }) }
            </div>
        </div>
    }
}

/// Account and organisation preferences. Sections depend on the role.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let session = use_session();
    let role = session.role();

    html! {
        <div class="space-y-6 max-w-4xl">
            if let Some(user) = session.user.clone() {
                <ProfileSection {user} />
            }
            <PasswordSection />
            if role.is_some_and(UserRole::is_staff) {
                <OrganisationSection />
            }
            if role == Some(UserRole::SuperAdmin) {
                <AccountDirectory kind={AccountKind::Admin} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_errors() {
        assert!(PasswordErrors::check("old-secret", "new-secret", "new-secret").is_empty());

        let errors = PasswordErrors::check("", "short", "other");
        assert_eq!(errors.current, Some(ValidationError::Required));
        assert_eq!(errors.new, Some(ValidationError::PasswordTooShort));
        assert_eq!(errors.confirm, Some(ValidationError::PasswordsDoNotMatch));
    }

    #[test]
    fn test_support_email_optional() {
        assert_eq!(check_support_email("  "), None);
        assert_eq!(check_support_email("help@acme.io"), None);
        assert_eq!(check_support_email("nope"), Some(ValidationError::InvalidEmail));
    }
}
