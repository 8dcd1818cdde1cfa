use crate::components::{Alert, TextField};
use i18nrs::yew::use_translation;
use shared::models::{AccountInput, AccountUpdate, UserProfile};
use shared::validation::{ValidationError, validate_email, validate_password, validate_phone};
use yew::prelude::*;

/// Raw form values of an account editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDraft {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|value| !value.is_empty())
}

impl AccountDraft {
    pub fn from_profile(user: &UserProfile) -> Self {
        Self {
            email: user.email.clone(),
            password: String::new(),
            name: user.name.clone().unwrap_or_default(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            country: user.country.clone().unwrap_or_default(),
            city: user.city.clone().unwrap_or_default(),
        }
    }

    /// Field errors; the password is only checked for new accounts.
    pub fn errors(&self, creating: bool) -> AccountErrors {
        AccountErrors {
            email: validate_email(&self.email).err(),
            password: creating
                .then(|| validate_password(&self.password).err())
                .flatten(),
            phone_number: validate_phone(&self.phone_number).err(),
        }
    }

    pub fn to_input(&self) -> AccountInput {
        AccountInput {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            name: optional(&self.name),
            phone_number: optional(&self.phone_number),
            country: optional(&self.country),
            city: optional(&self.city),
        }
    }

    pub fn to_update(&self) -> AccountUpdate {
        AccountUpdate {
            email: optional(&self.email),
            name: optional(&self.name),
            phone_number: optional(&self.phone_number),
            country: optional(&self.country),
            city: optional(&self.city),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
    pub phone_number: Option<ValidationError>,
}

impl AccountErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.phone_number.is_none()
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountFormProps {
    pub title: AttrValue,
    /// `None` creates a new account.
    #[prop_or_default]
    pub editing: Option<UserProfile>,
    pub on_submit: Callback<AccountDraft>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// Modal editor for admin and customer accounts.
#[function_component(AccountForm)]
pub fn account_form(props: &AccountFormProps) -> Html {
    let (i18n, _) = use_translation();
    let creating = props.editing.is_none();
    let draft = use_state(|| {
        props
            .editing
            .as_ref()
            .map(AccountDraft::from_profile)
            .unwrap_or_default()
    });
    let errors = use_state(AccountErrors::default);

    let field = |update: fn(&mut AccountDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            update(&mut next, value);
            draft.set(next);
        })
    };
    let message = |error: Option<ValidationError>| -> Option<AttrValue> {
        error.map(|error| i18n.t(error.message_key()).into())
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let found = draft.errors(creating);
            errors.set(found);
            if found.is_empty() {
                on_submit.emit((*draft).clone());
            }
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog">
            <form class="modal-box space-y-2" {onsubmit} novalidate=true>
                <h3 class="font-bold text-lg">{ props.title.clone() }</h3>
                if let Some(error) = props.error.clone() {
                    <Alert message={error} />
                }
                <TextField
                    id="account-email"
                    label={i18n.t("auth.fields.email")}
                    input_type="email"
                    value={draft.email.clone()}
                    on_input={field(|draft, value| draft.email = value)}
                    error={message(errors.email)}
                    disabled={props.busy}
                />
                if creating {
                    <TextField
                        id="account-password"
                        label={i18n.t("auth.fields.password")}
                        input_type="password"
                        value={draft.password.clone()}
                        on_input={field(|draft, value| draft.password = value)}
                        error={message(errors.password)}
                        disabled={props.busy}
                    />
                }
                <TextField
                    id="account-name"
                    label={i18n.t("auth.fields.name")}
                    value={draft.name.clone()}
                    on_input={field(|draft, value| draft.name = value)}
                    disabled={props.busy}
                />
                <TextField
                    id="account-phone"
                    label={i18n.t("auth.fields.phone")}
                    input_type="tel"
                    value={draft.phone_number.clone()}
                    on_input={field(|draft, value| draft.phone_number = value)}
                    error={message(errors.phone_number)}
                    disabled={props.busy}
                />
                <div class="grid grid-cols-2 gap-4">
                    <TextField
                        id="account-country"
                        label={i18n.t("auth.fields.country")}
                        value={draft.country.clone()}
                        on_input={field(|draft, value| draft.country = value)}
                        disabled={props.busy}
                    />
                    <TextField
                        id="account-city"
                        label={i18n.t("auth.fields.city")}
                        value={draft.city.clone()}
                        on_input={field(|draft, value| draft.city = value)}
                        disabled={props.busy}
                    />
                </div>
                <div class="modal-action">
                    <button class="btn" type="button" disabled={props.busy} onclick={on_cancel}>
                        { i18n.t("common.cancel") }
                    </button>
                    <button class="btn btn-primary" type="submit" disabled={props.busy}>
                        { i18n.t("common.save") }
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> AccountDraft {
        AccountDraft {
            email: " jane@example.com ".to_string(),
            password: "longenough".to_string(),
            name: "Jane".to_string(),
            phone_number: String::new(),
            country: "  ".to_string(),
            city: "Porto".to_string(),
        }
    }

    #[test]
    fn test_input_trims_and_drops_blank_fields() {
        let input = draft().to_input();

        assert_eq!(input.email, "jane@example.com");
        assert_eq!(input.name.as_deref(), Some("Jane"));
        assert_eq!(input.phone_number, None);
        assert_eq!(input.country, None);
        assert_eq!(input.city.as_deref(), Some("Porto"));
    }

    #[test]
    fn test_password_only_checked_when_creating() {
        let mut draft = draft();
        draft.password = "short".to_string();

        assert_eq!(
            draft.errors(true).password,
            Some(ValidationError::PasswordTooShort)
        );
        assert!(draft.errors(false).is_empty());
    }

    #[test]
    fn test_invalid_email_and_phone_reported() {
        let mut draft = draft();
        draft.email = "nope".to_string();
        draft.phone_number = "12".to_string();

        let errors = draft.errors(false);
        assert_eq!(errors.email, Some(ValidationError::InvalidEmail));
        assert_eq!(errors.phone_number, Some(ValidationError::InvalidPhone));
    }
}
