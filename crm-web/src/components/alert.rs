use i18nrs::yew::use_translation;
use yew::{AttrValue, Callback, Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    #[allow(dead_code)]
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert-error",
            Self::Success => "alert-success",
            Self::Info => "alert-info",
        }
    }

    fn icon(self) -> IconId {
        match self {
            Self::Error => IconId::HeroiconsOutlineExclamationTriangle,
            Self::Success => IconId::HeroiconsOutlineCheckCircle,
            Self::Info => IconId::HeroiconsOutlineInformationCircle,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub kind: AlertKind,
    /// Shows a retry button when set.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div role="alert" class={classes!("alert", "shadow", props.kind.class())}>
            <Icon icon_id={props.kind.icon()} class="w-6 h-6" />
            <span>{ props.message.clone() }</span>
            <div class="flex gap-2">
                if let Some(on_retry) = props.on_retry.clone() {
                    <button class="btn btn-sm" onclick={move |_| on_retry.emit(())}>
                        { i18n.t("common.retry") }
                    </button>
                }
                if let Some(on_dismiss) = props.on_dismiss.clone() {
                    <button class="btn btn-sm btn-ghost" onclick={move |_| on_dismiss.emit(())}>
                        { i18n.t("common.dismiss") }
                    </button>
                }
            </div>
        </div>
    }
}
