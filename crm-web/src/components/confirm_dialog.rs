use i18nrs::yew::use_translation;
use yew::{AttrValue, Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub message: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub busy: bool,
}

/// Modal asking the user to confirm a destructive action.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let (i18n, _) = use_translation();
    if !props.open {
        return html! {};
    }

    let on_confirm = props.on_confirm.clone();
    let on_cancel = props.on_cancel.clone();

    html! {
        <div class="modal modal-open" role="dialog">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{ i18n.t("common.confirm_title") }</h3>
                <p class="py-4">{ props.message.clone() }</p>
                <div class="modal-action">
                    <button class="btn" disabled={props.busy} onclick={move |_| on_cancel.emit(())}>
                        { i18n.t("common.cancel") }
                    </button>
                    <button class="btn btn-error" disabled={props.busy} onclick={move |_| on_confirm.emit(())}>
                        { i18n.t("common.delete") }
                    </button>
                </div>
            </div>
        </div>
    }
}
