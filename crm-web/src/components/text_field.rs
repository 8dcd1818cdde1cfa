use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::{
    AttrValue, Callback, Html, InputEvent, Properties, TargetCast, classes, function_component,
    html,
};

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Validate on blur.
    #[prop_or_default]
    pub on_blur: Option<Callback<()>>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub multiline: bool,
}

/// Labelled input with an inline validation message.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let onblur = props.on_blur.clone().map(|on_blur| {
        Callback::from(move |_: yew::FocusEvent| on_blur.emit(()))
    });
    let error_class = props.error.is_some().then_some("input-error");

    let control = if props.multiline {
        let on_input = props.on_input.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            on_input.emit(input.value());
        });
        html! {
            <textarea
                id={props.id.clone()}
                class={classes!("textarea", "textarea-bordered", "w-full", error_class)}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
                {onblur}
            />
        }
    } else {
        let on_input = props.on_input.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_input.emit(input.value());
        });
        html! {
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                class={classes!("input", "input-bordered", "w-full", error_class)}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
                {onblur}
            />
        }
    };

    html! {
        <div class="form-control w-full">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            { control }
            if let Some(error) = props.error.clone() {
                <label class="label">
                    <span class="label-text-alt text-error">{ error }</span>
                </label>
            }
        </div>
    }
}
