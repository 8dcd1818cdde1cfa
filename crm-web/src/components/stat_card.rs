use yew::{AttrValue, Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: IconId,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or(AttrValue::from("text-primary"))]
    pub accent: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat">
            <div class={classes!("stat-figure", props.accent.to_string())}>
                <Icon icon_id={props.icon} class="w-8 h-8" />
            </div>
            <div class="stat-title">{ props.title.clone() }</div>
            <div class={classes!("stat-value", props.accent.to_string())}>{ props.value.clone() }</div>
            if let Some(description) = props.description.clone() {
                <div class="stat-desc">{ description }</div>
            }
        </div>
    }
}
