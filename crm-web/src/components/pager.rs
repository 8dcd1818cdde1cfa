use i18nrs::yew::use_translation;
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    /// One-based.
    pub page: usize,
    pub total_pages: usize,
    pub on_change: Callback<usize>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let (i18n, _) = use_translation();
    if props.total_pages <= 1 {
        return html! {};
    }

    let page = props.page.clamp(1, props.total_pages);
    let prev = {
        let on_change = props.on_change.clone();
        move |_| on_change.emit(page - 1)
    };
    let next = {
        let on_change = props.on_change.clone();
        move |_| on_change.emit(page + 1)
    };

    html! {
        <div class="join mt-4">
            <button class="join-item btn btn-sm" disabled={page <= 1} onclick={prev}>{ "«" }</button>
            <span class="join-item btn btn-sm btn-disabled">
                { format!("{} {page} / {}", i18n.t("common.page"), props.total_pages) }
            </span>
            <button class="join-item btn btn-sm" disabled={page >= props.total_pages} onclick={next}>{ "»" }</button>
        </div>
    }
}
