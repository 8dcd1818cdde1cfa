use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex flex-col items-center justify-center h-full min-h-[12rem] animate-fadeIn">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                <span class="mt-3">{ i18n.t("common.loading") }</span>
            </div>
        </div>
    }
}
