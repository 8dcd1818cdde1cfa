use crate::routes::Route;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

/// Password recovery is handled by support; this page says how to reach them.
#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 p-4">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body items-center text-center">
                    <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-12 h-12 text-primary" />
                    <h2 class="card-title text-2xl">{ i18n.t("auth.forgot.heading") }</h2>
                    <p>{ i18n.t("auth.forgot.body") }</p>
                    <div class="card-actions mt-4">
                        <Link<Route> to={Route::Login} classes="btn btn-primary">
                            { i18n.t("auth.forgot.back") }
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
