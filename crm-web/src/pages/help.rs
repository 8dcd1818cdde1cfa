use crate::session::use_session;
use i18nrs::yew::use_translation;
use shared::models::UserRole;
use yew::{Html, function_component, html};

const STAFF_TOPICS: &[&str] = &["customers", "products", "documents", "analytics", "team"];
const CUSTOMER_TOPICS: &[&str] = &["products", "documents"];
const COMMON_TOPICS: &[&str] = &["profile", "password", "notifications"];

/// FAQ topics relevant to `role`, each a key under `help.faq`.
fn topics(role: Option<UserRole>) -> Vec<&'static str> {
    let specific = match role {
        Some(role) if role.is_staff() => STAFF_TOPICS,
        Some(UserRole::Customer) => CUSTOMER_TOPICS,
        _ => &[],
    };
    specific.iter().chain(COMMON_TOPICS).copied().collect()
}

#[function_component(HelpPage)]
pub fn help_page() -> Html {
    let (i18n, _) = use_translation();
    let session = use_session();

    html! {
        <div class="space-y-4 max-w-3xl">
            <h2 class="text-xl font-semibold">{ i18n.t("help.title") }</h2>
            <p class="text-base-content/70">{ i18n.t("help.intro") }</p>
            <div class="join join-vertical w-full">
                { for topics(session.role()).into_iter().map(|topic| html! {
                    <div key={topic} class="collapse collapse-arrow join-item border border-base-300">
                        <input type="radio" name="help-faq" />
                        <div class="collapse-title font-medium">
                            { i18n.t(&format!("help.faq.{topic}.question")) }
                        </div>
                        <div class="collapse-content">
                            <p>{ i18n.t(&format!("help.faq.{topic}.answer")) }</p>
                        </div>
                    </div>
                }) }
            </div>
            <p class="text-sm">{ i18n.t("help.contact") }</p>
        </div>
    }
}
