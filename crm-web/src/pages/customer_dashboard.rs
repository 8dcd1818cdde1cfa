use crate::components::{StatCard, render_loadable};
use crate::format::{count, date, money};
use crate::hooks::use_fetch;
use crate::routes::Route;
use crate::session::use_session;
use i18nrs::yew::use_translation;
use shared::ApiError;
use shared::models::{DocumentListResponse, NotificationPage, ProductListResponse};
use yew::{Html, function_component, html};
use yew_icons::IconId;
use yew_router::prelude::*;

const RECENT: usize = 5;

/// Everything the customer home screen shows, fetched together.
#[derive(Debug, Clone, PartialEq)]
struct Overview {
    selected: ProductListResponse,
    documents: DocumentListResponse,
    notifications: NotificationPage,
}

impl Overview {
    fn selected_value(&self) -> f64 {
        self.selected.products.iter().map(|product| product.price).sum()
    }
}

/// Landing page for customers: their selection, files and unread notices.
#[function_component(CustomerDashboardPage)]
pub fn customer_dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let session = use_session();
    let overview = use_fetch((), |client, ()| async move {
        Ok::<_, ApiError>(Overview {
            selected: client.list_selected_products().await?,
            documents: client.list_documents().await?,
            notifications: client.notifications(1, 10).await?,
        })
    });
    let greeting = session
        .user
        .as_ref()
        .map(|user| format!("{}, {}", i18n.t("customer.welcome"), user.display_name()))
        .unwrap_or_else(|| i18n.t("customer.welcome"));

    let render = |overview: &Overview| {
        html! {
            <div class="space-y-6">
                <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                    <StatCard
                        title={i18n.t("customer.selected_products")}
                        value={count(overview.selected.products.len() as u64)}
                        icon={IconId::HeroiconsOutlineCube}
                        description={format!("{} {}", i18n.t("customer.selected_value"), money(overview.selected_value()))}
                    />
                    <StatCard
                        title={i18n.t("customer.documents")}
                        value={count(overview.documents.documents.len() as u64)}
                        icon={IconId::HeroiconsOutlineDocumentText}
                        accent="text-secondary"
                    />
                    <StatCard
                        title={i18n.t("notifications.unread")}
                        value={count(overview.notifications.unread_count() as u64)}
                        icon={IconId::HeroiconsOutlineBell}
                        accent="text-accent"
                    />
                </div>

                <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                    <div class="card bg-base-200 shadow">
                        <div class="card-body">
                            <div class="flex justify-between items-center">
                                <h2 class="card-title">{ i18n.t("customer.my_products") }</h2>
                                <Link<Route> to={Route::CustomerProducts} classes="link link-primary text-sm">
                                    { i18n.t("customer.browse") }
                                </Link<Route>>
                            </div>
                            if overview.selected.products.is_empty() {
                                <p class="text-base-content/70">{ i18n.t("customer.no_products") }</p>
                            } else {
                                <ul class="divide-y divide-base-300">
                                    { for overview.selected.products.iter().take(RECENT).map(|product| html! {
                                        <li key={product.id.clone()} class="py-2 flex justify-between">
                                            <span>{ &product.name }</span>
                                            <span>{ money(product.price) }</span>
                                        </li>
                                    }) }
                                </ul>
                            }
                        </div>
                    </div>
                    <div class="card bg-base-200 shadow">
                        <div class="card-body">
                            <div class="flex justify-between items-center">
                                <h2 class="card-title">{ i18n.t("customer.recent_documents") }</h2>
                                <Link<Route> to={Route::CustomerDocuments} classes="link link-primary text-sm">
                                    { i18n.t("common.view_all") }
                                </Link<Route>>
                            </div>
                            if overview.documents.documents.is_empty() {
                                <p class="text-base-content/70">{ i18n.t("documents.empty") }</p>
                            } else {
                                <ul class="divide-y divide-base-300">
                                    { for overview.documents.documents.iter().take(RECENT).map(|document| html! {
                                        <li key={document.id.clone()} class="py-2 flex justify-between">
                                            <a class="link" href={document.file_url.clone()} target="_blank" rel="noopener">
                                                { &document.title }
                                            </a>
                                            <span class="text-sm text-base-content/70">{ date(document.created_at.as_ref()) }</span>
                                        </li>
                                    }) }
                                </ul>
                            }
                        </div>
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{ greeting }</h1>
            { render_loadable(&*overview.state, &overview.reload, render) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_value_sums_prices() {
        let overview = Overview {
            selected: serde_json::from_str(
                r#"{"products":[{"id":"p1","name":"A","price":10.5},{"id":"p2","name":"B","price":4.5}]}"#,
            )
            .unwrap(),
            documents: DocumentListResponse::default(),
            notifications: NotificationPage::default(),
        };

        assert!((overview.selected_value() - 15.0).abs() < f64::EPSILON);
    }
}
