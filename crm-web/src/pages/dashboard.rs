use crate::components::{BarChart, StatCard, render_loadable};
use crate::format::{count, date, money};
use crate::hooks::use_fetch;
use crate::routes::Route;
use i18nrs::yew::use_translation;
use shared::models::{DashboardQuery, DashboardStats};
use yew::{Html, function_component, html};
use yew_icons::IconId;
use yew_router::prelude::*;

/// Staff overview: totals, the sales trend and the latest activity.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let stats = use_fetch((), |client, ()| async move {
        client.dashboard_stats(&DashboardQuery::default()).await
    });

    let render = |stats: &DashboardStats| {
        let totals = &stats.totals;
        let summary = stats.sales_summary();
        let bars: Vec<(String, f64)> = stats
            .sales_chart
            .iter()
            .map(|point| (point.label.clone(), point.amount))
            .collect();

        html! {
            <div class="space-y-6">
                <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                    <StatCard
                        title={i18n.t("dashboard.customers")}
                        value={count(totals.customers)}
                        icon={IconId::HeroiconsOutlineUsers}
                    />
                    <StatCard
                        title={i18n.t("dashboard.products")}
                        value={count(totals.products)}
                        icon={IconId::HeroiconsOutlineCube}
                        accent="text-secondary"
                    />
                    <StatCard
                        title={i18n.t("dashboard.sales")}
                        value={count(totals.sales)}
                        icon={IconId::HeroiconsOutlineShoppingCart}
                        accent="text-accent"
                    />
                    <StatCard
                        title={i18n.t("dashboard.revenue")}
                        value={money(totals.revenue)}
                        icon={IconId::HeroiconsOutlineCurrencyDollar}
                        accent="text-success"
                        description={format!("{} {}", i18n.t("dashboard.average"), money(summary.average_sale))}
                    />
                </div>

                <div class="card bg-base-200 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{ i18n.t("dashboard.sales_trend") }</h2>
                        if bars.is_empty() {
                            <p class="text-base-content/70">{ i18n.t("common.empty") }</p>
                        } else {
                            <BarChart bars={bars} currency=true />
                        }
                        if let Some(best) = summary.best_period.clone() {
                            <p class="text-sm">{ format!("{}: {best}", i18n.t("dashboard.best_period")) }</p>
                        }
                    </div>
                </div>

                <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                    <div class="card bg-base-200 shadow">
                        <div class="card-body">
                            <div class="flex justify-between items-center">
                                <h2 class="card-title">{ i18n.t("dashboard.recent_sales") }</h2>
                                <Link<Route> to={Route::Orders} classes="link link-primary text-sm">
                                    { i18n.t("common.view_all") }
                                </Link<Route>>
                            </div>
                            <table class="table table-sm">
                                <tbody>
                                    { for stats.recent_sales.iter().map(|sale| html! {
                                        <tr key={sale.id.clone()}>
                                            <td>{ sale.customer_name.clone().or_else(|| sale.customer_email.clone()).unwrap_or_default() }</td>
                                            <td>{ sale.product_name.clone().unwrap_or_default() }</td>
                                            <td class="text-right">{ money(sale.amount) }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </div>
                    <div class="card bg-base-200 shadow">
                        <div class="card-body">
                            <div class="flex justify-between items-center">
                                <h2 class="card-title">{ i18n.t("dashboard.recent_customers") }</h2>
                                <Link<Route> to={Route::Customers} classes="link link-primary text-sm">
                                    { i18n.t("common.view_all") }
                                </Link<Route>>
                            </div>
                            <table class="table table-sm">
                                <tbody>
                                    { for stats.recent_customers.iter().map(|customer| html! {
                                        <tr key={customer.id.clone()}>
                                            <td>{ customer.display_name().to_string() }</td>
                                            <td>{ &customer.email }</td>
                                            <td class="text-right">{ date(customer.created_at.as_ref()) }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        }
    };

    render_loadable(&*stats.state, &stats.reload, render)
}
