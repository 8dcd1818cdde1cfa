use crate::components::{Pager, render_loadable};
use crate::format::{date, money};
use crate::hooks::use_fetch;
use i18nrs::yew::use_translation;
use shared::models::{DashboardQuery, DashboardStats, SaleRecord};
use yew::prelude::*;

const PER_PAGE: u32 = 20;

fn sales_query(page: u32) -> DashboardQuery {
    DashboardQuery {
        page,
        limit: PER_PAGE,
        only_sales: Some(true),
        ..DashboardQuery::default()
    }
}

fn status_badge(status: Option<&str>) -> &'static str {
    match status.map(str::to_ascii_lowercase).as_deref() {
        Some("completed" | "paid") => "badge-success",
        Some("pending") => "badge-warning",
        Some("cancelled" | "refunded" | "failed") => "badge-error",
        _ => "badge-ghost",
    }
}

fn customer_label(sale: &SaleRecord) -> String {
    sale.customer_name
        .clone()
        .or_else(|| sale.customer_email.clone())
        .unwrap_or_else(|| "-".to_string())
}

/// Completed sales, paged by the backend.
#[function_component(OrdersPage)]
pub fn orders_page() -> Html {
    let (i18n, _) = use_translation();
    let page = use_state(|| 1_u32);
    let sales = use_fetch(*page, |client, page| async move {
        client.dashboard_stats(&sales_query(page)).await
    });

    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(u32::try_from(next).unwrap_or(1)))
    };

    let render = |stats: &DashboardStats| {
        if stats.recent_sales.is_empty() {
            return html! { <p class="text-base-content/70 py-6">{ i18n.t("orders.empty") }</p> };
        }
        let total_pages = stats
            .pagination
            .map_or(1, |pagination| pagination.total_pages.max(1));

        html! {
            <>
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{ i18n.t("orders.reference") }</th>
                                <th>{ i18n.t("orders.customer") }</th>
                                <th>{ i18n.t("orders.product") }</th>
                                <th>{ i18n.t("orders.status") }</th>
                                <th>{ i18n.t("orders.date") }</th>
                                <th class="text-right">{ i18n.t("orders.amount") }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for stats.recent_sales.iter().map(|sale| html! {
                                <tr key={sale.id.clone()}>
                                    <td class="font-mono text-xs">{ &sale.id }</td>
                                    <td>{ customer_label(sale) }</td>
                                    <td>{ sale.product_name.clone().unwrap_or_default() }</td>
                                    <td>
                                        <span class={classes!("badge", status_badge(sale.status.as_deref()))}>
                                            { sale.status.clone().unwrap_or_else(|| "-".to_string()) }
                                        </span>
                                    </td>
                                    <td>{ date(sale.created_at.as_ref()) }</td>
                                    <td class="text-right">{ money(sale.amount) }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
                <Pager
                    page={*page as usize}
                    total_pages={total_pages as usize}
                    on_change={on_page.clone()}
                />
            </>
        }
    };

    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body">
                <h2 class="card-title">{ i18n.t("orders.title") }</h2>
                { render_loadable(&*sales.state, &sales.reload, render) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_query_requests_only_sales() {
        let pairs = sales_query(3).to_pairs();

        assert!(pairs.contains(&("page", "3".to_string())));
        assert!(pairs.contains(&("limit", "20".to_string())));
        assert!(pairs.contains(&("onlySales", "true".to_string())));
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(status_badge(Some("Completed")), "badge-success");
        assert_eq!(status_badge(Some("pending")), "badge-warning");
        assert_eq!(status_badge(Some("refunded")), "badge-error");
        assert_eq!(status_badge(None), "badge-ghost");
    }
}
