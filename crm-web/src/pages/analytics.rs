use crate::components::{Alert, BarChart, StatCard, render_loadable};
use crate::format::{count, money, percent};
use crate::hooks::use_fetch;
use chrono::NaiveDate;
use i18nrs::yew::use_translation;
use shared::models::{DashboardQuery, DashboardStats, DeviceStats, RangeType};
use shared::validation::validate_date_range;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::IconId;

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Query for a preset bucket size, or `None` while a custom range is incomplete.
fn range_query(
    range: RangeType,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Option<DashboardQuery> {
    let query = DashboardQuery {
        range_type: Some(range),
        ..DashboardQuery::default()
    };
    if range != RangeType::Custom {
        return Some(query);
    }
    let query = DashboardQuery {
        start_date: start,
        end_date: end,
        ..query
    };
    query.is_valid_range().then_some(query)
}

/// Sales over a selectable period plus the visitor device breakdown.
#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let (i18n, _) = use_translation();
    let range = use_state(RangeType::default);
    let start = use_state(|| None::<NaiveDate>);
    let end = use_state(|| None::<NaiveDate>);
    let applied = use_state(|| DashboardQuery {
        range_type: Some(RangeType::default()),
        ..DashboardQuery::default()
    });
    let range_error = use_state(|| None::<String>);

    let stats = use_fetch((*applied).clone(), |client, query| async move {
        client.dashboard_stats(&query).await
    });
    let devices = use_fetch((), |client, ()| async move { client.device_stats().await });

    // Presets apply immediately; custom ranges wait for both dates.
    let apply = {
        let applied = applied.clone();
        let range_error = range_error.clone();
        let i18n = i18n.clone();
        move |range: RangeType, start: Option<NaiveDate>, end: Option<NaiveDate>| {
            if let Err(err) = validate_date_range(start, end) {
                range_error.set(Some(i18n.t(err.message_key())));
                return;
            }
            range_error.set(None);
            if let Some(query) = range_query(range, start, end) {
                applied.set(query);
            }
        }
    };

    let on_range = {
        let range = range.clone();
        let start = start.clone();
        let end = end.clone();
        let apply = apply.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let Some(next) = RangeType::parse(&select.value()) else {
                return;
            };
            range.set(next);
            apply(next, *start, *end);
        })
    };
    let on_start = {
        let range = range.clone();
        let start = start.clone();
        let end = end.clone();
        let apply = apply.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let value = parse_date(&input.value());
            start.set(value);
            apply(*range, value, *end);
        })
    };
    let on_end = {
        let range = range.clone();
        let start = start.clone();
        let end = end.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let value = parse_date(&input.value());
            end.set(value);
            apply(*range, *start, value);
        })
    };

    let sales = |stats: &DashboardStats| {
        let summary = stats.sales_summary();
        let bars: Vec<(String, f64)> = stats
            .sales_chart
            .iter()
            .map(|point| (point.label.clone(), point.amount))
            .collect();
        html! {
            <>
                <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                    <StatCard
                        title={i18n.t("analytics.total_revenue")}
                        value={money(summary.total_amount)}
                        icon={IconId::HeroiconsOutlineCurrencyDollar}
                    />
                    <StatCard
                        title={i18n.t("analytics.total_sales")}
                        value={count(summary.total_count)}
                        icon={IconId::HeroiconsOutlineShoppingCart}
                        accent="text-secondary"
                    />
                    <StatCard
                        title={i18n.t("dashboard.average")}
                        value={money(summary.average_sale)}
                        icon={IconId::HeroiconsOutlineChartBar}
                        accent="text-accent"
                        description={summary.best_period.clone().map(|best| format!("{}: {best}", i18n.t("dashboard.best_period")))}
                    />
                </div>
                <div class="card bg-base-200 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{ i18n.t("dashboard.sales_trend") }</h2>
                        if bars.is_empty() {
                            <p class="text-base-content/70">{ i18n.t("common.empty") }</p>
                        } else {
                            <BarChart {bars} currency=true />
                        }
                    </div>
                </div>
            </>
        }
    };

    let device_breakdown = |stats: &DeviceStats| {
        let shares = stats.shares();
        if shares.is_empty() {
            return html! { <p class="text-base-content/70">{ i18n.t("common.empty") }</p> };
        }
        html! {
            <ul class="space-y-3">
                { for shares.into_iter().map(|(device, share)| html! {
                    <li key={device.clone()}>
                        <div class="flex justify-between text-sm">
                            <span class="capitalize">{ device }</span>
                            <span>{ percent(share) }</span>
                        </div>
                        <progress class="progress progress-primary w-full" value={format!("{share:.1}")} max="100" />
                    </li>
                }) }
            </ul>
        }
    };

    let custom = *range == RangeType::Custom;
    let date_value = |date: Option<NaiveDate>| {
        date.map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap gap-4 items-end">
                <label class="form-control">
                    <div class="label"><span class="label-text">{ i18n.t("analytics.range") }</span></div>
                    <select class="select select-bordered select-sm" onchange={on_range}>
                        { for RangeType::iter().map(|option| html! {
                            <option value={option.as_str()} selected={option == *range}>
                                { i18n.t(&format!("analytics.ranges.{}", option.as_str())) }
                            </option>
                        }) }
                    </select>
                </label>
                if custom {
                    <label class="form-control">
                        <div class="label"><span class="label-text">{ i18n.t("analytics.start") }</span></div>
                        <input class="input input-bordered input-sm" type="date" value={date_value(*start)} onchange={on_start} />
                    </label>
                    <label class="form-control">
                        <div class="label"><span class="label-text">{ i18n.t("analytics.end") }</span></div>
                        <input class="input input-bordered input-sm" type="date" value={date_value(*end)} onchange={on_end} />
                    </label>
                }
            </div>
            if let Some(message) = (*range_error).clone() {
                <Alert {message} />
            }
            { render_loadable(&*stats.state, &stats.reload, sales) }
            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("analytics.devices") }</h2>
                    { render_loadable(&*devices.state, &devices.reload, device_breakdown) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-01"), NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("03/01/2025"), None);
    }

    #[test]
    fn test_preset_ranges_ignore_dates() {
        let query = range_query(RangeType::Weekly, None, None).unwrap();

        assert_eq!(query.range_type, Some(RangeType::Weekly));
        assert_eq!(query.start_date, None);
    }

    #[test]
    fn test_custom_range_waits_for_both_dates() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1);
        let end = NaiveDate::from_ymd_opt(2025, 1, 31);

        assert!(range_query(RangeType::Custom, start, None).is_none());
        let query = range_query(RangeType::Custom, start, end).unwrap();
        assert_eq!(query.start_date, start);
        assert_eq!(query.end_date, end);
    }
}
