//! Dashboard statistics and the client-side aggregation applied to them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::{Pagination, Timestamp, UserProfile};

/// Bucket size requested from `/stats/dashboard`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    /// One bucket per day.
    Daily,
    /// One bucket per week.
    Weekly,
    /// One bucket per month.
    #[default]
    Monthly,
    /// One bucket per year.
    Yearly,
    /// Explicit start and end dates.
    Custom,
}

impl RangeType {
    /// Wire value sent as `rangeType`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Custom => "custom",
        }
    }

    /// English label, used when no translation is loaded.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
            Self::Custom => "Custom range",
        }
    }

    /// Parses the wire value, e.g. from a `<select>`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Query string of `GET /stats/dashboard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQuery {
    /// 1-based page of recent sales.
    pub page: u32,
    /// Recent sales per page.
    pub limit: u32,
    /// First day of a custom range.
    pub start_date: Option<NaiveDate>,
    /// Last day of a custom range.
    pub end_date: Option<NaiveDate>,
    /// Bucket size; backend default when `None`.
    pub range_type: Option<RangeType>,
    /// Ask for the sales list only, skipping totals.
    pub only_sales: Option<bool>,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            start_date: None,
            end_date: None,
            range_type: None,
            only_sales: None,
        }
    }
}

impl DashboardQuery {
    /// Key/value pairs in the order the backend documents them. Unset filters are omitted.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.max(1).to_string()),
            ("limit", self.limit.max(1).to_string()),
        ];
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(range) = self.range_type {
            pairs.push(("rangeType", range.as_str().to_string()));
        }
        if let Some(only_sales) = self.only_sales {
            pairs.push(("onlySales", only_sales.to_string()));
        }
        pairs
    }

    /// A custom range needs both bounds in order.
    #[must_use]
    pub fn is_valid_range(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= end,
            (None, None) => self.range_type != Some(RangeType::Custom),
            _ => false,
        }
    }
}

/// Headline counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardTotals {
    /// Customer accounts.
    pub customers: u64,
    /// Admin accounts.
    pub admins: u64,
    /// Catalogue entries.
    pub products: u64,
    /// Stored documents.
    pub documents: u64,
    /// Completed sales.
    pub sales: u64,
    /// Sum of all sales.
    pub revenue: f64,
}

/// One bucket of the sales chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    /// Bucket label as sent by the backend.
    pub label: String,
    /// Revenue in the bucket.
    #[serde(default)]
    pub amount: f64,
    /// Sales in the bucket.
    #[serde(default)]
    pub count: u64,
}

/// A single completed sale, shown on the orders screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Backend identifier.
    pub id: String,
    /// Buyer name.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Buyer email.
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Product sold.
    #[serde(default)]
    pub product_name: Option<String>,
    /// Sale amount.
    #[serde(default)]
    pub amount: f64,
    /// Backend status, e.g. `completed`.
    #[serde(default)]
    pub status: Option<String>,
    /// Sale time.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Body of `GET /stats/dashboard`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    /// Headline counters.
    pub totals: DashboardTotals,
    /// Chart buckets in display order.
    pub sales_chart: Vec<SalesPoint>,
    /// Latest sales, newest first.
    pub recent_sales: Vec<SaleRecord>,
    /// Latest sign-ups.
    pub recent_customers: Vec<UserProfile>,
    /// Paging of `recent_sales`.
    pub pagination: Option<Pagination>,
}

impl DashboardStats {
    /// Aggregates the chart buckets.
    #[must_use]
    pub fn sales_summary(&self) -> SalesSummary {
        SalesSummary::from_points(&self.sales_chart)
    }

    /// Largest bucket amount, used to scale bar charts.
    #[must_use]
    pub fn chart_peak(&self) -> f64 {
        self.sales_chart
            .iter()
            .map(|point| point.amount)
            .fold(0.0, f64::max)
    }
}

/// Totals computed client-side over the sales chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesSummary {
    /// Revenue across all buckets.
    pub total_amount: f64,
    /// Sales across all buckets.
    pub total_count: u64,
    /// Mean amount per sale; zero when there were none.
    pub average_sale: f64,
    /// Label of the highest-grossing bucket.
    pub best_period: Option<String>,
}

impl SalesSummary {
    /// Summarise chart buckets.
    #[must_use]
    pub fn from_points(points: &[SalesPoint]) -> Self {
        let total_amount: f64 = points.iter().map(|point| point.amount).sum();
        let total_count: u64 = points.iter().map(|point| point.count).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_sale = if total_count == 0 {
            0.0
        } else {
            total_amount / total_count as f64
        };
        let best_period = points
            .iter()
            .filter(|point| point.amount > 0.0)
            .max_by(|left, right| left.amount.total_cmp(&right.amount))
            .map(|point| point.label.clone());

        Self {
            total_amount,
            total_count,
            average_sale,
            best_period,
        }
    }
}

/// Per-device visit counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceShare {
    /// Device class, e.g. `mobile`.
    pub device: String,
    /// Visits from this device class.
    #[serde(default)]
    pub count: u64,
}

/// Body of `GET /stats/device-stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceStats {
    /// Counts per device class.
    #[serde(default)]
    pub devices: Vec<DeviceShare>,
}

impl DeviceStats {
    /// Each device with its share of the total in percent, largest first.
    #[must_use]
    pub fn shares(&self) -> Vec<(String, f64)> {
        let total: u64 = self.devices.iter().map(|share| share.count).sum();
        if total == 0 {
            return Vec::new();
        }
        let mut shares: Vec<(String, f64)> = self
            .devices
            .iter()
            .map(|share| {
                #[allow(clippy::cast_precision_loss)]
                let percent = share.count as f64 * 100.0 / total as f64;
                (share.device.clone(), percent)
            })
            .collect();
        shares.sort_by(|left, right| right.1.total_cmp(&left.1));
        shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn point(label: &str, amount: f64, count: u64) -> SalesPoint {
        SalesPoint {
            label: label.to_string(),
            amount,
            count,
        }
    }

    #[test]
    fn query_pairs_skip_unset_filters() {
        let pairs = DashboardQuery::default().to_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn query_pairs_include_filters() {
        let query = DashboardQuery {
            page: 2,
            limit: 5,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            range_type: Some(RangeType::Custom),
            only_sales: Some(true),
        };
        let pairs = query.to_pairs();

        assert!(pairs.contains(&("startDate", "2025-01-01".to_string())));
        assert!(pairs.contains(&("endDate", "2025-01-31".to_string())));
        assert!(pairs.contains(&("rangeType", "custom".to_string())));
        assert!(pairs.contains(&("onlySales", "true".to_string())));
        assert!(query.is_valid_range());
    }

    #[test]
    fn custom_range_requires_ordered_bounds() {
        let reversed = DashboardQuery {
            start_date: NaiveDate::from_ymd_opt(2025, 2, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..DashboardQuery::default()
        };
        assert!(!reversed.is_valid_range());

        let open = DashboardQuery {
            range_type: Some(RangeType::Custom),
            ..DashboardQuery::default()
        };
        assert!(!open.is_valid_range());

        let half = DashboardQuery {
            start_date: NaiveDate::from_ymd_opt(2025, 2, 1),
            ..DashboardQuery::default()
        };
        assert!(!half.is_valid_range());
    }

    #[test]
    fn range_type_roundtrip() {
        for range in RangeType::iter() {
            assert_eq!(RangeType::parse(range.as_str()), Some(range));
        }
        assert_eq!(RangeType::parse("hourly"), None);
    }

    #[test]
    fn summary_aggregates_points() {
        let summary = SalesSummary::from_points(&[
            point("Jan", 100.0, 2),
            point("Feb", 300.0, 4),
            point("Mar", 0.0, 0),
        ]);

        assert!((summary.total_amount - 400.0).abs() < f64::EPSILON);
        assert_eq!(summary.total_count, 6);
        assert!((summary.average_sale - 400.0 / 6.0).abs() < 1e-9);
        assert_eq!(summary.best_period.as_deref(), Some("Feb"));
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let summary = SalesSummary::from_points(&[point("Jan", 0.0, 0)]);

        assert_eq!(summary.total_count, 0);
        assert!(summary.average_sale.abs() < f64::EPSILON);
        assert_eq!(summary.best_period, None);
    }

    #[test]
    fn stats_tolerate_sparse_body() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totals":{"customers":3},"salesChart":[{"label":"W1","amount":12.5,"count":1}]}"#)
                .unwrap();

        assert_eq!(stats.totals.customers, 3);
        assert_eq!(stats.totals.products, 0);
        assert!(stats.recent_sales.is_empty());
        assert!((stats.chart_peak() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn device_shares_sorted_by_percentage() {
        let stats = DeviceStats {
            devices: vec![
                DeviceShare {
                    device: "desktop".to_string(),
                    count: 25,
                },
                DeviceShare {
                    device: "mobile".to_string(),
                    count: 75,
                },
            ],
        };
        let shares = stats.shares();

        assert_eq!(shares[0].0, "mobile");
        assert!((shares[0].1 - 75.0).abs() < 1e-9);
        assert!((shares[1].1 - 25.0).abs() < 1e-9);
    }

    #[test]
    fn device_shares_empty_without_visits() {
        assert!(DeviceStats::default().shares().is_empty());
    }
}
