//! Read-mostly endpoints: statistics, notifications and organisation settings.

use super::{ApiError, CrmClient};
use crate::models::{DashboardQuery, DashboardStats, DeviceStats, NotificationPage, Settings};

impl CrmClient {
    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn dashboard_stats(&self, query: &DashboardQuery) -> Result<DashboardStats, ApiError> {
        self.get_with_query("stats/dashboard", &query.to_pairs())
            .await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn device_stats(&self) -> Result<DeviceStats, ApiError> {
        self.get("stats/device-stats").await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn notifications(&self, page: u32, limit: u32) -> Result<NotificationPage, ApiError> {
        self.get_with_query(
            "notifications",
            &[("page", page.max(1)), ("limit", limit.max(1))],
        )
        .await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn settings(&self) -> Result<Settings, ApiError> {
        self.get("settings").await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn update_settings(&self, settings: &Settings) -> Result<Settings, ApiError> {
        self.put("settings", settings).await
    }
}
