use serde::de::IgnoredAny;

use super::{ApiError, CrmClient};
use crate::models::{AccountInput, AccountUpdate, MeResponse, UserListResponse};

impl CrmClient {
    /// Every account visible to the caller.
    ///
    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn list_users(&self) -> Result<UserListResponse, ApiError> {
        self.get("users").await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn list_admins(&self) -> Result<UserListResponse, ApiError> {
        self.get("users/admins").await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn create_admin(&self, input: &AccountInput) -> Result<MeResponse, ApiError> {
        self.post("users/admins", input).await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn update_admin(
        &self,
        id: &str,
        update: &AccountUpdate,
    ) -> Result<MeResponse, ApiError> {
        self.put(&format!("users/admin/{id}"), update).await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn delete_admin(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<IgnoredAny>(&format!("users/admin/{id}"))
            .await
            .map(|_| ())
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn list_customers(&self) -> Result<UserListResponse, ApiError> {
        self.get("users/customers").await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn create_customer(&self, input: &AccountInput) -> Result<MeResponse, ApiError> {
        self.post("users/customers", input).await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn update_customer(
        &self,
        id: &str,
        update: &AccountUpdate,
    ) -> Result<MeResponse, ApiError> {
        self.put(&format!("users/customer/{id}"), update).await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn delete_customer(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<IgnoredAny>(&format!("users/customer/{id}"))
            .await
            .map(|_| ())
    }
}
