use super::{ApiError, CrmClient};
use crate::models::{
    AuthResponse, ChangePasswordRequest, GoogleLoginRequest, LoginRequest, MeResponse,
    MessageResponse, ProfileUpdate, SignupRequest,
};

impl CrmClient {
    /// Authenticate with email/password credentials.
    ///
    /// # Errors
    /// Returns an [`ApiError`] carrying the backend's message on rejection.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("auth/login", payload).await
    }

    /// Create an account and sign it in.
    ///
    /// # Errors
    /// Returns an [`ApiError`] carrying the backend's message on rejection.
    pub async fn signup(&self, payload: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post("auth/signup", payload).await
    }

    /// Exchange a Google identity token for a session.
    ///
    /// # Errors
    /// Returns an [`ApiError`] carrying the backend's message on rejection.
    pub async fn login_with_google(
        &self,
        payload: &GoogleLoginRequest,
    ) -> Result<AuthResponse, ApiError> {
        self.post("auth/google", payload).await
    }

    /// Retrieve the profile bound to the current token.
    ///
    /// # Errors
    /// Fails when no token is set or the backend no longer accepts it.
    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        self.get("auth/me").await
    }

    /// Apply a partial profile update; the response is the authoritative profile.
    ///
    /// # Errors
    /// Returns an [`ApiError`] carrying the backend's message on rejection.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<MeResponse, ApiError> {
        self.put("auth/profile", update).await
    }

    /// # Errors
    /// Returns an [`ApiError`] when the current password is wrong or the new one is rejected.
    pub async fn change_password(
        &self,
        payload: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.put("auth/change-password", payload).await
    }
}
