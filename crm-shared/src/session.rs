//! Session store: the single source of truth for "who is signed in".
//!
//! The store owns the bearer token, the current profile and the startup
//! loading flag. Every mutation goes through one of its operations so the
//! token held by [`CrmClient`], the persisted token and the in-memory
//! snapshot never disagree.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use crate::client::{ApiError, CrmClient};
use crate::models::{
    ChangePasswordRequest, GoogleLoginRequest, LoginRequest, MessageResponse, ProfileUpdate,
    SignupRequest, UserProfile, UserRole,
};

/// Returned when a request outlives the session that issued it.
pub const SESSION_ENDED_MESSAGE: &str = "Your session has ended";

/// Snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Bearer token sent with every request while signed in.
    pub token: Option<String>,
    /// Profile of the signed-in user.
    pub user: Option<UserProfile>,
    /// True until startup token validation has finished, then false forever.
    pub is_loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            is_loading: true,
        }
    }
}

impl Session {
    /// Signed in means holding both a token and the profile it belongs to.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Role of the signed-in user, if it is one the console knows.
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().and_then(|user| user.role)
    }

    fn signed_out() -> Self {
        Self {
            is_loading: false,
            ..Self::default()
        }
    }
}

/// Durable home of the bearer token between visits.
pub trait TokenStorage: Send + Sync + fmt::Debug {
    /// Token saved by an earlier visit, if any.
    fn load(&self) -> Option<String>;
    /// Replace the saved token.
    fn store(&self, token: &str);
    /// Forget the saved token. A no-op when nothing is saved.
    fn clear(&self);
}

/// Process-local token storage, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    /// Storage that already holds `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Shared handle to the session. Clones observe and mutate the same state.
#[derive(Clone, Debug)]
pub struct SessionStore {
    client: CrmClient,
    storage: Arc<dyn TokenStorage>,
    state: Arc<Mutex<Session>>,
    initialized: Arc<AtomicBool>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl SessionStore {
    /// Fresh store in the loading state; call [`SessionStore::initialize`] next.
    #[must_use]
    pub fn new(client: CrmClient, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            client,
            storage,
            state: Arc::new(Mutex::new(Session::default())),
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Client sharing this session's bearer token.
    #[must_use]
    pub fn client(&self) -> &CrmClient {
        &self.client
    }

    /// Copy of the current session for readers.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Session> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate a persisted token, if any, and leave the loading state.
    ///
    /// Runs its side effects once per store; later calls return the current
    /// snapshot. A rejected token is discarded without surfacing an error.
    pub async fn initialize(&self) -> Session {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return self.snapshot();
        }

        let Some(token) = self.storage.load().filter(|token| !token.is_empty()) else {
            debug!("no persisted token");
            *self.lock() = Session::signed_out();
            return self.snapshot();
        };

        self.client.set_token(Some(token.clone()));
        match self.client.me().await {
            Ok(response) => {
                info!(user = %response.user.id, "restored session");
                *self.lock() = Session {
                    token: Some(token),
                    user: Some(response.user),
                    is_loading: false,
                };
            }
            Err(_) => {
                debug!("persisted token rejected");
                self.client.set_token(None);
                self.storage.clear();
                *self.lock() = Session::signed_out();
            }
        }
        self.snapshot()
    }

    fn establish(&self, token: String, user: UserProfile) -> UserProfile {
        self.client.set_token(Some(token.clone()));
        self.storage.store(&token);
        *self.lock() = Session {
            token: Some(token),
            user: Some(user.clone()),
            is_loading: false,
        };
        user
    }

    /// # Errors
    /// Returns the backend's message; the session is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let payload = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = self.client.login(&payload).await?;
        info!(user = %response.user.id, "signed in");
        Ok(self.establish(response.token, response.user))
    }

    /// # Errors
    /// Returns the backend's message; the session is left untouched.
    pub async fn login_with_google(&self, id_token: &str) -> Result<UserProfile, ApiError> {
        let payload = GoogleLoginRequest {
            id_token: id_token.to_string(),
        };
        let response = self.client.login_with_google(&payload).await?;
        info!(user = %response.user.id, "signed in with google");
        Ok(self.establish(response.token, response.user))
    }

    /// # Errors
    /// Returns the backend's message; the session is left untouched.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<UserProfile, ApiError> {
        let payload = SignupRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            name: name
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        };
        let response = self.client.signup(&payload).await?;
        info!(user = %response.user.id, "account created");
        Ok(self.establish(response.token, response.user))
    }

    /// Persist profile changes and adopt the server's copy wholesale.
    ///
    /// The response is only adopted while the session that sent the request
    /// is still current; after a logout or a new sign-in it is discarded.
    ///
    /// # Errors
    /// Returns the backend's message, or [`SESSION_ENDED_MESSAGE`] when the
    /// session changed mid-request. The current profile is kept either way.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let sent_with = self.lock().token.clone();
        if sent_with.is_none() {
            return Err(ApiError::new(SESSION_ENDED_MESSAGE));
        }
        let response = self.client.update_profile(update).await?;

        let mut state = self.lock();
        if state.token != sent_with {
            debug!("dropping profile update for a session that ended");
            return Err(ApiError::new(SESSION_ENDED_MESSAGE));
        }
        state.user = Some(response.user.clone());
        Ok(response.user)
    }

    /// Change the password of the signed-in user. The session is not touched.
    ///
    /// # Errors
    /// Returns the backend's message, e.g. for a wrong current password.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let payload = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.client.change_password(&payload).await
    }

    /// Forget the token everywhere. Safe to call when already signed out.
    pub fn logout(&self) {
        self.client.set_token(None);
        self.storage.clear();
        *self.lock() = Session::signed_out();
        info!("signed out");
    }
}
