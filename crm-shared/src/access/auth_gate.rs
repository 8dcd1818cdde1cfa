use super::{Access, Page};
use crate::session::Session;

/// Authentication state derived from a session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// Startup token validation has not finished.
    Loading,
    /// No token, or no profile to go with it.
    Unauthenticated,
    /// Signed in but onboarding is not finished.
    AuthenticatedIncomplete,
    /// Signed in and onboarded.
    AuthenticatedComplete,
}

impl AuthState {
    /// Classify `session`; token and profile must both be present to count as signed in.
    #[must_use]
    pub fn of(session: &Session) -> Self {
        if session.is_loading {
            return Self::Loading;
        }
        match &session.user {
            _ if !session.is_authenticated() => Self::Unauthenticated,
            Some(user) if user.is_profile_complete => Self::AuthenticatedComplete,
            _ => Self::AuthenticatedIncomplete,
        }
    }
}

/// What the auth gate allows for a requested page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Render a blocking placeholder: neither content nor a redirect.
    Pending,
    /// Send the user to this page instead.
    Redirect(Page),
    /// Hand over to the role gate.
    Proceed,
}

/// First stage of navigation: is there a session, and is it onboarded?
#[must_use]
pub fn auth_gate(state: AuthState, page: Page) -> GateDecision {
    match state {
        AuthState::Loading => GateDecision::Pending,
        AuthState::Unauthenticated => match page.access() {
            Access::Public => GateDecision::Proceed,
            Access::Onboarding | Access::Authenticated | Access::Roles(_) => {
                GateDecision::Redirect(Page::Login)
            }
        },
        AuthState::AuthenticatedIncomplete if page == Page::CompleteProfile => {
            GateDecision::Proceed
        }
        AuthState::AuthenticatedIncomplete => GateDecision::Redirect(Page::CompleteProfile),
        AuthState::AuthenticatedComplete => GateDecision::Proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserProfile, UserRole};
    use strum::IntoEnumIterator;

    fn user(complete: bool) -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            name: None,
            profile_picture: None,
            phone_number: None,
            country: None,
            city: None,
            is_profile_complete: complete,
            role: Some(UserRole::Admin),
            created_at: None,
        }
    }

    #[test]
    fn state_follows_session() {
        assert_eq!(AuthState::of(&Session::default()), AuthState::Loading);

        let mut session = Session {
            is_loading: false,
            ..Session::default()
        };
        assert_eq!(AuthState::of(&session), AuthState::Unauthenticated);

        session.user = Some(user(true));
        assert_eq!(
            AuthState::of(&session),
            AuthState::Unauthenticated,
            "a profile without a token is not a session"
        );

        session.token = Some("tok".to_string());
        session.user = Some(user(false));
        assert_eq!(AuthState::of(&session), AuthState::AuthenticatedIncomplete);

        session.user = Some(user(true));
        assert_eq!(AuthState::of(&session), AuthState::AuthenticatedComplete);
    }

    #[test]
    fn loading_never_redirects() {
        for page in Page::iter() {
            assert_eq!(auth_gate(AuthState::Loading, page), GateDecision::Pending);
        }
    }

    #[test]
    fn unauthenticated_only_sees_public_pages() {
        assert_eq!(
            auth_gate(AuthState::Unauthenticated, Page::Signup),
            GateDecision::Proceed
        );
        assert_eq!(
            auth_gate(AuthState::Unauthenticated, Page::Customers),
            GateDecision::Redirect(Page::Login)
        );
        assert_eq!(
            auth_gate(AuthState::Unauthenticated, Page::CompleteProfile),
            GateDecision::Redirect(Page::Login)
        );
    }

    #[test]
    fn incomplete_profile_is_forced_to_onboarding() {
        for page in Page::iter().filter(|page| *page != Page::CompleteProfile) {
            assert_eq!(
                auth_gate(AuthState::AuthenticatedIncomplete, page),
                GateDecision::Redirect(Page::CompleteProfile)
            );
        }
        assert_eq!(
            auth_gate(AuthState::AuthenticatedIncomplete, Page::CompleteProfile),
            GateDecision::Proceed
        );
    }
}
