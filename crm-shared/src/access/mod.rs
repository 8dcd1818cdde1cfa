//! Access control for client-side navigation.
//!
//! A navigation request passes the auth gate (session present and onboarded?)
//! and then the role gate (does this role see this page?). Both stages are
//! pure functions of a [`Session`] snapshot so the router can re-evaluate
//! them on every render.

mod auth_gate;
mod pages;
mod role_gate;

pub use auth_gate::{AuthState, GateDecision, auth_gate};
pub use pages::{Access, NavigationTarget, Page, visible_pages};
pub use role_gate::{RoleDecision, default_landing, default_redirect, role_gate};

use crate::session::Session;

/// Final outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Session validation is still running; show a placeholder.
    Pending,
    /// Replace the requested page with this one.
    Redirect(Page),
    /// Show the requested page.
    Render(Page),
}

/// Decides what to show for `target`; `None` stands for an unmatched path.
#[must_use]
pub fn navigate(session: &Session, target: Option<Page>) -> Navigation {
    let state = AuthState::of(session);
    if state == AuthState::Loading {
        return Navigation::Pending;
    }
    let Some(page) = target else {
        return Navigation::Redirect(Page::Dashboard);
    };

    match auth_gate(state, page) {
        GateDecision::Pending => Navigation::Pending,
        GateDecision::Redirect(to) => Navigation::Redirect(to),
        GateDecision::Proceed if state != AuthState::AuthenticatedComplete => {
            Navigation::Render(page)
        }
        GateDecision::Proceed => {
            let role = session.role();
            match page.access() {
                // Signed-in users have nothing to do on the sign-in and
                // onboarding screens unless they have no usable role.
                Access::Public => match default_landing(role) {
                    Page::Login => Navigation::Render(page),
                    landing => Navigation::Redirect(landing),
                },
                Access::Onboarding => Navigation::Redirect(default_landing(role)),
                Access::Authenticated | Access::Roles(_) => {
                    match role_gate(role, page.target().required_roles) {
                        RoleDecision::Admit => Navigation::Render(page),
                        RoleDecision::Redirect(to) => Navigation::Redirect(to),
                    }
                }
            }
        }
    }
}

/// [`navigate`] for a raw browser path.
#[must_use]
pub fn navigate_path(session: &Session, path: &str) -> Navigation {
    navigate(session, Page::from_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserProfile, UserRole};
    use strum::IntoEnumIterator;

    fn session_for(role: Option<UserRole>, complete: bool) -> Session {
        Session {
            token: Some("token".to_string()),
            user: Some(UserProfile {
                id: "u1".to_string(),
                email: "u1@example.com".to_string(),
                name: Some("User One".to_string()),
                profile_picture: None,
                phone_number: None,
                country: None,
                city: None,
                is_profile_complete: complete,
                role,
                created_at: None,
            }),
            is_loading: false,
        }
    }

    fn signed_out() -> Session {
        Session {
            is_loading: false,
            ..Session::default()
        }
    }

    fn all_sessions() -> Vec<Session> {
        let mut sessions = vec![Session::default(), signed_out()];
        for role in UserRole::iter().map(Some).chain([None]) {
            sessions.push(session_for(role, false));
            sessions.push(session_for(role, true));
        }
        sessions
    }

    #[test]
    fn loading_shows_placeholder_for_every_path() {
        let session = Session::default();
        for page in Page::iter() {
            assert_eq!(navigate(&session, Some(page)), Navigation::Pending);
        }
        assert_eq!(navigate_path(&session, "/unknown"), Navigation::Pending);
    }

    #[test]
    fn incomplete_profile_redirects_to_onboarding() {
        let session = session_for(Some(UserRole::Admin), false);
        assert_eq!(
            navigate_path(&session, "/customers"),
            Navigation::Redirect(Page::CompleteProfile)
        );
        assert_eq!(
            navigate_path(&session, "/complete-profile"),
            Navigation::Render(Page::CompleteProfile)
        );
    }

    #[test]
    fn customer_is_sent_to_customer_dashboard() {
        let session = session_for(Some(UserRole::Customer), true);
        assert_eq!(
            navigate_path(&session, "/products"),
            Navigation::Redirect(Page::CustomerDashboard)
        );
        assert_eq!(
            navigate_path(&session, "/customer/products"),
            Navigation::Render(Page::CustomerProducts)
        );
    }

    #[test]
    fn staff_is_sent_to_dashboard() {
        for role in [UserRole::SuperAdmin, UserRole::Admin] {
            let session = session_for(Some(role), true);
            assert_eq!(
                navigate_path(&session, "/customer/documents"),
                Navigation::Redirect(Page::Dashboard)
            );
            assert_eq!(
                navigate_path(&session, "/analytics"),
                Navigation::Render(Page::Analytics)
            );
        }
    }

    #[test]
    fn shared_pages_open_to_every_onboarded_user() {
        for role in UserRole::iter().map(Some).chain([None]) {
            let session = session_for(role, true);
            for page in [Page::Notifications, Page::Help, Page::Settings] {
                assert_eq!(navigate(&session, Some(page)), Navigation::Render(page));
            }
        }
    }

    #[test]
    fn signed_out_user_goes_to_login() {
        let session = signed_out();
        assert_eq!(navigate_path(&session, "/"), Navigation::Redirect(Page::Login));
        assert_eq!(
            navigate_path(&session, "/login"),
            Navigation::Render(Page::Login)
        );
        assert_eq!(
            navigate_path(&session, "/forgot-password"),
            Navigation::Render(Page::ForgotPassword)
        );
    }

    #[test]
    fn signed_in_user_leaves_public_pages() {
        let session = session_for(Some(UserRole::Customer), true);
        assert_eq!(
            navigate_path(&session, "/login"),
            Navigation::Redirect(Page::CustomerDashboard)
        );
        assert_eq!(
            navigate_path(&session, "/complete-profile"),
            Navigation::Redirect(Page::CustomerDashboard)
        );

        let roleless = session_for(None, true);
        assert_eq!(
            navigate_path(&roleless, "/login"),
            Navigation::Render(Page::Login)
        );
        assert_eq!(
            navigate_path(&roleless, "/"),
            Navigation::Redirect(Page::Login)
        );
    }

    #[test]
    fn unmatched_paths_go_home() {
        for session in all_sessions().into_iter().filter(|s| !s.is_loading) {
            assert_eq!(
                navigate_path(&session, "/does-not-exist"),
                Navigation::Redirect(Page::Dashboard)
            );
        }
    }

    #[test]
    fn redirects_never_target_the_requested_page() {
        for session in all_sessions() {
            for page in Page::iter() {
                if let Navigation::Redirect(to) = navigate(&session, Some(page)) {
                    assert_ne!(to, page, "{page:?} redirects to itself for {session:?}");
                }
            }
        }
    }

    #[test]
    fn redirect_chains_settle() {
        for session in all_sessions().into_iter().filter(|s| !s.is_loading) {
            for page in Page::iter() {
                let mut current = page;
                let mut hops = 0;
                while let Navigation::Redirect(to) = navigate(&session, Some(current)) {
                    current = to;
                    hops += 1;
                    assert!(hops <= 3, "redirect loop from {page:?} for {session:?}");
                }
                assert!(matches!(
                    navigate(&session, Some(current)),
                    Navigation::Render(_)
                ));
            }
        }
    }
}
