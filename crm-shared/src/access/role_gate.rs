use super::Page;
use crate::models::UserRole;

/// Outcome of checking a role against a page's allowed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleDecision {
    /// The role may open the page.
    Admit,
    /// Send the user to their default landing page.
    Redirect(Page),
}

/// Where a role lands by default. Total over every role, including none.
#[must_use]
pub fn default_landing(role: Option<UserRole>) -> Page {
    match role {
        Some(UserRole::SuperAdmin | UserRole::Admin) => Page::Dashboard,
        Some(UserRole::Customer) => Page::CustomerDashboard,
        None => Page::Login,
    }
}

/// Path form of [`default_landing`].
#[must_use]
pub fn default_redirect(role: Option<UserRole>) -> &'static str {
    default_landing(role).path()
}

/// Admits `role` when `allowed` is unrestricted or contains it, otherwise
/// sends it to its default landing page.
#[must_use]
pub fn role_gate(role: Option<UserRole>, allowed: Option<&[UserRole]>) -> RoleDecision {
    match allowed {
        None => RoleDecision::Admit,
        Some(roles) if role.is_some_and(|role| roles.contains(&role)) => RoleDecision::Admit,
        Some(_) => RoleDecision::Redirect(default_landing(role)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_redirects_are_fixed() {
        assert_eq!(default_redirect(Some(UserRole::SuperAdmin)), "/");
        assert_eq!(default_redirect(Some(UserRole::Admin)), "/");
        assert_eq!(default_redirect(Some(UserRole::Customer)), "/customer/dashboard");
        assert_eq!(default_redirect(None), "/login");
    }

    #[test]
    fn membership_decides_admission() {
        let every_subset: Vec<Vec<UserRole>> = (0u8..8)
            .map(|mask| {
                UserRole::iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, role)| role)
                    .collect()
            })
            .collect();

        for allowed in &every_subset {
            for role in UserRole::iter().map(Some).chain([None]) {
                let decision = role_gate(role, Some(allowed.as_slice()));
                if role.is_some_and(|role| allowed.contains(&role)) {
                    assert_eq!(decision, RoleDecision::Admit);
                } else {
                    assert_eq!(decision, RoleDecision::Redirect(default_landing(role)));
                }
            }
        }
    }

    #[test]
    fn unrestricted_admits_everyone() {
        for role in UserRole::iter().map(Some).chain([None]) {
            assert_eq!(role_gate(role, None), RoleDecision::Admit);
        }
    }

    #[test]
    fn customer_cannot_open_products() {
        let allowed = Page::Products.target().required_roles;
        assert_eq!(
            role_gate(Some(UserRole::Customer), allowed),
            RoleDecision::Redirect(Page::CustomerDashboard)
        );
    }
}
