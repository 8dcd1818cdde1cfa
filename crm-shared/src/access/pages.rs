//! The closed set of screens and the static table of who may open them.

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::models::UserRole;

const STAFF: &[UserRole] = &[UserRole::SuperAdmin, UserRole::Admin];
const CUSTOMERS: &[UserRole] = &[UserRole::Customer];

/// Every screen of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Page {
    /// `/login`
    Login,
    /// `/signup`
    Signup,
    /// `/forgot-password`
    ForgotPassword,
    /// `/complete-profile`, the onboarding form.
    CompleteProfile,
    /// `/`, staff overview.
    Dashboard,
    /// `/customers`
    Customers,
    /// `/orders`
    Orders,
    /// `/products`, staff catalogue management.
    Products,
    /// `/analytics`
    Analytics,
    /// `/documents`, staff document management.
    Documents,
    /// `/customer/dashboard`
    CustomerDashboard,
    /// `/customer/products`
    CustomerProducts,
    /// `/customer/documents`
    CustomerDocuments,
    /// `/notifications`
    Notifications,
    /// `/help`
    Help,
    /// `/settings`
    Settings,
}

/// Who may open a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reachable without a session.
    Public,
    /// The onboarding form; only meaningful with an incomplete profile.
    Onboarding,
    /// Any authenticated, profile-complete user.
    Authenticated,
    /// Authenticated, profile-complete users holding one of these roles.
    Roles(&'static [UserRole]),
}

/// A path together with the roles allowed to open it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTarget {
    /// Browser path.
    pub path: &'static str,
    /// `None` means unrestricted.
    pub required_roles: Option<&'static [UserRole]>,
}

impl Page {
    /// Browser path of this page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::CompleteProfile => "/complete-profile",
            Self::Dashboard => "/",
            Self::Customers => "/customers",
            Self::Orders => "/orders",
            Self::Products => "/products",
            Self::Analytics => "/analytics",
            Self::Documents => "/documents",
            Self::CustomerDashboard => "/customer/dashboard",
            Self::CustomerProducts => "/customer/products",
            Self::CustomerDocuments => "/customer/documents",
            Self::Notifications => "/notifications",
            Self::Help => "/help",
            Self::Settings => "/settings",
        }
    }

    /// Who may open this page.
    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Self::Login | Self::Signup | Self::ForgotPassword => Access::Public,
            Self::CompleteProfile => Access::Onboarding,
            Self::Dashboard
            | Self::Customers
            | Self::Orders
            | Self::Products
            | Self::Analytics
            | Self::Documents => Access::Roles(STAFF),
            Self::CustomerDashboard | Self::CustomerProducts | Self::CustomerDocuments => {
                Access::Roles(CUSTOMERS)
            }
            Self::Notifications | Self::Help | Self::Settings => Access::Authenticated,
        }
    }

    /// Resolves a browser path, ignoring query string, fragment and a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::iter().find(|page| page.path() == path)
    }

    /// Path and role requirement together.
    #[must_use]
    pub fn target(self) -> NavigationTarget {
        let required_roles = match self.access() {
            Access::Roles(roles) => Some(roles),
            Access::Public | Access::Onboarding | Access::Authenticated => None,
        };
        NavigationTarget {
            path: self.path(),
            required_roles,
        }
    }

    /// Translation key of the page title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Self::Login => "pages.login",
            Self::Signup => "pages.signup",
            Self::ForgotPassword => "pages.forgot_password",
            Self::CompleteProfile => "pages.complete_profile",
            Self::Dashboard => "pages.dashboard",
            Self::Customers => "pages.customers",
            Self::Orders => "pages.orders",
            Self::Products => "pages.products",
            Self::Analytics => "pages.analytics",
            Self::Documents => "pages.documents",
            Self::CustomerDashboard => "pages.customer_dashboard",
            Self::CustomerProducts => "pages.customer_products",
            Self::CustomerDocuments => "pages.customer_documents",
            Self::Notifications => "pages.notifications",
            Self::Help => "pages.help",
            Self::Settings => "pages.settings",
        }
    }

    /// Whether the page belongs in the sidebar at all.
    #[must_use]
    pub fn in_navigation(self) -> bool {
        matches!(
            self.access(),
            Access::Authenticated | Access::Roles(_)
        )
    }

    /// Whether `role` may open this page once onboarded.
    #[must_use]
    pub fn allows(self, role: Option<UserRole>) -> bool {
        match self.access() {
            Access::Public | Access::Authenticated => true,
            Access::Onboarding => false,
            Access::Roles(roles) => role.is_some_and(|role| roles.contains(&role)),
        }
    }
}

/// Sidebar entries for `role`, in declaration order.
#[must_use]
pub fn visible_pages(role: Option<UserRole>) -> Vec<Page> {
    Page::iter()
        .filter(|page| page.in_navigation() && page.allows(role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_roundtrips_through_its_path() {
        for page in Page::iter() {
            assert_eq!(Page::from_path(page.path()), Some(page), "{page:?}");
        }
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = Page::iter().map(Page::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Page::iter().count());
    }

    #[test]
    fn from_path_normalises() {
        assert_eq!(Page::from_path("/customers/"), Some(Page::Customers));
        assert_eq!(Page::from_path("/notifications?page=2"), Some(Page::Notifications));
        assert_eq!(Page::from_path("/help#faq"), Some(Page::Help));
        assert_eq!(Page::from_path(""), Some(Page::Dashboard));
        assert_eq!(Page::from_path("/nope"), None);
        assert_eq!(Page::from_path("/customer"), None);
    }

    #[test]
    fn routing_table_matches_surface() {
        for page in [Page::Login, Page::Signup, Page::ForgotPassword] {
            assert_eq!(page.access(), Access::Public);
        }
        for page in [
            Page::Dashboard,
            Page::Customers,
            Page::Orders,
            Page::Products,
            Page::Analytics,
            Page::Documents,
        ] {
            assert_eq!(page.target().required_roles, Some(STAFF));
        }
        for page in [
            Page::CustomerDashboard,
            Page::CustomerProducts,
            Page::CustomerDocuments,
        ] {
            assert_eq!(page.target().required_roles, Some(CUSTOMERS));
        }
        for page in [Page::Notifications, Page::Help, Page::Settings] {
            assert_eq!(page.target().required_roles, None);
            assert_eq!(page.access(), Access::Authenticated);
        }
    }

    #[test]
    fn sidebar_per_role() {
        let admin = visible_pages(Some(UserRole::Admin));
        assert!(admin.contains(&Page::Customers));
        assert!(admin.contains(&Page::Settings));
        assert!(!admin.contains(&Page::CustomerProducts));
        assert!(!admin.contains(&Page::Login));

        let customer = visible_pages(Some(UserRole::Customer));
        assert!(customer.contains(&Page::CustomerDashboard));
        assert!(!customer.contains(&Page::Analytics));

        assert_eq!(
            visible_pages(None),
            vec![Page::Notifications, Page::Help, Page::Settings]
        );
    }
}
