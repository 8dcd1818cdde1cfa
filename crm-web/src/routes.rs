use crate::components::loading::Loading;
use crate::containers::layout::Layout;
use crate::pages::*;
use crate::session::use_session;
use shared::access::{Navigation, Page, navigate};
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Browser routes. Each one except `NotFound` maps onto exactly one [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/complete-profile")]
    CompleteProfile,
    #[at("/")]
    Dashboard,
    #[at("/customers")]
    Customers,
    #[at("/orders")]
    Orders,
    #[at("/products")]
    Products,
    #[at("/analytics")]
    Analytics,
    #[at("/documents")]
    Documents,
    #[at("/customer/dashboard")]
    CustomerDashboard,
    #[at("/customer/products")]
    CustomerProducts,
    #[at("/customer/documents")]
    CustomerDocuments,
    #[at("/notifications")]
    Notifications,
    #[at("/help")]
    Help,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The page this route shows; `None` for unmatched paths.
    pub fn page(self) -> Option<Page> {
        Some(match self {
            Self::Login => Page::Login,
            Self::Signup => Page::Signup,
            Self::ForgotPassword => Page::ForgotPassword,
            Self::CompleteProfile => Page::CompleteProfile,
            Self::Dashboard => Page::Dashboard,
            Self::Customers => Page::Customers,
            Self::Orders => Page::Orders,
            Self::Products => Page::Products,
            Self::Analytics => Page::Analytics,
            Self::Documents => Page::Documents,
            Self::CustomerDashboard => Page::CustomerDashboard,
            Self::CustomerProducts => Page::CustomerProducts,
            Self::CustomerDocuments => Page::CustomerDocuments,
            Self::Notifications => Page::Notifications,
            Self::Help => Page::Help,
            Self::Settings => Page::Settings,
            Self::NotFound => return None,
        })
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => Self::Login,
            Page::Signup => Self::Signup,
            Page::ForgotPassword => Self::ForgotPassword,
            Page::CompleteProfile => Self::CompleteProfile,
            Page::Dashboard => Self::Dashboard,
            Page::Customers => Self::Customers,
            Page::Orders => Self::Orders,
            Page::Products => Self::Products,
            Page::Analytics => Self::Analytics,
            Page::Documents => Self::Documents,
            Page::CustomerDashboard => Self::CustomerDashboard,
            Page::CustomerProducts => Self::CustomerProducts,
            Page::CustomerDocuments => Self::CustomerDocuments,
            Page::Notifications => Self::Notifications,
            Page::Help => Self::Help,
            Page::Settings => Self::Settings,
        }
    }
}

#[derive(Properties, PartialEq)]
struct RouteViewProps {
    route: Route,
}

/// Runs both gates for the requested route and renders the outcome.
#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let session = use_session();

    match navigate(&session, props.route.page()) {
        Navigation::Pending => html! { <Loading /> },
        Navigation::Redirect(page) => {
            log(&format!("Redirecting {:?} to {page:?}", props.route));
            html! { <Redirect<Route> to={Route::from(page)} /> }
        }
        Navigation::Render(page) => render_page(page),
    }
}

fn render_page(page: Page) -> Html {
    let content = match page {
        Page::Login => return html! { <LoginPage /> },
        Page::Signup => return html! { <SignupPage /> },
        Page::ForgotPassword => return html! { <ForgotPasswordPage /> },
        Page::CompleteProfile => return html! { <CompleteProfilePage /> },
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Customers => html! { <CustomersPage /> },
        Page::Orders => html! { <OrdersPage /> },
        Page::Products => html! { <ProductsPage /> },
        Page::Analytics => html! { <AnalyticsPage /> },
        Page::Documents => html! { <DocumentsPage /> },
        Page::CustomerDashboard => html! { <CustomerDashboardPage /> },
        Page::CustomerProducts => html! { <CustomerProductsPage /> },
        Page::CustomerDocuments => html! { <CustomerDocumentsPage /> },
        Page::Notifications => html! { <NotificationsPage /> },
        Page::Help => html! { <HelpPage /> },
        Page::Settings => html! { <SettingsPage /> },
    };
    html! { <Layout current_page={page}>{content}</Layout> }
}

/// Switch function for the router.
pub fn switch(route: Route) -> Html {
    html! { <RouteView {route} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_routes_and_pages_agree_on_paths() {
        for route in Route::iter() {
            match route.page() {
                Some(page) => {
                    assert_eq!(route.to_path(), page.path(), "{route:?}");
                    assert_eq!(Route::from(page), route);
                }
                None => assert_eq!(route, Route::NotFound),
            }
        }
    }

    #[test]
    fn test_every_page_has_a_route() {
        for page in Page::iter() {
            assert_eq!(Route::from(page).page(), Some(page));
        }
    }

    #[test]
    fn test_paths_recognize() {
        assert_eq!(Route::recognize("/customer/products"), Some(Route::CustomerProducts));
        assert_eq!(Route::recognize("/"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/forgot-password"), Some(Route::ForgotPassword));
    }
}
