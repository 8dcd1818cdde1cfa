mod analytics;
mod complete_profile;
mod customer_dashboard;
mod customer_documents;
mod customer_products;
mod customers;
mod dashboard;
mod documents;
mod forgot_password;
mod help;
pub mod login;
mod notifications;
mod orders;
mod products;
mod settings;
mod signup;

pub use analytics::AnalyticsPage;
pub use complete_profile::CompleteProfilePage;
pub use customer_dashboard::CustomerDashboardPage;
pub use customer_documents::CustomerDocumentsPage;
pub use customer_products::CustomerProductsPage;
pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use documents::DocumentsPage;
pub use forgot_password::ForgotPasswordPage;
pub use help::HelpPage;
pub use login::LoginPage;
pub use notifications::NotificationsPage;
pub use orders::OrdersPage;
pub use products::ProductsPage;
pub use settings::SettingsPage;
pub use signup::SignupPage;
