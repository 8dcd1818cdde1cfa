use crate::containers::account_directory::{AccountDirectory, AccountKind};
use yew::{Html, function_component, html};

/// Staff view of every customer account.
#[function_component(CustomersPage)]
pub fn customers_page() -> Html {
    html! { <AccountDirectory kind={AccountKind::Customer} /> }
}
