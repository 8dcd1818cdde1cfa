use crate::routes::Route;
use i18nrs::yew::use_translation;
use shared::access::Page;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Eq)]
pub struct NavItemProps {
    pub page: Page,
    pub current_page: Option<Page>,
}

pub fn page_icon(page: Page) -> IconId {
    match page {
        Page::Dashboard | Page::CustomerDashboard => IconId::HeroiconsOutlineHome,
        Page::Customers => IconId::HeroiconsOutlineUsers,
        Page::Orders => IconId::HeroiconsOutlineShoppingCart,
        Page::Products | Page::CustomerProducts => IconId::HeroiconsOutlineCube,
        Page::Analytics => IconId::HeroiconsOutlineChartBar,
        Page::Documents | Page::CustomerDocuments => IconId::HeroiconsOutlineDocumentText,
        Page::Notifications => IconId::HeroiconsOutlineBell,
        Page::Help => IconId::HeroiconsOutlineQuestionMarkCircle,
        Page::Settings => IconId::HeroiconsOutlineCog6Tooth,
        Page::Login | Page::Signup | Page::ForgotPassword | Page::CompleteProfile => {
            IconId::HeroiconsOutlineUser
        }
    }
}

#[function_component(NavItem)]
pub fn nav_item(props: &NavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let active_class = (props.current_page == Some(props.page)).then_some("active");

    html! {
      <li>
          <Link<Route> to={Route::from(props.page)} classes={classes!("gap-2", active_class)}>
              <Icon icon_id={page_icon(props.page)} class="w-5 h-5" />
              { i18n.t(props.page.title_key()) }
          </Link<Route>>
      </li>
    }
}
