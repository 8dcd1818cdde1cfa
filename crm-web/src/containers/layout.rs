use crate::containers::{header::Header, sidebar::Sidebar};
use i18nrs::yew::use_translation;
use shared::access::Page;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_page: Option<Page>,
}

/// Shell of every signed-in screen: sidebar, header and the page body.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, _) = use_translation();

    let title = props.current_page.map(|page| i18n.t(page.title_key()));
    let app = i18n.t("app.title");
    use_effect_with(title.clone(), move |title| {
        if let Some(document) = window().and_then(|window| window.document()) {
            match title {
                Some(title) => document.set_title(&format!("{title} · {app}")),
                None => document.set_title(&app),
            }
        }
        || {}
    });

    html! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-100">
            <input id="sidebar-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <Header title={title} />
                <main class={classes!("flex-grow", "p-4", "lg:p-6", "transition-all", "duration-300")}>
                    {props.children.clone()}
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <p>{ i18n.t("footer.text") }</p>
                </footer>
            </div>
            <div class="drawer-side z-20">
                <label for="sidebar-drawer" aria-label="close sidebar" class="drawer-overlay"></label>
                <Sidebar current_page={props.current_page} />
            </div>
        </div>
    }
}
