use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

use crate::containers::header::Header;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Shared chrome for the in-app views: navbar, page body, footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window() {
            if let Some(document) = window.document() {
                if let Some(html_element) = document.document_element() {
                    html_element
                        .set_attribute("data-theme", "light")
                        .unwrap_or_default();
                }
            }
        }
        || {}
    });

    html! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <Header current_route={props.current_route.clone()} />
            <main class="flex-grow">
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 bg-base-100 text-base-content">
                <div>
                    <p>{ i18n.t("footer.copyright") }</p>
                </div>
            </footer>
        </div>
    }
}
