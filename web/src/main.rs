use dioxus::prelude::*;

use ui::views::{Home, PageShell};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    // Locale code shared with the navbar so a switch re-renders the page.
    use_context_provider(|| Signal::new(ui::i18n::current_language()));

    rsx! {
        Router::<Route> {}
    }
}

/// Routed outlet inside the shared page chrome.
#[component]
fn WebShell() -> Element {
    rsx! {
        PageShell {
            Outlet::<Route> {}
        }
    }
}
