use dioxus::prelude::*;

use crate::calculator::CalculatorState;
use crate::components::AppNavbar;
use crate::scene::{ProgressBar, SceneRoot, SceneState};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Shared chrome for every launcher: page state, stylesheet, progress bar
/// and navbar. Routed content goes in `children`.
#[component]
pub fn PageShell(children: Element) -> Element {
    use_context_provider(|| Signal::new(SceneState::default()));
    use_context_provider(|| Signal::new(CalculatorState::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        SceneRoot {
            ProgressBar {}
            AppNavbar {}
            {children}
        }
    }
}
