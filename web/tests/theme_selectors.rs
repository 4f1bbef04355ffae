#![cfg(test)]
//! Selector lint for the shared theme in `ui/assets/theme/main.css`.
//!
//! Components set these classes from Rust (night mode, reveal, hint, toggles,
//! rating badges). A rename on either side would only show up as a styling
//! regression in the browser, so presence is checked here instead.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".page.night",
    // Scene
    ".progress-fill",
    ".orb {",
    ".orb[data-phase=\"moon\"]",
    ".matrix",
    ".hero__title .flip",
    ".click-hint.hide",
    ".reveal {",
    ".reveal.visible",
    "[data-speed]",
    // Controls
    ".toggle.is-on",
    ".toggle--small",
    ".wave.playing",
    ".audio-status",
    // Calculator and metrics
    ".calculator__error",
    ".calculator__rating--good",
    ".calculator__rating--ok",
    ".calculator__rating--poor",
    ".bar__fill--sleep",
    ".bar__fill--screen",
    ".bar__fill--winddown",
    ".bar__fill--consistency",
    ".metrics__row",
    // Prompt
    ".prompt__text",
    ".button--primary",
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_component_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .copied()
        .collect();
    assert!(
        missing.is_empty(),
        "theme is missing {} selector(s):\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn phase_properties_are_declared_and_used() {
    for prop in ["--phase", "--sky-phase"] {
        assert!(
            THEME_CSS.contains(&format!("{prop}: 0;")),
            "{prop} has no default on :root"
        );
        assert!(
            THEME_CSS.contains(&format!("var({prop})")),
            "{prop} is never read by the theme"
        );
    }
}

#[test]
fn braces_balance() {
    let open = THEME_CSS.matches('{').count();
    let close = THEME_CSS.matches('}').count();
    assert_eq!(open, close, "unbalanced braces in main.css");
}
