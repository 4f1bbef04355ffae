//! Page copy in en-US (fallback) and es-ES.
//!
//! Bundles live under `i18n/<locale>/slumber-ui.ftl`, are embedded with
//! `rust-embed`, and are resolved through one shared loader. `fl!` checks
//! each key against the fallback bundle at compile time.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("nav-why")`, optionally with `name = value` arguments, looked up in [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

const FLUENT_DOMAIN: &str = "slumber-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Bundles;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback = FALLBACK.parse().unwrap_or_default();
    FluentLanguageLoader::new(FLUENT_DOMAIN, fallback)
});

static SELECTED: Once = Once::new();

fn select(requested: &[LanguageIdentifier]) -> Result<(), I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Bundles, requested).map(|_| ())
}

/// Pick the best bundle for the visitor's languages. Runs once.
pub fn init() {
    SELECTED.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        let requested = i18n_embed::WebLanguageRequester::requested_languages();
        #[cfg(not(target_arch = "wasm32"))]
        let requested = i18n_embed::DesktopLanguageRequester::requested_languages();

        if let Err(err) = select(&requested) {
            tracing::warn!(%err, "locale selection failed; using en-US");
        }
    });
}

/// Switch bundles at runtime. Text that is not a language tag is ignored.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    match tag.parse::<LanguageIdentifier>() {
        Ok(lang) => select(&[lang]),
        Err(_) => {
            tracing::debug!(tag, "ignoring unparsable language tag");
            Ok(())
        }
    }
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Locale folders present in the embedded bundles, sorted.
pub fn available_languages() -> Vec<String> {
    let mut codes: Vec<String> = Bundles::iter()
        .filter_map(|file| file.split_once('/').map(|(dir, _)| dir.to_string()))
        .collect();
    codes.sort();
    codes.dedup();
    codes
}

/// Native name for the locale picker; unknown codes show as-is.
pub fn language_name(code: &str) -> &str {
    match code {
        "en-US" => "English",
        "es-ES" => "Español",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "es-ES"]);
    }

    #[test]
    fn fallback_copy_resolves() {
        init();
        assert!(!fl!(&*LOADER, "calc-submit").is_empty());
    }

    #[test]
    fn unparsable_tag_keeps_current_bundle() {
        init();
        let before = fl!(&*LOADER, "nav-why");
        assert!(set_language("not a tag").is_ok());
        assert_eq!(fl!(&*LOADER, "nav-why"), before);
    }

    #[test]
    fn fl_domain_matches_bundle_names() {
        const I18N_TOML: &str = include_str!("../i18n.toml");
        let domain = I18N_TOML
            .lines()
            .filter_map(|line| line.split_once('='))
            .find(|(key, _)| key.trim() == "domain")
            .map(|(_, value)| value.trim().trim_matches('"'));
        assert_eq!(domain, Some(FLUENT_DOMAIN));

        let bundle = format!("{FALLBACK}/{FLUENT_DOMAIN}.ftl");
        assert!(Bundles::get(&bundle).is_some(), "missing embedded {bundle}");
    }

    #[test]
    fn picker_names() {
        assert_eq!(language_name("es-ES"), "Español");
        assert_eq!(language_name("fr-FR"), "fr-FR");
    }
}
