//! Host locale detection.
//!
//! Asks the desktop environment for the user's preferred languages and
//! exposes them as BCP-47 strings for the init payload. When the host
//! reports nothing (stripped-down containers, exotic setups), falls back
//! to a single default locale so the list is never empty.

use i18n_embed::DesktopLanguageRequester;
use once_cell::sync::Lazy;
use unic_langid::LanguageIdentifier;

/// Locale reported when the desktop environment offers none.
pub const FALLBACK_LOCALE: &str = "en-US";

static REQUESTED: Lazy<Vec<String>> = Lazy::new(|| {
    let requested = DesktopLanguageRequester::requested_languages();
    locales_or_fallback(requested)
});

/// The host's preferred locales, most preferred first.
///
/// Detected once per process; the desktop environment's answer does not
/// change under a running application.
pub fn requested_locales() -> Vec<String> {
    REQUESTED.clone()
}

fn locales_or_fallback(requested: Vec<LanguageIdentifier>) -> Vec<String> {
    if requested.is_empty() {
        tracing::debug!("host reported no locales, using {}", FALLBACK_LOCALE);
        return vec![FALLBACK_LOCALE.to_string()];
    }

    requested.iter().map(ToString::to_string).collect()
}
