// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language names.
//!
//! Used by the locale listing and to make the "missing translation" warning
//! name the language the user asked for. Covers every language in the
//! catalog plus common requests we do not translate yet.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Returns the English name of an ISO 639-1 code.
///
/// Returns `None` for unrecognised codes.
///
/// # Examples
/// ```
/// assert_eq!(activate_i18n::i18n::language_name("nl"), Some("Dutch"));
/// assert_eq!(activate_i18n::i18n::language_name("xx"), None);
/// ```
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "ja" => Some("Japanese"),
        "pt" => Some("Portuguese"),
        "zh" => Some("Chinese"),
        "ko" => Some("Korean"),
        "it" => Some("Italian"),
        "ru" => Some("Russian"),
        "nl" => Some("Dutch"),
        "sv" => Some("Swedish"),
        "pl" => Some("Polish"),
        "tr" => Some("Turkish"),
        "uk" => Some("Ukrainian"),
        "cs" => Some("Czech"),
        "el" => Some("Greek"),
        "fi" => Some("Finnish"),
        "no" | "nb" => Some("Norwegian"),
        "hu" => Some("Hungarian"),
        _ => None,
    }
}

/// Returns the native name of an ISO 639-1 language code.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "es" => Some("Español"),
        "fr" => Some("Français"),
        "de" => Some("Deutsch"),
        "ja" => Some("日本語"),
        "pt" => Some("Português"),
        "zh" => Some("中文"),
        "ko" => Some("한국어"),
        "it" => Some("Italiano"),
        "ru" => Some("Русский"),
        "nl" => Some("Nederlands"),
        "uk" => Some("Українська"),
        _ => None,
    }
}

/// English name of the language part of a `language_REGION` tag.
pub fn tag_language_name(tag: &str) -> Option<&'static str> {
    let language = tag.split(['_', '-', '.', '@']).next()?;
    language_name(language)
}
