// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation tables for activate-i18n.
//!
//! ## Supported locales
//!
//! | Code  | Language | Diss variant |
//! |-------|----------|--------------|
//! | en_US | English  | yes          |
//! | fr_FR | French   | no           |
//! | it_IT | Italian  | no           |
//! | ja_JP | Japanese | no           |
//! | nl_NL | Dutch    | no           |
//! | ru_RU | Russian  | yes          |
//! | zh_CN | Chinese  | no           |
//! | zh_TW | Chinese  | no           |
//! | zh_HK | Chinese  | no           |
//!
//! ## Design
//!
//! Locale codes and preset keywords are matched on their first five
//! characters, scanning each table from the end. Locales without a match
//! fall back to English (`en_US`, always the first entry). Locales that do
//! not translate the diss variant use the English diss.
//!
//! Both tables are static data embedded at compile time.

mod catalog;
mod iso639;
mod locale;
mod presets;

pub use catalog::{find_locale, locale, prefix_match, FALLBACK_LOCALE, LOCALES, MATCH_LEN};
pub use iso639::{language_name, native_name, tag_language_name};
pub use locale::{env_locale_tag, LOCALE_ENV};
pub use presets::{
    default_preset, diss_preset, find_preset, is_diss, DISS_KEYWORD, LINUX_PRESET, PRESETS,
};
