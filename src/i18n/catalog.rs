// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for activate-i18n.
//!
//! Embeds the phrase fragments for every supported locale as a compile-time
//! static table. Lookup is a linear scan, which is fine for the handful of
//! locales we carry; it runs once per process.
//!
//! ## Adding a new locale
//!
//! 1. Append a [`LocaleEntry`] to [`LOCALES`] (never in front of `en_US`)
//! 2. Fill in the four `windows_like` fragments. `\n` in a subtitle
//!    fragment starts a new line on the overlay.
//! 3. Fill in `diss` if you have a translation, otherwise use
//!    [`Diss::UNTRANSLATED`] and English is used for the diss variant.

use crate::types::{Diss, LocaleEntry, LocaleIndex, WindowsLike};

/// Index of the fallback locale. English must stay first.
pub const FALLBACK_LOCALE: LocaleIndex = 0;

/// Number of characters compared when matching codes and keywords.
pub const MATCH_LEN: usize = 5;

/// Compare the first [`MATCH_LEN`] characters of two strings.
///
/// Strings shorter than the match length only match themselves, so `"en"`
/// never selects `"en_US"` and `"mac"` never selects a `"macos"` keyword.
pub fn prefix_match(a: &str, b: &str) -> bool {
    a.chars().take(MATCH_LEN).eq(b.chars().take(MATCH_LEN))
}

/// Find a locale whose code matches `tag`, scanning from the end.
pub fn find_locale(tag: &str) -> Option<LocaleIndex> {
    LOCALES
        .iter()
        .enumerate()
        .rev()
        .find(|(_, entry)| prefix_match(entry.code, tag))
        .map(|(index, _)| index)
}

/// Locale entry at `index`, or the fallback entry when out of range.
pub fn locale(index: LocaleIndex) -> &'static LocaleEntry {
    LOCALES.get(index).unwrap_or(&LOCALES[FALLBACK_LOCALE])
}

// ─── Locale table ───────────────────────────────────────────────────

pub const LOCALES: &[LocaleEntry] = &[
    // English is the fallback and must carry both variants in full
    LocaleEntry {
        code: "en_US",
        windows_like: WindowsLike {
            pre_title: "Activate ",
            post_title: "",
            pre_subtitle: "Go to Settings to activate ",
            post_subtitle: ".",
        },
        diss: Diss {
            pre_title: Some("No need to activate "),
            post_title: Some(""),
            subtitle: Some("We're not as annoying as Microsoft"),
        },
    },
    LocaleEntry {
        code: "fr_FR",
        windows_like: WindowsLike {
            pre_title: "Activer ",
            post_title: "",
            pre_subtitle: "Accédez aux paramètres pour activer ",
            post_subtitle: ".",
        },
        diss: Diss::UNTRANSLATED,
    },
    LocaleEntry {
        code: "it_IT",
        windows_like: WindowsLike {
            pre_title: "Attiva ",
            post_title: "",
            pre_subtitle: "Passa a Impostazioni per attivare ",
            post_subtitle: ".",
        },
        diss: Diss::UNTRANSLATED,
    },
    LocaleEntry {
        code: "ja_JP",
        windows_like: WindowsLike {
            pre_title: "",
            post_title: "のライセンス認証",
            pre_subtitle: "設定を開き、",
            post_subtitle: "のライセンス認証を行ってください",
        },
        diss: Diss::UNTRANSLATED,
    },
    LocaleEntry {
        code: "nl_NL",
        windows_like: WindowsLike {
            pre_title: "Activeren ",
            post_title: "",
            pre_subtitle: "Gaan naar instellingen om te activeren ",
            post_subtitle: ".",
        },
        diss: Diss::UNTRANSLATED,
    },
    LocaleEntry {
        code: "ru_RU",
        windows_like: WindowsLike {
            pre_title: "Активация ",
            post_title: "",
            pre_subtitle: "Чтобы активировать ",
            post_subtitle: ",\nперейдите в раздел \"Параметры\".",
        },
        diss: Diss {
            pre_title: Some("Активировать "),
            post_title: Some(" не надо"),
            subtitle: Some("Мы не так назойливы, как Microsoft"),
        },
    },
    LocaleEntry {
        code: "zh_CN",
        windows_like: WindowsLike {
            pre_title: "激活 ",
            post_title: "",
            pre_subtitle: "转到“设置”以激活 ",
            post_subtitle: "。",
        },
        diss: Diss::UNTRANSLATED,
    },
    LocaleEntry {
        code: "zh_TW",
        windows_like: WindowsLike {
            pre_title: "啟用 ",
            post_title: "",
            pre_subtitle: "移至[設定]以啟用 ",
            post_subtitle: "。",
        },
        diss: Diss::UNTRANSLATED,
    },
    LocaleEntry {
        code: "zh_HK",
        windows_like: WindowsLike {
            pre_title: "啟用 ",
            post_title: "",
            pre_subtitle: "移至[設定]以啟用 ",
            post_subtitle: "。",
        },
        diss: Diss::UNTRANSLATED,
    },
];
