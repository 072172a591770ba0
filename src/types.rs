// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core record types for activate-i18n
//!
//! Locale and preset tables are compile-time statics built from these
//! records. Composition produces a fresh [`Messages`] value per call.

use serde::{Deserialize, Serialize};

/// Index into [`crate::i18n::LOCALES`].
pub type LocaleIndex = usize;

/// Index into [`crate::i18n::PRESETS`].
pub type PresetIndex = usize;

/// Fragments of the default activation nag.
///
/// The platform name is inserted between `pre_title`/`post_title` and
/// between `pre_subtitle`/`post_subtitle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsLike {
    pub pre_title: &'static str,
    pub post_title: &'static str,
    pub pre_subtitle: &'static str,
    pub post_subtitle: &'static str,
}

/// Fragments of the "no need to activate" variant.
///
/// `None` means the locale has no translation for that fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diss {
    pub pre_title: Option<&'static str>,
    pub post_title: Option<&'static str>,
    pub subtitle: Option<&'static str>,
}

impl Diss {
    /// A diss variant with no translated fragments.
    pub const UNTRANSLATED: Diss = Diss {
        pre_title: None,
        post_title: None,
        subtitle: None,
    };

    /// True when every fragment is present.
    pub fn is_complete(&self) -> bool {
        self.pre_title.is_some() && self.post_title.is_some() && self.subtitle.is_some()
    }
}

/// One translated locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleEntry {
    /// `language_REGION`, matched on its first five characters.
    pub code: &'static str,
    pub windows_like: WindowsLike,
    pub diss: Diss,
}

impl LocaleEntry {
    /// Language half of the code (`"ja"` for `"ja_JP"`).
    pub fn language(&self) -> &'static str {
        self.code.split('_').next().unwrap_or(self.code)
    }
}

/// A named platform profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetEntry {
    pub keyword: &'static str,
    pub display_text: &'static str,
}

/// The two strings handed to the overlay renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub title: String,
    pub subtitle: String,
}
