// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale/preset resolution and message composition.
//!
//! A [`Selection`] carries the resolved locale and preset for one overlay.
//! The locale is resolved once and then pinned; the preset can be changed
//! as often as needed. Every composition builds fresh strings.

use crate::diagnostics::Notice;
use crate::error::I18nError;
use crate::i18n::{
    default_preset, diss_preset, find_locale, find_preset, is_diss, locale, tag_language_name,
    FALLBACK_LOCALE, PRESETS,
};
use crate::types::{LocaleEntry, LocaleIndex, Messages, PresetEntry, PresetIndex};

/// Locale and preset chosen for one overlay.
///
/// The locale is resolved once and then stays put. The preset index always
/// names a platform; the diss keyword only sets a flag, so an absent keyword
/// afterwards falls back to that platform again.
#[derive(Debug, Clone)]
pub struct Selection {
    locale: Option<LocaleIndex>,
    preset: PresetIndex,
    diss: bool,
    notices: Vec<Notice>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    /// Unresolved locale, platform default preset.
    pub fn new() -> Self {
        Self::with_preset(default_preset())
    }

    /// Unresolved locale with an explicit starting preset.
    ///
    /// Out-of-range indices and the diss entry are clamped to the platform
    /// default.
    pub fn with_preset(preset: PresetIndex) -> Self {
        let preset = if preset < PRESETS.len() && preset != diss_preset() {
            preset
        } else {
            default_preset()
        };
        Self {
            locale: None,
            preset,
            diss: false,
            notices: Vec::new(),
        }
    }

    /// Resolved locale index, `None` until [`Selection::resolve_locale`] runs.
    pub fn locale_index(&self) -> Option<LocaleIndex> {
        self.locale
    }

    /// Resolved locale, or the fallback locale while unresolved.
    pub fn locale(&self) -> &'static LocaleEntry {
        locale(self.locale.unwrap_or(FALLBACK_LOCALE))
    }

    pub fn preset_index(&self) -> PresetIndex {
        self.preset
    }

    /// Platform preset, unaffected by the diss keyword.
    pub fn preset(&self) -> &'static PresetEntry {
        &PRESETS[self.preset]
    }

    /// Entry whose display text goes into the next composition.
    pub fn active_preset(&self) -> &'static PresetEntry {
        if self.diss {
            &PRESETS[diss_preset()]
        } else {
            self.preset()
        }
    }

    /// True when the last resolved keyword selected the diss variant.
    pub fn is_diss(&self) -> bool {
        self.diss
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain the notices collected so far.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Pick the locale for `raw_tag`.
    ///
    /// Only the first call does any work. Unknown or missing tags resolve to
    /// English and record a single warning.
    pub fn resolve_locale(&mut self, raw_tag: Option<&str>) -> LocaleIndex {
        if let Some(index) = self.locale {
            return index;
        }

        let shown = raw_tag.unwrap_or("(unset)");
        self.notices.push(Notice::info(format!("Got user language {}", shown)));

        let index = match raw_tag.and_then(find_locale) {
            Some(index) => index,
            None => {
                let language = raw_tag
                    .and_then(tag_language_name)
                    .map(|name| format!(" ({})", name))
                    .unwrap_or_default();
                self.notices.push(Notice::warning(format!(
                    "activate-i18n lacks translation for `{}'{} language, using English translation",
                    shown, language
                )));
                FALLBACK_LOCALE
            }
        };
        self.locale = Some(index);
        index
    }

    /// Pick the preset for `keyword`.
    ///
    /// `None` keeps the current preset. The diss keyword leaves the platform
    /// preset alone, returns the diss entry and switches the locale to
    /// English when the current locale has no diss translation.
    pub fn resolve_preset(&mut self, keyword: Option<&str>) -> Result<PresetIndex, I18nError> {
        let Some(keyword) = keyword else {
            self.diss = false;
            return Ok(self.preset);
        };

        if is_diss(keyword) {
            let current = *self.locale.get_or_insert(FALLBACK_LOCALE);
            if locale(current).diss.subtitle.is_none() {
                self.notices.push(Notice::warning(format!(
                    "Diss for `{}' is currently not translated, using English diss",
                    locale(current).code
                )));
                self.locale = Some(FALLBACK_LOCALE);
            }
            self.diss = true;
            return Ok(diss_preset());
        }

        let index = find_preset(keyword).ok_or_else(|| I18nError::InvalidPreset {
            keyword: keyword.to_string(),
        })?;
        self.diss = false;
        self.preset = index;
        Ok(index)
    }

    /// Resolve locale and preset, then build the title and subtitle.
    pub fn compose(
        &mut self,
        raw_tag: Option<&str>,
        preset: Option<&str>,
    ) -> Result<Messages, I18nError> {
        self.resolve_locale(raw_tag);

        self.notices.push(Notice::info(format!(
            "Loading preset: {}",
            preset.unwrap_or("(platform default)")
        )));
        self.resolve_preset(preset)?;
        self.notices.push(Notice::info(format!(
            "Loaded preset: {}",
            self.active_preset().keyword
        )));

        Ok(self.messages())
    }

    /// Messages for the current selection.
    pub fn messages(&self) -> Messages {
        let entry = self.locale();
        let name = self.active_preset().display_text;

        if self.diss {
            let diss = entry.diss;
            Messages {
                title: [
                    diss.pre_title.unwrap_or_default(),
                    name,
                    diss.post_title.unwrap_or_default(),
                ]
                .concat(),
                subtitle: diss.subtitle.unwrap_or_default().to_string(),
            }
        } else {
            let wl = entry.windows_like;
            Messages {
                title: [wl.pre_title, name, wl.post_title].concat(),
                subtitle: [wl.pre_subtitle, name, wl.post_subtitle].concat(),
            }
        }
    }
}

/// Compose messages with a fresh [`Selection`], discarding notices.
///
/// # Examples
///
/// ```
/// let messages = activate_i18n::compose_messages(Some("en_US"), Some("deck")).unwrap();
/// assert_eq!(messages.title, "Activate Steam Deck");
/// assert_eq!(messages.subtitle, "Go to Settings to activate Steam Deck.");
/// ```
pub fn compose_messages(
    raw_tag: Option<&str>,
    preset: Option<&str>,
) -> Result<Messages, I18nError> {
    Selection::new().compose(raw_tag, preset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Level;
    use crate::i18n::LOCALES;

    fn warnings(selection: &Selection) -> usize {
        selection
            .notices()
            .iter()
            .filter(|n| n.level == Level::Warn)
            .count()
    }

    #[test]
    fn known_tag_resolves_without_warning() {
        let mut selection = Selection::new();
        assert_eq!(selection.resolve_locale(Some("ru_RU.UTF-8")), 5);
        assert_eq!(warnings(&selection), 0);
    }

    #[test]
    fn unknown_tag_falls_back_with_one_warning() {
        let mut selection = Selection::new();
        assert_eq!(selection.resolve_locale(Some("de_DE")), FALLBACK_LOCALE);
        assert_eq!(warnings(&selection), 1);
        let warning = selection
            .notices()
            .iter()
            .find(|n| n.level == Level::Warn)
            .unwrap();
        assert!(warning.detail.contains("de_DE"));
        assert!(warning.detail.contains("German"));
    }

    #[test]
    fn absent_tag_falls_back_with_one_warning() {
        let mut selection = Selection::new();
        assert_eq!(selection.resolve_locale(None), FALLBACK_LOCALE);
        assert_eq!(warnings(&selection), 1);
    }

    #[test]
    fn locale_resolution_is_idempotent() {
        let mut selection = Selection::new();
        selection.resolve_locale(Some("ja_JP"));
        let notices = selection.notices().len();
        assert_eq!(selection.resolve_locale(Some("fr_FR")), 3);
        assert_eq!(selection.resolve_locale(None), 3);
        assert_eq!(selection.notices().len(), notices);
    }

    #[test]
    fn absent_keyword_keeps_preset() {
        let mut selection = Selection::with_preset(6);
        assert_eq!(selection.resolve_preset(None), Ok(6));
        assert_eq!(selection.preset().keyword, "deck");
    }

    #[test]
    fn out_of_range_start_preset_is_clamped() {
        let selection = Selection::with_preset(PRESETS.len());
        assert_eq!(selection.preset_index(), default_preset());
    }

    #[test]
    fn diss_start_preset_is_clamped() {
        let mut selection = Selection::with_preset(diss_preset());
        assert_eq!(selection.preset_index(), default_preset());
        let messages = selection.compose(Some("en_US"), None).unwrap();
        assert!(!messages.title.contains("M!cr0$0f+"));
    }

    #[test]
    fn diss_leaves_platform_preset_in_place() {
        let mut selection = Selection::with_preset(2);
        assert_eq!(selection.resolve_preset(Some("m$")), Ok(diss_preset()));
        assert_eq!(selection.preset_index(), 2);
        assert_eq!(selection.active_preset().keyword, "m$");
    }

    #[test]
    fn absent_keyword_after_diss_restores_platform() {
        let mut selection = Selection::with_preset(2);
        let diss = selection.compose(Some("en_US"), Some("m$")).unwrap();
        assert_eq!(diss.title, "No need to activate diss M!cr0$0f+");
        let messages = selection.compose(Some("en_US"), None).unwrap();
        assert_eq!(messages.title, "Activate Linux");
        assert_eq!(messages.subtitle, "Go to Settings to activate Linux.");
    }

    #[test]
    fn invalid_keyword_is_an_error() {
        let mut selection = Selection::with_preset(0);
        let err = selection.resolve_preset(Some("amiga")).unwrap_err();
        assert_eq!(
            err,
            I18nError::InvalidPreset {
                keyword: "amiga".to_string()
            }
        );
        assert_eq!(err.to_string(), "Undefined preset: amiga");
        assert_eq!(selection.preset_index(), 0);
    }

    #[test]
    fn diss_on_untranslated_locale_forces_english() {
        let mut selection = Selection::new();
        selection.resolve_locale(Some("fr_FR"));
        selection.resolve_preset(Some("m$")).unwrap();
        assert_eq!(selection.locale_index(), Some(FALLBACK_LOCALE));
        assert!(selection.is_diss());
        assert_eq!(warnings(&selection), 1);
    }

    #[test]
    fn diss_on_translated_locale_keeps_it() {
        let mut selection = Selection::new();
        selection.resolve_locale(Some("ru_RU"));
        selection.resolve_preset(Some("m$")).unwrap();
        assert_eq!(selection.locale().code, "ru_RU");
        assert_eq!(warnings(&selection), 0);
    }

    #[test]
    fn diss_before_locale_pins_english() {
        let mut selection = Selection::new();
        selection.resolve_preset(Some("m$")).unwrap();
        assert_eq!(selection.locale_index(), Some(FALLBACK_LOCALE));
        assert_eq!(selection.resolve_locale(Some("ru_RU")), FALLBACK_LOCALE);
    }

    #[test]
    fn switching_away_from_diss_clears_it() {
        let mut selection = Selection::new();
        selection.compose(Some("en_US"), Some("m$")).unwrap();
        let messages = selection.compose(Some("en_US"), Some("bsd")).unwrap();
        assert!(!selection.is_diss());
        assert_eq!(messages.title, "Activate *BSD");
    }

    #[test]
    fn russian_diss_wraps_name() {
        let messages = compose_messages(Some("ru_RU"), Some("m$")).unwrap();
        assert_eq!(messages.title, "Активировать diss M!cr0$0f+ не надо");
        assert_eq!(messages.subtitle, "Мы не так назойливы, как Microsoft");
    }

    #[test]
    fn russian_subtitle_keeps_newline() {
        let messages = compose_messages(Some("ru_RU"), Some("linux")).unwrap();
        assert_eq!(
            messages.subtitle,
            "Чтобы активировать Linux,\nперейдите в раздел \"Параметры\"."
        );
    }

    #[test]
    fn compose_records_loading_notices() {
        let mut selection = Selection::new();
        selection.compose(Some("en_US"), Some("hurd")).unwrap();
        let lines: Vec<String> = selection.take_notices().iter().map(Notice::line).collect();
        assert!(lines.contains(&"[INFO] Loading preset: hurd".to_string()));
        assert!(lines.contains(&"[INFO] Loaded preset: hurd".to_string()));
        assert!(selection.notices().is_empty());
    }

    #[test]
    fn every_locale_composes_every_platform() {
        for entry in LOCALES {
            for preset in PRESETS.iter().filter(|p| !is_diss(p.keyword)) {
                let messages = compose_messages(Some(entry.code), Some(preset.keyword)).unwrap();
                assert!(messages.title.contains(preset.display_text));
                assert!(messages.subtitle.contains(preset.display_text));
            }
        }
    }
}
