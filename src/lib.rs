// SPDX-License-Identifier: PMPL-1.0-or-later

//! activate-i18n — text for the "Activate <platform>" watermark overlay.
//!
//! Picks a translation from the user's locale tag and a platform from a
//! preset keyword, then builds the overlay title and subtitle.
//!
//! PIECES:
//! 1. **i18n**: static locale and preset tables with five-character
//!    prefix matching.
//! 2. **compose**: [`Selection`], which resolves both and composes the
//!    messages, falling back to English where a translation is missing.
//! 3. **listing**: terminal tables of presets and locales.

pub mod compose;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod listing;
pub mod types;

pub use compose::{compose_messages, Selection};
pub use error::I18nError;
pub use types::Messages;
