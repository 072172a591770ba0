// SPDX-License-Identifier: PMPL-1.0-or-later

//! Library error type.

use thiserror::Error;

/// Errors returned by preset resolution and composition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The keyword matches no built-in preset.
    #[error("Undefined preset: {keyword}")]
    InvalidPreset { keyword: String },
}
