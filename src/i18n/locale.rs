// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale tag discovery.

use std::env;

/// Environment variable holding the user's `language_REGION` tag.
pub const LOCALE_ENV: &str = "LANG";

/// Raw locale tag from the environment, `None` when unset or blank.
pub fn env_locale_tag() -> Option<String> {
    tag_from(env::var(LOCALE_ENV).ok())
}

fn tag_from(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_absent() {
        assert_eq!(tag_from(None), None);
        assert_eq!(tag_from(Some(String::new())), None);
        assert_eq!(tag_from(Some("   ".to_string())), None);
    }

    #[test]
    fn values_are_trimmed() {
        assert_eq!(
            tag_from(Some(" ru_RU.UTF-8\n".to_string())),
            Some("ru_RU.UTF-8".to_string())
        );
    }
}
