// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in platform presets.

use super::catalog::prefix_match;
use crate::types::{PresetEntry, PresetIndex};

/// Keyword that switches composition to the diss variant.
pub const DISS_KEYWORD: &str = "m$";

/// Index of the `linux` entry, used on targets with no preset of their own.
pub const LINUX_PRESET: PresetIndex = 2;

pub const PRESETS: &[PresetEntry] = &[
    PresetEntry {
        keyword: "mac",
        display_text: "macOS",
    },
    PresetEntry {
        keyword: "bsd",
        display_text: "*BSD",
    },
    PresetEntry {
        keyword: "linux",
        display_text: "Linux",
    },
    PresetEntry {
        keyword: "hurd",
        display_text: "GNU/Hurd",
    },
    PresetEntry {
        keyword: "windows",
        display_text: "Windows",
    },
    PresetEntry {
        keyword: "unix",
        display_text: "*nix",
    },
    PresetEntry {
        keyword: "deck",
        display_text: "Steam Deck",
    },
    PresetEntry {
        keyword: "reactos",
        display_text: "ReactOS",
    },
    PresetEntry {
        keyword: DISS_KEYWORD,
        display_text: "diss M!cr0$0f+",
    },
];

/// Preset for the platform this binary was compiled for.
pub fn default_preset() -> PresetIndex {
    let keyword = if cfg!(target_os = "macos") {
        "mac"
    } else if cfg!(any(
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly"
    )) {
        "bsd"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else if cfg!(target_os = "hurd") {
        "hurd"
    } else if cfg!(windows) {
        "windows"
    } else if cfg!(unix) {
        "unix"
    } else {
        "linux"
    };
    find_preset(keyword).unwrap_or(LINUX_PRESET)
}

/// True when `keyword` selects the diss variant.
pub fn is_diss(keyword: &str) -> bool {
    prefix_match(DISS_KEYWORD, keyword)
}

/// Find a preset whose keyword matches, scanning from the end.
pub fn find_preset(keyword: &str) -> Option<PresetIndex> {
    PRESETS
        .iter()
        .enumerate()
        .rev()
        .find(|(_, entry)| prefix_match(entry.keyword, keyword))
        .map(|(index, _)| index)
}

/// Index of the diss preset entry.
pub fn diss_preset() -> PresetIndex {
    PRESETS.len() - 1
}
