// SPDX-License-Identifier: PMPL-1.0-or-later

//! Preset and locale tables for the terminal.

use crate::i18n::{language_name, native_name, LOCALES, PRESETS};
use colored::*;
use std::fmt::Write;
use std::io::{self, IsTerminal};

fn bold(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// The built-in presets, in table order.
pub fn render_presets(color: bool) -> String {
    let mut out = String::from("Built-in Presets:\n\n");
    out.push_str(&bold("Name\t\tDescription", color));
    out.push('\n');
    for preset in PRESETS {
        let _ = writeln!(
            out,
            "{}\t\tPlatform preset for {}",
            bold(preset.keyword, color),
            preset.display_text
        );
    }
    out
}

/// Print the preset table to stderr.
pub fn print_presets() {
    eprint!("{}", render_presets(io::stderr().is_terminal()));
}

/// The translated locales, in table order.
pub fn render_locales(color: bool) -> String {
    let mut out = String::from("Translated Locales:\n\n");
    out.push_str(&bold(
        &format!("{:<8}{:<12}{:<14}{}", "Code", "Language", "Native", "Diss"),
        color,
    ));
    out.push('\n');
    for entry in LOCALES {
        let language = entry.language();
        let diss = if entry.diss.subtitle.is_some() {
            "yes"
        } else {
            "no"
        };
        let _ = writeln!(
            out,
            "{:<8}{:<12}{:<14}{}",
            entry.code,
            language_name(language).unwrap_or(language),
            native_name(language).unwrap_or(language),
            diss
        );
    }
    out
}
