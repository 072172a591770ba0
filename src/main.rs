// SPDX-License-Identifier: PMPL-1.0-or-later

//! activate-i18n: print the title and subtitle for the activation overlay
//!
//! The locale comes from `--lang` or `LANG`; the platform from `--preset` or
//! the platform this binary was built for.

use activate_i18n::diagnostics::{self, Level, Notice};
use activate_i18n::i18n::env_locale_tag;
use activate_i18n::{listing, I18nError, Messages, Selection};
use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "activate-i18n")]
#[command(version)]
#[command(about = "Localized text for the \"Activate <platform>\" watermark overlay")]
#[command(long_about = None)]
struct Cli {
    /// Platform preset (`m$` for the diss variant)
    #[arg(short, long, value_name = "NAME")]
    preset: Option<String>,

    /// Locale tag such as ja_JP (default: $LANG)
    #[arg(short, long, value_name = "TAG")]
    lang: Option<String>,

    /// Replace the composed title
    #[arg(short, long)]
    title: Option<String>,

    /// Replace the composed subtitle
    #[arg(short, long = "message", value_name = "TEXT")]
    message: Option<String>,

    /// List built-in presets and exit
    #[arg(long)]
    list_presets: bool,

    /// List translated locales and exit
    #[arg(long)]
    list_locales: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Print informational notices
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl Cli {
    fn min_level(&self) -> Level {
        if self.verbose {
            Level::Info
        } else if self.quiet {
            Level::Error
        } else {
            Level::Warn
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.list_presets {
        listing::print_presets();
        return Ok(ExitCode::SUCCESS);
    }
    if cli.list_locales {
        print!("{}", listing::render_locales(io::stdout().is_terminal()));
        return Ok(ExitCode::SUCCESS);
    }

    let tag = cli.lang.clone().or_else(env_locale_tag);
    let mut selection = Selection::new();
    let composed = selection.compose(tag.as_deref(), cli.preset.as_deref());
    diagnostics::print_all(&selection.take_notices(), cli.min_level());

    let mut messages = match composed {
        Ok(messages) => messages,
        Err(err @ I18nError::InvalidPreset { .. }) => {
            Notice::error(err.to_string()).print();
            listing::print_presets();
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(title) = cli.title {
        messages.title = title;
    }
    if let Some(subtitle) = cli.message {
        messages.subtitle = subtitle;
    }

    match cli.format {
        FormatArg::Text => print_text(&messages),
        FormatArg::Json => println!("{}", serde_json::to_string_pretty(&messages)?),
    }

    Ok(ExitCode::SUCCESS)
}

// Title on the first line; the subtitle may span several.
fn print_text(messages: &Messages) {
    println!("{}", messages.title);
    println!("{}", messages.subtitle);
}
