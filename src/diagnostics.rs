// SPDX-License-Identifier: PMPL-1.0-or-later

//! Leveled diagnostic notices.
//!
//! Resolution never prints. It records [`Notice`]s and the binary decides
//! which ones reach stderr.

use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }

    fn styled_tag(&self) -> ColoredString {
        match self {
            Level::Info => self.tag().dimmed(),
            Level::Warn => self.tag().yellow().bold(),
            Level::Error => self.tag().red().bold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub detail: String,
}

impl Notice {
    fn new(level: Level, detail: String) -> Self {
        Self { level, detail }
    }

    pub fn info(detail: String) -> Self {
        Self::new(Level::Info, detail)
    }

    pub fn warning(detail: String) -> Self {
        Self::new(Level::Warn, detail)
    }

    pub fn error(detail: String) -> Self {
        Self::new(Level::Error, detail)
    }

    /// `[TAG] detail`, uncolored.
    pub fn line(&self) -> String {
        format!("[{}] {}", self.level.tag(), self.detail)
    }

    pub fn print(&self) {
        eprintln!("[{}] {}", self.level.styled_tag(), self.detail);
    }
}

/// Print every notice at or above `min`.
pub fn print_all(notices: &[Notice], min: Level) {
    for notice in notices.iter().filter(|n| n.level >= min) {
        notice.print();
    }
}
