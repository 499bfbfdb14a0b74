//! Colored, single-line client logs.
//!
//! Lines look like `[LEVEL] label message`. Warnings and errors go to stderr.

use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};
use solana_address::Address;

use crate::views::TweetAccountView;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub const fn color(self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Warning => LogColor::Warning,
            Self::Error => LogColor::Error,
        }
    }

    const fn to_stderr(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Debug,
    Error,
    Warning,
    Info,
    Gray,
    FadedGray,
}

impl LogColor {
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Highlight => (255, 215, 87),
            Self::Debug => (40, 100, 153),
            Self::Error => (255, 0, 45),
            Self::Warning => (180, 105, 0),
            Self::Info => (0, 95, 255),
            Self::Gray => (192, 192, 192),
            Self::FadedGray => (95, 95, 95),
        }
    }
}

impl From<LogColor> for Color {
    fn from(value: LogColor) -> Color {
        let (r, g, b) = value.rgb();
        Color::TrueColor { r, g, b }
    }
}

pub fn format_line(level: Level, label: impl Display, msg: impl Display) -> String {
    format!(
        "[{}] {} {}",
        level.to_string().color(level.color()),
        label.to_string().color(LogColor::Debug),
        msg.to_string().color(LogColor::Gray)
    )
}

pub fn log(level: Level, label: impl Display, msg: impl Display) {
    let line = format_line(level, label, msg);
    if level.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn log_info(label: impl Display, msg: impl Display) {
    log(Level::Info, label, msg)
}

pub fn log_success(label: impl Display, msg: impl Display) {
    log(Level::Success, label, msg)
}

pub fn log_warning(label: impl Display, msg: impl Display) {
    log(Level::Warning, label, msg)
}

pub fn log_error(label: impl Display, msg: impl Display) {
    log(Level::Error, label, msg)
}

/// Logs a fetched tweet under its account address.
pub fn log_tweet(address: &Address, tweet: &TweetAccountView) {
    log_info(address, format!("\n{tweet}"))
}
