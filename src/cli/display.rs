// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the fuzzmark CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Respects
//! `NO_COLOR` and falls back to plain text when stdout isn't a TTY.
//!
//! # Theme detection order
//!
//! 1. `FUZZMARK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use fuzzmark::{highlight, MatchInfo};
use std::ops::Range;
use std::sync::OnceLock;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FUZZMARK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg" where bg 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
}

mod onelight {
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(GREEN);

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Candidate text with matched ranges in bold yellow, or `[brackets]`
/// when colors are off.
pub fn highlighted(text: &str, ranges: &[Range<usize>]) -> String {
    let colors = use_colors();
    highlight(
        text,
        ranges,
        |part, matched| match (matched, colors) {
            (false, _) => part.to_string(),
            (true, true) => themed(YELLOW, &[BOLD], part),
            (true, false) => format!("[{}]", part),
        },
        String::with_capacity(text.len()),
        |mut acc, part| {
            acc.push_str(&part);
            acc
        },
    )
}

/// Compact score summary: `chars=7 terms=1 intra=0 inter=0`.
pub fn score_summary(info: &MatchInfo) -> String {
    let text = format!(
        "chars={} terms={} intra={} inter={}",
        info.chars, info.terms, info.intra_ins, info.inter_ins
    );
    themed(GRAY, &[], &text)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// One ranked result line: `  3  manager_test_utils  chars=7 ...`
pub fn result_line(rank_idx: usize, text: &str, info: &MatchInfo) -> String {
    format!(
        "{}  {}  {}",
        themed(CYAN, &[], &pad_left(&rank_idx.to_string(), 4)),
        highlighted(text, &info.ranges),
        score_summary(info)
    )
}

/// One unranked result line.
pub fn plain_line(idx: usize, text: &str) -> String {
    format!("{}  {}", themed(CYAN, &[], &pad_left(&idx.to_string(), 4)), text)
}

/// Footer: "N matches" (and whether they were ranked).
pub fn footer(count: usize, ranked: bool) -> String {
    let label = match (count, ranked) {
        (1, true) => "1 match".to_string(),
        (n, true) => format!("{} matches", n),
        (n, false) => format!("{} matches (unranked)", n),
    };
    themed(GREEN, &[BOLD], &label)
}
