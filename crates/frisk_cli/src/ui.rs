//! UI helpers for consistent output formatting.

use frisk_rules::Severity;

/// Single-character Unicode glyphs used as status indicators.
pub mod indicators {
    /// Error indicator (✖).
    pub const ERROR: &str = "✖";
    /// Success indicator (✓).
    pub const SUCCESS: &str = "✓";
}

/// Semantic colour palette for terminal output.
pub mod colors {
    use console::Style;

    /// Red - errors and finding summaries.
    pub const fn error() -> Style {
        Style::new().red()
    }

    /// Green - success messages.
    pub const fn success() -> Style {
        Style::new().green()
    }

    /// Cyan - accent highlights (rule IDs, commands).
    pub const fn accent() -> Style {
        Style::new().cyan()
    }

    /// Light grey - secondary descriptive text.
    pub const fn secondary() -> Style {
        Style::new().color256(252)
    }

    /// Dark grey - muted/contextual text.
    pub const fn muted() -> Style {
        Style::new().color256(243)
    }
}

/// Process exit codes.
pub mod exit {
    /// Secrets were found and `--fail-on-detect` was set.
    pub const FINDINGS: i32 = 1;
    /// An unrecoverable error occurred.
    pub const ERROR: i32 = 2;
}

const SEVERITY_CRITICAL_COLOR: u8 = 196;
const SEVERITY_HIGH_COLOR: u8 = 208;
const SEVERITY_MEDIUM_COLOR: u8 = 220;
const SEVERITY_LOW_COLOR: u8 = 75;

/// Returns the terminal colour style for a given severity level.
#[must_use]
pub const fn severity_style(severity: Severity) -> console::Style {
    match severity {
        Severity::Critical => console::Style::new().color256(SEVERITY_CRITICAL_COLOR).bold(),
        Severity::High => console::Style::new().color256(SEVERITY_HIGH_COLOR),
        Severity::Medium => console::Style::new().color256(SEVERITY_MEDIUM_COLOR),
        Severity::Low => console::Style::new().color256(SEVERITY_LOW_COLOR),
    }
}

/// Returns a severity-coloured error indicator glyph.
#[must_use]
pub fn severity_indicator(severity: Severity) -> String {
    severity_style(severity).apply_to(indicators::ERROR).to_string()
}

/// Prints a styled `frisk <command>` header with surrounding blank lines.
pub fn print_command_header(command: &str) {
    println!();
    println!(
        "{} {}",
        colors::accent().bold().apply_to("frisk"),
        colors::muted().apply_to(command)
    );
    println!();
}

/// Prints a red error message to stderr.
pub fn print_error(message: &str) {
    eprintln!(
        "{} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to(message)
    );
}

/// Returns `singular` when `count` is 1, otherwise `plural`.
#[must_use]
pub const fn pluralise_word<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Returns the shared clap colour theme used by all CLI subcommands.
#[must_use]
pub fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{AnsiColor, Effects, Style};

    clap::builder::Styles::styled()
        .header(
            Style::new()
                .fg_color(Some(AnsiColor::Cyan.into()))
                .effects(Effects::BOLD),
        )
        .usage(
            Style::new()
                .fg_color(Some(AnsiColor::Cyan.into()))
                .effects(Effects::BOLD),
        )
        .literal(Style::new().fg_color(Some(AnsiColor::Cyan.into())))
        .placeholder(Style::new().fg_color(Some(AnsiColor::BrightBlack.into())))
        .valid(Style::new().fg_color(Some(AnsiColor::Green.into())))
        .invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
        .error(
            Style::new()
                .fg_color(Some(AnsiColor::Red.into()))
                .effects(Effects::BOLD),
        )
}
