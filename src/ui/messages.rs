//! Console output for the CLI: one coloured, iconified line per message.
//!
//! Warnings and errors go to stderr so stdout stays usable when piped.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Kind of console line, fixing its colour, icon and stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Step,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Step => "\x1b[36m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Step => "•",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }

    /// Progress counters are not bold so they read as detail under a header.
    fn weight(self) -> &'static str {
        match self {
            Tone::Step => "",
            _ => BOLD,
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tone::Warning | Tone::Error)
    }
}

fn emit(tone: Tone, msg: impl fmt::Display) {
    let line = format!("{}{}{} {}{}", tone.color(), tone.weight(), tone.icon(), RESET, msg);
    if tone.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Tone::Info, msg);
}

/// One pipeline stage result, e.g. "Extracted 12 clients".
pub fn step<T: fmt::Display>(msg: T) {
    emit(Tone::Step, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Tone::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Tone::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Tone::Error, msg);
}

/// Section banner printed before a command's output.
pub fn header<T: fmt::Display>(title: T) {
    let title = title.to_string();
    let rule = "─".repeat(title.chars().count().max(24));
    println!("{}{}{title}\n{rule}{RESET}", Tone::Info.color(), BOLD);
}
