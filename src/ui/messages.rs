use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Kind of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn colour(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

/// Colours are disabled when `NO_COLOR` is set.
fn use_colour() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn render<T: fmt::Display>(tone: Tone, msg: T) -> String {
    if use_colour() {
        format!("{}{}{} {}{}", tone.colour(), BOLD, tone.icon(), RESET, msg)
    } else {
        format!("{} {}", tone.icon(), msg)
    }
}

pub fn emit<T: fmt::Display>(tone: Tone, msg: T) {
    let line = render(tone, msg);
    if tone == Tone::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Tone::Info, msg);
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

pub fn header<T: fmt::Display>(msg: T) {
    if use_colour() {
        println!("{}{}== {}{}", Tone::Info.colour(), BOLD, msg, RESET);
    } else {
        println!("== {msg}");
    }
}
