//! User-facing status lines. Diagnostics go through `tracing` instead.

use ansi_term::Colour;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {msg}", Colour::Blue.bold().paint(ICON_INFO));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {msg}", Colour::Green.bold().paint(ICON_OK));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {msg}", Colour::Yellow.bold().paint(ICON_WARN));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {msg}", Colour::Red.bold().paint(ICON_ERR));
}
