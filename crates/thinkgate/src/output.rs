// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Highlighted console lines. Color is dropped under `--plain`.

use colored::Colorize;

pub fn original(text: &str) {
    println!("{}", format!("original request: {text}").bold().cyan());
}

pub fn annotated(text: &str) {
    println!("{}", format!("forwarded request: '{text}'").bold().green());
}

pub fn progress(message: &str) {
    println!("{}", message.bold().magenta());
}

pub fn header(message: &str) {
    println!("{}", message.bold().blue());
}

/// Debug section header for raw reply fields.
pub fn debug_header(message: &str) {
    println!("{}", message.bold().cyan());
}

pub fn notice(message: &str) {
    println!("{}", message.bold().yellow());
}

pub fn error(message: &str) {
    eprintln!("{}: {message}", "error".bold().red());
}
