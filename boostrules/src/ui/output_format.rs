//! Console message helpers.
//!
//! Progress and error lines go to stderr so that stdout can carry the JSON
//! document when no output file is given.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

fn print_styled<W: Write>(
    writer: &mut W,
    entry: ThemeEntry,
    prefix: &str,
    msg: &str,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let line = format!("{prefix}{msg}");
    match color_for(&entry, theme) {
        Some(color) if supports_color => writeln!(writer, "{}", line.color(color)),
        _ => writeln!(writer, "{line}"),
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_styled(writer, ThemeEntry::Info, "", msg, theme, supports_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_styled(writer, ThemeEntry::Success, "", msg, theme, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_styled(writer, ThemeEntry::Warn, "Warning: ", msg, theme, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_styled(writer, ThemeEntry::Error, "Error: ", msg, theme, supports_color)
}
