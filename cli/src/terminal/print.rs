use std::path::Path;

use colored::*;
use hmap_core::{HostRecord, ValidationContext};
use tracing::{error, info};
use unicode_width::UnicodeWidthStr;

use crate::terminal::logging::PRINT_TARGET;
use crate::terminal::{colors, format};

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! hprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

/// Like [`print`], but lands on stderr.
pub fn print_err(msg: &str) {
    error!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator(q_level: u8) {
    if q_level > 0 {
        return;
    }
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn map_line(record: &HostRecord) {
    print(&format::record(record));
}

pub fn map_tree(idx: usize, record: &HostRecord) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        format::record(record)
    ));
}

/// Renders a failed validation: location, the line and a caret under the column.
pub fn diagnostic(path: &Path, ctx: &ValidationContext) {
    print_err(&format::location(path, ctx));
    if ctx.line.is_empty() {
        return;
    }
    print_err(&ctx.line);
    print_err(&format::caret(ctx.column, ctx.status));
}
