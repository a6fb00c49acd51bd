use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;
use colored::*;
use subnetr_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! sprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn lines(lines: &[String]) {
    for line in lines {
        print(line);
    }
}

/// Decorations are only drawn on a full terminal report.
fn decorated(cfg: &Config) -> bool {
    cfg.quiet == 0 && cfg.renders_to_terminal()
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || !decorated(cfg) {
        return;
    }

    let title: String = format!("⟦ SUBNETR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let side: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str())) / 2;
    let sep: ColoredString = "═".repeat(side).color(colors::SEPARATOR);
    print(&format!("{sep}{}{sep}", title.bright_green().bold()));
}

pub fn header(msg: &str, cfg: &Config) {
    if !decorated(cfg) {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let dashes: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str()));
    let left: String = "─".repeat(dashes / 2);
    let right: String = "─".repeat(dashes - dashes / 2);
    print(&format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        title.bright_green(),
        right.color(colors::SEPARATOR)
    ));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

pub fn print_status(msg: &str) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}"));
}

pub fn end_of_program(cfg: &Config) {
    if decorated(cfg) {
        fat_separator();
    }
}
