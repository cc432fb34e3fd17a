/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Status → color: review green, in-progress yellow, pending grey.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "review" => GREEN,
        "in-progress" => YELLOW,
        _ => GREY,
    }
}

/// Priority → color: high red, medium yellow, low grey.
pub fn color_for_priority(priority: &str) -> &'static str {
    match priority {
        "high" => RED,
        "medium" => YELLOW,
        _ => GREY,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{}{}{}", color, value, RESET)
}
