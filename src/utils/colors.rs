/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Profit color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_profit(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// Wraps an already formatted amount in the color of its sign.
pub fn colorize_profit(value: i64, text: &str) -> String {
    format!("{}{}{}", color_for_profit(value), text, RESET)
}

/// Grey for placeholders ("-", "0h", empty), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" || v == "0h" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
