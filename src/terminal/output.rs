//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, entropy display.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 62;

/// Print box top with optional title: ┌─ Title ────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                           │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        println!("│ {}{} │", content, " ".repeat(inner_width - display_len));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line.
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let left_pad = (inner_width - display_len) / 2;
        let right_pad = inner_width - display_len - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom.
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.len());
            println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
        }
        None => println!("│ {}{} │", flag_padded, " ".repeat(desc_col)),
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Display
// ============================================================================

/// Password entropy in bits: length * log2(pool size).
pub fn calculate_entropy(password_length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    password_length as f64 * (pool_size as f64).log2()
}

/// Entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_is_zero_for_empty_pool() {
        assert_eq!(calculate_entropy(16, 0), 0.0);
        assert_eq!(calculate_entropy(0, 26), 0.0);
    }

    #[test]
    fn entropy_grows_with_length_and_pool() {
        let short = calculate_entropy(8, 26);
        let longer = calculate_entropy(16, 26);
        let richer = calculate_entropy(8, 68);
        assert!(longer > short);
        assert!(richer > short);
    }

    #[test]
    fn strength_bands_match_thresholds() {
        assert_eq!(entropy_strength(calculate_entropy(4, 26)), "Weak");
        assert_eq!(entropy_strength(calculate_entropy(8, 68)), "Fair");
        assert_eq!(entropy_strength(calculate_entropy(16, 68)), "Strong");
        assert_eq!(entropy_strength(200.0), "Very Strong");
    }

    #[test]
    fn console_width_ignores_ansi_sequences() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{UNDERLINE}ab{RESET}")), 2);
    }
}
