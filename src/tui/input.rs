//! Raw-mode line editing for form fields.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Get numeric input with cursor editing. Returns `None` when cancelled;
/// an emptied field comes back as 0 and is caught by form validation.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };

    let digits = edit_line(prompt, &initial, true)?;
    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

/// Get free-text input with cursor editing. Returns `None` when cancelled.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, false)
}

fn edit_line(prompt: &str, initial: &str, digits_only: bool) -> Option<String> {
    let mut input = initial.to_string();
    let mut cursor_pos = input.len() + 1; // 1-based: 1 = before first char
    let mut last_len = input.len();
    let mut cancelled = false;

    // RawModeGuard restores cooked mode even on early return or panic
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(input),
    };

    print!("{}: {}", prompt, input);
    flush();

    loop {
        match read() {
            Ok(Event::Key(key_event)) => {
                match key_event.code {
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        // Reset terminal BEFORE exit since process::exit
                        // doesn't run destructors
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.clear();
                        cursor_pos = 1;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                            input.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_pos <= input.len() {
                            input.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Left => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if cursor_pos < input.len() + 1 {
                            cursor_pos += 1;
                        }
                    }
                    KeyCode::Home => cursor_pos = 1,
                    KeyCode::End => cursor_pos = input.len() + 1,
                    KeyCode::Char(c) if !digits_only || c.is_ascii_digit() => {
                        input.insert(cursor_pos - 1, c);
                        cursor_pos += 1;
                    }
                    _ => {}
                }

                // Redraw the line, then park the cursor where it belongs
                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, input);
                print!("\x1b[{}G", prompt.len() + 2 + cursor_pos);
                flush();
                last_len = input.len();
            }
            Err(_) => break,
            _ => {}
        }
    }

    // Drop the guard to leave raw mode BEFORE the newline prints
    drop(_guard);
    println!();

    if cancelled { None } else { Some(input) }
}
