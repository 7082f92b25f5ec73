//! Warning and prompt messages for client mode, with a global quiet flag.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Global quiet mode flag - suppresses warnings and prompts
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// True when interactive prompts should be skipped: quiet mode, or stdin
/// is not a tty.
fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Print a warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - NOT suppressed
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt when the clipboard is unavailable. Returns true to fall back to
/// terminal output, false to abort. Falls back silently when prompts are
/// skipped.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
