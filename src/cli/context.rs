//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::form::validate_length;
use crate::pass::{self, Rounding, Selection, charset};
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for client mode.
pub struct Context {
    settings: Settings,
    clipboard: Option<ClipboardContext>,
    flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run client mode. Returns `Err(Done)` for early exits, `Ok(())` on
    /// completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.apply_flags();
        let length = self.validated_length();
        self.generate_output(length);
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }

        // Explicit class flags replace the saved/default selection wholesale
        if self.flags.has_class_flags() {
            self.settings.selection = Selection {
                lowercase: self.flags.lower,
                uppercase: self.flags.upper,
                digits: self.flags.digits,
                symbols: self.flags.symbols,
            };
        }

        if self.flags.board {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    /// Range check at the boundary; the generator itself never validates.
    /// Rejecting here keeps out-of-range lengths from ever reaching it.
    fn validated_length(&self) -> usize {
        match validate_length(Some(self.settings.length)) {
            Ok(len) => len,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(2);
            }
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self, length: usize) {
        let rounding = if self.flags.classic {
            Rounding::Skip
        } else {
            Rounding::Clamp
        };
        let pool = charset::build(&self.settings.selection);
        let count = self.flags.number.unwrap_or(1).max(1);

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut passwords = String::new();
            for _ in 0..count {
                passwords.push_str(&pass::generate(&pool, length, rounding));
                passwords.push('\n');
            }
            match ctx.set_contents(passwords.clone()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            passwords.zeroize();
        } else {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for _ in 0..count {
                let mut pw = pass::generate(&pool, length, rounding);
                pw.push('\n');
                let _ = out.write_all(pw.as_bytes());
                pw.zeroize();
            }
        }
    }
}
