//! Interactive form TUI.

mod input;
mod screen;
mod text;

pub use input::*;
pub use text::*;

/// Run interactive mode.
pub fn run() {
    screen::form_screen();
}
