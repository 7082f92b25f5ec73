//! The form screen loop: input is mapped to actions, actions run through
//! the reducer, and the new state is redrawn.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::form::{Action, FormState, update};
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::{enter_prompt, get_editable_input, get_numeric_input, print_form, print_help};

pub fn form_screen() {
    reset_terminal();
    clear();

    let mut settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            println!("Error loading settings: {}", e);
            Settings::default()
        }
    };

    let mut state = FormState::with_defaults(&settings);
    let mut clipboard: Option<ClipboardContext> = None;
    let mut print_invalid = false;
    let mut notice = String::new();

    loop {
        print_form(&state, &mut print_invalid, &notice);
        notice.clear();

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" => {
                clear();
                state = update(state, Action::Submit);
            }
            "1" => {
                if let Some(len) =
                    get_numeric_input("Enter password length (4-16)", state.length.unwrap_or(0))
                {
                    state = update(state, Action::SetLength(len));
                }
                clear();
            }
            "2" => {
                clear();
                state = update(state, Action::ToggleLowercase);
            }
            "3" => {
                clear();
                state = update(state, Action::ToggleUppercase);
            }
            "4" => {
                clear();
                state = update(state, Action::ToggleDigits);
            }
            "5" => {
                clear();
                state = update(state, Action::ToggleSymbols);
            }
            "r" => {
                clear();
                state = update(state, Action::Reset);
            }
            "c" => {
                clear();
                notice = copy_to_clipboard(&mut clipboard, &state);
            }
            "s" => {
                clear();
                notice = save_defaults(&state, &mut settings);
            }
            "h" => {
                clear();
                print_help();
            }
            "q" => {
                clear();
                break;
            }
            _ => {
                clear();
                print_invalid = true;
            }
        }
    }
}

/// Copy the generated password to the clipboard, zeroizing the scratch copy.
/// The context lives for the whole screen so the selection survives on X11.
fn copy_to_clipboard(clipboard: &mut Option<ClipboardContext>, state: &FormState) -> String {
    if !state.generated || state.password.is_empty() {
        return "Nothing to copy yet.".to_string();
    }

    if clipboard.is_none() {
        *clipboard = match ClipboardContext::new() {
            Ok(c) => Some(c),
            Err(e) => return format!("Clipboard error: {}", e),
        };
    }
    let Some(ctx) = clipboard.as_mut() else {
        return "Clipboard unavailable.".to_string();
    };

    match ctx.set_contents(state.password.clone()) {
        Ok(_) => {
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            "Copied to clipboard.".to_string()
        }
        Err(e) => format!("Clipboard error: {}", e),
    }
}

/// Persist the current form as the saved defaults. A form with no length
/// set keeps the previously saved length.
fn save_defaults(state: &FormState, settings: &mut Settings) -> String {
    if let Some(len) = state.length {
        settings.length = len;
    }
    settings.selection = state.selection;

    match settings.save_to_file() {
        Ok(()) => "Defaults saved.".to_string(),
        Err(e) => format!("Error saving defaults: {}", e),
    }
}
