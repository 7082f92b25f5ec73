//! Form screen text: the form box, feedback line, password card, and help.

use crate::form::{FormState, MAX_LENGTH, MIN_LENGTH};
use crate::pass::charset;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, calculate_entropy,
    entropy_strength, flush, print_error, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter form option (or press Enter to generate)"
}

fn checkbox(enabled: bool) -> &'static str {
    if enabled { "[x]" } else { "[ ]" }
}

pub fn print_form(state: &FormState, print_invalid: &mut bool, notice: &str) {
    box_top("Password Generator");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    let length_display = match state.length {
        Some(n) => n.to_string(),
        None => format!("(not set, {}-{})", MIN_LENGTH, MAX_LENGTH),
    };
    box_line(&format!("  1) Password Length: {}", length_display));
    box_line("");

    box_line(&format!("{UNDERLINE}Character Classes{RESET}:"));
    box_line(&format!(
        "  2) {} Lowercase",
        checkbox(state.selection.lowercase)
    ));
    box_line(&format!(
        "  3) {} Uppercase",
        checkbox(state.selection.uppercase)
    ));
    box_line(&format!("  4) {} Numbers", checkbox(state.selection.digits)));
    box_line(&format!("  5) {} Symbols", checkbox(state.selection.symbols)));
    box_line("");

    if state.selection.any() {
        box_line(&format!(
            "  Pool: {} characters | Source: {}",
            charset::size(&state.selection),
            crate::rand::entropy_source()
        ));
    } else {
        box_line("  Pool: empty (generated passwords will be blank)");
    }
    box_line("");

    print_rule();
    box_line("   Enter) generate | r) reset | c) copy | s) save defaults");
    box_line("   h) help | q) quit");
    box_bottom();

    // One feedback line under the box: validation error, invalid-option
    // notice, or an action message. Blank when there is nothing to say.
    if let Some(err) = state.error {
        print_error(&err.to_string());
    } else if *print_invalid {
        print_error("Invalid option.");
    } else if !notice.is_empty() {
        println!("{}", notice);
    } else {
        println!();
    }
    *print_invalid = false;

    if state.generated {
        println!();
        print_password_card(state);
    }
    flush();
}

fn print_password_card(state: &FormState) {
    let bits = calculate_entropy(state.password.chars().count(), state.pool_size);

    box_top("Generated Password");
    box_line_center(&state.password);
    box_line_center(&format!("{:.1} bits ({})", bits, entropy_strength(bits)));
    box_bottom();
}

pub fn print_help() {
    box_top("Passform");
    box_line_center("Password generator with a checkbox form");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens the form to");
    box_line("     pick a length and character classes.");
    box_line("  2) Client: Pass flags directly (e.g., -l 12 -U -D) to");
    box_line("     generate without the form.");
    box_line("");
    box_line("USAGE:");
    box_line("  passform [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (4-16, default: 8)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("  -L, --lower", "Include lowercase letters");
    box_opt("  -U, --upper", "Include uppercase letters");
    box_opt("  -D, --digits", "Include numbers");
    box_opt("  -S, --symbols", "Include symbols");
    box_opt("      --classic", "Classic rounding; output may come up one character short");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Use saved form defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passform                Interactive form");
    box_line("  passform -l 12          One 12-character lowercase password");
    box_line("  passform -l 16 -L -U -D -S  All classes, 16 characters");
    box_line("  passform -n 3 -s        Three passwords from saved defaults");
    box_line("");
    box_bottom();
    println!();
}
