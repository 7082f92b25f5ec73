//! Form state and its reducer.
//!
//! The form is an explicit immutable value: every user interaction becomes
//! an [`Action`], and [`update`] maps old state plus action to new state.
//! The generator core is called only as the terminal step of `Submit`.

use zeroize::Zeroize;

use crate::pass::{self, Rounding, Selection, charset};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// Length validation failures, shown as a one-line form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    Missing,
    TooShort,
    TooLong,
}

impl std::fmt::Display for LengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthError::Missing => write!(f, "Password length is required"),
            LengthError::TooShort => write!(f, "Should be at least {} characters", MIN_LENGTH),
            LengthError::TooLong => write!(f, "Should be at most {} characters", MAX_LENGTH),
        }
    }
}

/// Range check for a requested password length. This is the boundary the
/// generator core sits behind; the core itself never validates.
pub fn validate_length(length: Option<usize>) -> Result<usize, LengthError> {
    match length {
        None => Err(LengthError::Missing),
        Some(n) if n < MIN_LENGTH => Err(LengthError::TooShort),
        Some(n) if n > MAX_LENGTH => Err(LengthError::TooLong),
        Some(n) => Ok(n),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub length: Option<usize>,
    pub selection: Selection,
    pub password: String,
    pub pool_size: usize,
    pub generated: bool,
    pub error: Option<LengthError>,
}

impl FormState {
    /// Initial screen state seeded from saved defaults.
    pub fn with_defaults(settings: &crate::settings::Settings) -> Self {
        Self {
            length: Some(settings.length),
            selection: settings.selection,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetLength(usize),
    ToggleLowercase,
    ToggleUppercase,
    ToggleDigits,
    ToggleSymbols,
    Submit,
    Reset,
}

/// Pure state transition. `Submit` validates the length and, only on
/// success, builds the pool and samples a fresh password. An empty class
/// selection is not an error: it silently yields an empty password.
pub fn update(state: FormState, action: Action) -> FormState {
    let mut next = state;

    match action {
        Action::SetLength(len) => {
            next.length = Some(len);
            next.error = validate_length(next.length).err();
        }
        Action::ToggleLowercase => next.selection.lowercase = !next.selection.lowercase,
        Action::ToggleUppercase => next.selection.uppercase = !next.selection.uppercase,
        Action::ToggleDigits => next.selection.digits = !next.selection.digits,
        Action::ToggleSymbols => next.selection.symbols = !next.selection.symbols,
        Action::Submit => match validate_length(next.length) {
            Ok(len) => {
                let pool = charset::build(&next.selection);
                next.password.zeroize();
                next.password = pass::generate(&pool, len, Rounding::Clamp);
                next.pool_size = pool.len();
                next.generated = true;
                next.error = None;
            }
            Err(e) => next.error = Some(e),
        },
        Action::Reset => {
            next.password.zeroize();
            next = FormState::default();
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: FormState) -> FormState {
        update(state, Action::Submit)
    }

    #[test]
    fn submit_without_length_reports_missing() {
        let state = submit(FormState::default());
        assert_eq!(state.error, Some(LengthError::Missing));
        assert!(!state.generated);
        assert_eq!(state.password, "");
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert_eq!(validate_length(Some(4)), Ok(4));
        assert_eq!(validate_length(Some(16)), Ok(16));
        assert_eq!(validate_length(Some(3)), Err(LengthError::TooShort));
        assert_eq!(validate_length(Some(0)), Err(LengthError::TooShort));
        assert_eq!(validate_length(Some(17)), Err(LengthError::TooLong));
        assert_eq!(validate_length(None), Err(LengthError::Missing));
    }

    #[test]
    fn out_of_range_submit_never_reaches_the_generator() {
        let state = update(FormState::default(), Action::SetLength(17));
        assert_eq!(state.error, Some(LengthError::TooLong));

        let state = submit(state);
        assert_eq!(state.error, Some(LengthError::TooLong));
        assert!(!state.generated);
        assert_eq!(state.password, "");
    }

    #[test]
    fn set_length_revalidates_live() {
        let state = update(FormState::default(), Action::SetLength(3));
        assert_eq!(state.error, Some(LengthError::TooShort));

        let state = update(state, Action::SetLength(8));
        assert_eq!(state.error, None);
        assert_eq!(state.length, Some(8));
    }

    #[test]
    fn toggles_flip_exactly_one_flag() {
        let state = update(FormState::default(), Action::ToggleUppercase);
        assert!(state.selection.lowercase);
        assert!(state.selection.uppercase);
        assert!(!state.selection.digits);
        assert!(!state.selection.symbols);

        let state = update(state, Action::ToggleLowercase);
        assert!(!state.selection.lowercase);
        assert!(state.selection.uppercase);
    }

    #[test]
    fn lowercase_only_length_eight() {
        let state = submit(update(FormState::default(), Action::SetLength(8)));

        assert!(state.generated);
        assert_eq!(state.error, None);
        assert_eq!(state.password.len(), 8);
        assert_eq!(state.pool_size, 26);
        assert!(state.password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn all_classes_length_sixteen() {
        let mut state = FormState::default();
        for action in [
            Action::ToggleUppercase,
            Action::ToggleDigits,
            Action::ToggleSymbols,
            Action::SetLength(16),
        ] {
            state = update(state, action);
        }
        let state = submit(state);

        assert!(state.generated);
        assert_eq!(state.password.len(), 16);
        assert_eq!(state.pool_size, 68);
        let pool = charset::build(&state.selection);
        assert!(state.password.chars().all(|c| pool.contains(c)));
    }

    #[test]
    fn no_classes_selected_silently_yields_empty_password() {
        let mut state = update(FormState::default(), Action::ToggleLowercase);
        state = update(state, Action::SetLength(8));
        let state = submit(state);

        assert!(state.generated);
        assert_eq!(state.error, None);
        assert_eq!(state.password, "");
        assert_eq!(state.pool_size, 0);
    }

    #[test]
    fn reset_restores_the_default_form() {
        let mut state = FormState::default();
        for action in [
            Action::ToggleUppercase,
            Action::ToggleDigits,
            Action::SetLength(12),
            Action::Submit,
            Action::Reset,
        ] {
            state = update(state, action);
        }

        assert_eq!(state.selection, Selection::default());
        assert!(state.selection.lowercase);
        assert_eq!(state.length, None);
        assert_eq!(state.password, "");
        assert!(!state.generated);
        assert_eq!(state.error, None);
    }

    #[test]
    fn repeated_submits_keep_invariants_without_requiring_equality() {
        let base = update(FormState::default(), Action::SetLength(12));
        let first = submit(base.clone());
        let second = submit(base);

        // Outputs are random; only length and membership are guaranteed.
        for state in [&first, &second] {
            assert_eq!(state.password.len(), 12);
            assert!(state.password.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
