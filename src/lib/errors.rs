//! User-input validation failures. These are the only errors the app produces:
//! there is no fallible I/O, so nothing here is ever thrown or logged. Each
//! variant renders to the exact message shown inline next to a field or in
//! the onboarding banner.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty; carries the field label.
    Required(&'static str),
    MalformedEmail,
    TooShortPassword { min: usize },
    /// A required choice was not made; carries what must be selected.
    NoSelection(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required(field) => write!(formatter, "{field} is required"),
            ValidationError::MalformedEmail => {
                write!(formatter, "Please enter a valid email address")
            }
            ValidationError::TooShortPassword { min } => {
                write!(formatter, "Password must be at least {min} characters")
            }
            ValidationError::NoSelection(what) => write!(formatter, "Please select {what}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn messages_match_the_inline_copy() {
        assert_eq!(
            ValidationError::Required("Email").to_string(),
            "Email is required"
        );
        assert_eq!(
            ValidationError::MalformedEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ValidationError::TooShortPassword { min: 8 }.to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            ValidationError::NoSelection("at least one tool").to_string(),
            "Please select at least one tool"
        );
    }
}
