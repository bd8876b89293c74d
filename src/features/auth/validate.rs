//! The single validation authority for both auth forms. Field-level checks on
//! the sign-in page and submit-time checks on both pages all call in here, so
//! the rules cannot diverge between surfaces.

use crate::app_lib::ValidationError;

/// Minimum password length enforced on sign-up for early UX feedback.
pub const SIGN_UP_MIN_PASSWORD: usize = 8;

/// Password rules differ between the two forms: sign-in only rejects empty
/// input, sign-up additionally enforces a minimum length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordPolicy {
    SignIn,
    SignUp,
}

/// Checks the `local@domain.tld` shape: exactly one `@`, non-empty local
/// part, a dot-separated domain with non-empty labels, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required("Email"));
    }
    if !is_valid_email(value) {
        return Err(ValidationError::MalformedEmail);
    }
    Ok(())
}

pub fn validate_password(value: &str, policy: PasswordPolicy) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required("Password"));
    }
    if policy == PasswordPolicy::SignUp && value.chars().count() < SIGN_UP_MIN_PASSWORD {
        return Err(ValidationError::TooShortPassword {
            min: SIGN_UP_MIN_PASSWORD,
        });
    }
    Ok(())
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required("Name"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("name@inbox.im"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("  padded@inbox.im  "));
    }

    #[test]
    fn rejects_anything_without_the_local_domain_tld_shape() {
        for candidate in [
            "",
            "plainaddress",
            "@inbox.im",
            "name@",
            "name@inbox",
            "name@@inbox.im",
            "name@inbox..im",
            "name@.im",
            "name@inbox.im.",
            "na me@inbox.im",
            "name@in box.im",
        ] {
            assert!(!is_valid_email(candidate), "accepted {candidate:?}");
        }
    }

    #[test]
    fn email_errors_distinguish_empty_from_malformed() {
        assert_eq!(
            validate_email("   "),
            Err(ValidationError::Required("Email"))
        );
        assert_eq!(validate_email("nope"), Err(ValidationError::MalformedEmail));
        assert_eq!(validate_email("name@inbox.im"), Ok(()));
    }

    #[test]
    fn sign_in_accepts_any_non_empty_password() {
        assert_eq!(
            validate_password("", PasswordPolicy::SignIn),
            Err(ValidationError::Required("Password"))
        );
        assert_eq!(validate_password("x", PasswordPolicy::SignIn), Ok(()));
    }

    #[test]
    fn sign_up_requires_eight_characters() {
        assert_eq!(
            validate_password("", PasswordPolicy::SignUp),
            Err(ValidationError::Required("Password"))
        );
        assert_eq!(
            validate_password("short7!", PasswordPolicy::SignUp),
            Err(ValidationError::TooShortPassword { min: 8 })
        );
        assert_eq!(validate_password("longenough", PasswordPolicy::SignUp), Ok(()));
    }

    #[test]
    fn name_must_not_be_blank() {
        assert_eq!(validate_name(" "), Err(ValidationError::Required("Name")));
        assert_eq!(validate_name("Ada"), Ok(()));
    }
}
