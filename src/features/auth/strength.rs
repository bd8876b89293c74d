//! Password strength scoring for the sign-up meter. The score is a coarse
//! 0..=3 hint, not a security guarantee; the only hard rule is the minimum
//! length enforced by validation.

/// Scores a password 0..=3: one point each for length >= 8, mixed upper and
/// lower case, and a digit or symbol.
pub fn score(password: &str) -> u8 {
    let mut score = 0;

    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
    {
        score += 1;
    }
    if password
        .chars()
        .any(|c| c.is_ascii_digit() || !c.is_ascii_alphanumeric())
    {
        score += 1;
    }

    score
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    None,
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn of(password: &str) -> Self {
        match score(password) {
            0 => Strength::None,
            1 => Strength::Weak,
            2 => Strength::Medium,
            _ => Strength::Strong,
        }
    }

    /// Number of meter bars to tint.
    pub fn bars(&self) -> u8 {
        match self {
            Strength::None => 0,
            Strength::Weak => 1,
            Strength::Medium => 2,
            Strength::Strong => 3,
        }
    }

    /// Label under the meter; empty until the user has typed something scoreable.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::None => "",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero_with_no_label() {
        assert_eq!(score(""), 0);
        assert_eq!(Strength::of(""), Strength::None);
        assert_eq!(Strength::None.label(), "");
    }

    #[test]
    fn each_criterion_adds_one_point() {
        // Length only.
        assert_eq!(score("aaaaaaaa"), 1);
        // Mixed case only.
        assert_eq!(score("Aa"), 1);
        // Digit only.
        assert_eq!(score("1"), 1);
        // Symbol counts like a digit.
        assert_eq!(score("!"), 1);
    }

    #[test]
    fn score_is_monotonic_in_the_criteria() {
        let short_lower = "abc";
        let long_lower = "abcdefgh";
        let long_mixed = "Abcdefgh";
        let long_mixed_digit = "Abcdef12";

        assert!(score(short_lower) <= score(long_lower));
        assert!(score(long_lower) <= score(long_mixed));
        assert!(score(long_mixed) <= score(long_mixed_digit));
    }

    #[test]
    fn labels_track_the_score() {
        assert_eq!(Strength::of("aaaaaaaa").label(), "Weak");
        assert_eq!(Strength::of("Abcdefgh").label(), "Medium");
        assert_eq!(Strength::of("Abcdef12").label(), "Strong");
    }

    #[test]
    fn reference_password_is_strong() {
        assert_eq!(score("Abcdef12"), 3);
        assert_eq!(Strength::of("Abcdef12"), Strength::Strong);
        assert_eq!(Strength::of("Abcdef12").bars(), 3);
    }
}
