//! Step counter for the onboarding wizard. Steps are 1-indexed and bounded
//! by the total fixed at construction; the counter can never leave that
//! range. Completion is terminal: the page reacts to it by navigating away.

/// Result of asking the wizard to move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step.
    Advanced,
    /// Already on the last step; the flow is done.
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wizard {
    current: usize,
    total: usize,
}

impl Wizard {
    /// Starts at step 1. `total` must be at least 1.
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Progress bar width for the current step.
    pub fn progress_percent(&self) -> f64 {
        (self.current as f64 / self.total as f64) * 100.0
    }

    /// Moves forward one step, or reports completion on the last step.
    /// Callers validate the current step before asking.
    pub fn advance(&mut self) -> Advance {
        if self.current < self.total {
            self.current += 1;
            Advance::Advanced
        } else {
            Advance::Completed
        }
    }

    /// Moves back one step, floored at step 1. Never requires validation.
    pub fn back(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_step_one() {
        let wizard = Wizard::new(3);
        assert_eq!(wizard.current(), 1);
        assert_eq!(wizard.total(), 3);
        assert!(wizard.is_first());
        assert!(!wizard.is_last());
    }

    #[test]
    fn advances_to_the_last_step_then_completes() {
        let mut wizard = Wizard::new(3);
        assert_eq!(wizard.advance(), Advance::Advanced);
        assert_eq!(wizard.advance(), Advance::Advanced);
        assert!(wizard.is_last());

        assert_eq!(wizard.advance(), Advance::Completed);
        assert_eq!(wizard.current(), 3, "completion must not move the counter");
    }

    #[test]
    fn back_is_floored_at_step_one() {
        let mut wizard = Wizard::new(3);
        wizard.back();
        assert_eq!(wizard.current(), 1);

        wizard.advance();
        wizard.back();
        assert_eq!(wizard.current(), 1);
    }

    #[test]
    fn current_stays_within_bounds_under_any_sequence() {
        let mut wizard = Wizard::new(3);
        for _ in 0..10 {
            wizard.advance();
            assert!(wizard.current() >= 1 && wizard.current() <= wizard.total());
        }
        for _ in 0..10 {
            wizard.back();
            assert!(wizard.current() >= 1 && wizard.current() <= wizard.total());
        }
    }

    #[test]
    fn progress_tracks_the_step_index() {
        let mut wizard = Wizard::new(3);
        assert_eq!(wizard.progress_percent(), 1.0 / 3.0 * 100.0);
        wizard.advance();
        assert_eq!(wizard.progress_percent(), 2.0 / 3.0 * 100.0);
        wizard.advance();
        assert_eq!(wizard.progress_percent(), 100.0);
    }

    #[test]
    fn a_single_step_wizard_completes_immediately() {
        let mut wizard = Wizard::new(1);
        assert!(wizard.is_first() && wizard.is_last());
        assert_eq!(wizard.advance(), Advance::Completed);
    }
}
