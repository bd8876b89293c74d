//! Per-step validation policy and the selection types the wizard collects.
//! Step 1 requires a profile (one user type, at least one work type), step 2
//! requires at least one tool, step 3 is entirely optional.

use crate::app_lib::ValidationError;

/// Number of wizard screens.
pub const TOTAL_STEPS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserType {
    Designer,
    Developer,
    ProductManager,
    Other,
}

impl UserType {
    pub const ALL: [UserType; 4] = [
        UserType::Designer,
        UserType::Developer,
        UserType::ProductManager,
        UserType::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            UserType::Designer => "designer",
            UserType::Developer => "developer",
            UserType::ProductManager => "product-manager",
            UserType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Designer => "Designer",
            UserType::Developer => "Developer",
            UserType::ProductManager => "Product manager",
            UserType::Other => "Something else",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkType {
    UiDesign,
    WebDevelopment,
    Branding,
    Prototyping,
}

impl WorkType {
    pub const ALL: [WorkType; 4] = [
        WorkType::UiDesign,
        WorkType::WebDevelopment,
        WorkType::Branding,
        WorkType::Prototyping,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            WorkType::UiDesign => "ui-design",
            WorkType::WebDevelopment => "web-development",
            WorkType::Branding => "branding",
            WorkType::Prototyping => "prototyping",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkType::UiDesign => "UI & UX design",
            WorkType::WebDevelopment => "Web development",
            WorkType::Branding => "Branding",
            WorkType::Prototyping => "Prototyping",
        }
    }
}

/// Team size options on the final, optional step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamSize {
    Solo,
    Small,
    Medium,
    Large,
}

impl TeamSize {
    pub const ALL: [TeamSize; 4] = [
        TeamSize::Solo,
        TeamSize::Small,
        TeamSize::Medium,
        TeamSize::Large,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TeamSize::Solo => "Just me",
            TeamSize::Small => "2-10",
            TeamSize::Medium => "11-50",
            TeamSize::Large => "50+",
        }
    }
}

/// Snapshot of the selections the continue button needs to judge.
#[derive(Clone, Debug, Default)]
pub struct StepInput<'a> {
    pub user_type: Option<UserType>,
    pub work_types: &'a [WorkType],
    pub selected_tools: usize,
}

/// Validates the given 1-indexed step. Unknown steps pass, mirroring the
/// wizard's bounds being enforced elsewhere.
pub fn validate_step(step: usize, input: &StepInput<'_>) -> Result<(), ValidationError> {
    match step {
        1 => {
            if input.user_type.is_none() {
                return Err(ValidationError::NoSelection("what best describes you"));
            }
            if input.work_types.is_empty() {
                return Err(ValidationError::NoSelection("at least one type of work"));
            }
            Ok(())
        }
        2 => {
            if input.selected_tools == 0 {
                return Err(ValidationError::NoSelection("at least one tool"));
            }
            Ok(())
        }
        // Step 3 has no required fields.
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_one_requires_a_user_type_first() {
        let input = StepInput {
            user_type: None,
            work_types: &[WorkType::UiDesign],
            selected_tools: 0,
        };
        assert_eq!(
            validate_step(1, &input),
            Err(ValidationError::NoSelection("what best describes you"))
        );
    }

    #[test]
    fn step_one_requires_at_least_one_work_type() {
        let input = StepInput {
            user_type: Some(UserType::Designer),
            work_types: &[],
            selected_tools: 0,
        };
        assert_eq!(
            validate_step(1, &input),
            Err(ValidationError::NoSelection("at least one type of work"))
        );
    }

    #[test]
    fn step_one_passes_with_a_full_profile() {
        let input = StepInput {
            user_type: Some(UserType::Developer),
            work_types: &[WorkType::WebDevelopment, WorkType::Prototyping],
            selected_tools: 0,
        };
        assert_eq!(validate_step(1, &input), Ok(()));
    }

    #[test]
    fn step_two_requires_a_tool() {
        let empty = StepInput {
            user_type: Some(UserType::Designer),
            work_types: &[WorkType::UiDesign],
            selected_tools: 0,
        };
        assert_eq!(
            validate_step(2, &empty),
            Err(ValidationError::NoSelection("at least one tool"))
        );

        let one_tool = StepInput {
            selected_tools: 1,
            ..empty
        };
        assert_eq!(validate_step(2, &one_tool), Ok(()));
    }

    #[test]
    fn step_three_always_passes() {
        assert_eq!(validate_step(3, &StepInput::default()), Ok(()));
    }

    #[test]
    fn option_ids_are_unique() {
        for (index, user_type) in UserType::ALL.iter().enumerate() {
            for other in &UserType::ALL[index + 1..] {
                assert_ne!(user_type.id(), other.id());
            }
        }
        for (index, work_type) in WorkType::ALL.iter().enumerate() {
            for other in &WorkType::ALL[index + 1..] {
                assert_ne!(work_type.id(), other.id());
            }
        }
    }
}
