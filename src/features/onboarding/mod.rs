//! Onboarding feature module: the step state machine, the per-step
//! validation policy with its selection types, and the tool catalog rendered
//! on step two. The route holds selections in signals and asks this module
//! whether the wizard may move; answers are pure so they can be unit-tested
//! without a DOM.

pub(crate) mod steps;
pub(crate) mod tools;
pub(crate) mod wizard;
