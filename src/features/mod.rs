//! Domain-level frontend features (auth, onboarding) and their shared logic.
//! Routes import these modules to keep view code focused while the rules that
//! gate navigation live in dedicated, unit-tested feature areas.

pub(crate) mod auth;
pub(crate) mod onboarding;
