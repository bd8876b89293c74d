//! Auth feature module covering form validation, password strength scoring,
//! the simulated sign-in round trip, and the in-memory session flag.
//!
//! Flow Overview: the sign-in and sign-up routes validate locally through
//! [`validate`], then run [`simulate::authenticate`] and mark the session
//! signed in before navigating into onboarding. There is no server and no
//! credential ever leaves the page.

pub(crate) mod simulate;
pub(crate) mod state;
pub(crate) mod strength;
pub(crate) mod validate;
