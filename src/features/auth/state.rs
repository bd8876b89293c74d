//! In-memory session flag shared through Leptos context. The flag is set by
//! the simulated auth flow and read by the shell to pick its navigation
//! links. Nothing is hydrated or persisted: a reload starts anonymous again.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    signed_in: RwSignal<bool>,
    pub is_signed_in: Signal<bool>,
}

impl SessionContext {
    fn new() -> Self {
        let signed_in = RwSignal::new(false);
        let is_signed_in = Signal::derive(move || signed_in.get());
        Self {
            signed_in,
            is_signed_in,
        }
    }

    /// Marks the session signed in after a simulated auth round trip.
    pub fn mark_signed_in(&self) {
        self.signed_in.set(true);
    }
}

/// Provides the session context for the whole app.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::new());

    view! { {children()} }
}

/// Returns the current session context or a fallback anonymous context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::new)
}
