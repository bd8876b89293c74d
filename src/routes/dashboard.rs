//! Post-onboarding landing page. Intentionally minimal during early
//! development.

use crate::components::{Alert, AlertKind, AppShell};
use leptos::prelude::*;

/// Renders the dashboard page shell.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Your workspace"</h1>
            <div class="mt-4 max-w-lg">
                <Alert
                    kind=AlertKind::Info
                    message="You're all set. Projects you create will show up here.".to_string()
                />
            </div>
        </AppShell>
    }
}
