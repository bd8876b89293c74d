//! Public marketing page. Intentionally minimal: a hero and the calls to
//! action into the auth forms.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center py-16 text-center">
                <h1 class="max-w-2xl text-4xl font-bold text-gray-900 dark:text-white sm:text-5xl">
                    "One workspace for your whole creative flow"
                </h1>
                <p class="mt-4 max-w-xl text-gray-500 dark:text-gray-400">
                    "Bring your design tools, your team, and your work together. Free while in beta."
                </p>
                <div class="mt-8 flex flex-col gap-4 sm:flex-row">
                    <A
                        href={paths::SIGN_UP}
                        {..}
                        class="rounded-lg bg-blue-700 px-6 py-3 text-sm font-medium text-white hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                    >
                        "Create your account"
                    </A>
                    <A
                        href={paths::SIGN_IN}
                        {..}
                        class="rounded-lg border border-gray-300 px-6 py-3 text-sm font-medium text-gray-700 hover:bg-gray-100 dark:border-gray-600 dark:text-gray-300 dark:hover:bg-gray-800"
                    >
                        "Sign in"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
