//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-8xl font-black text-gray-100 dark:text-gray-800 select-none">
                    "404"
                </h1>
                <p class="text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</p>
                <p class="mt-4 max-w-sm text-gray-500 dark:text-gray-400">
                    "The page you requested doesn't exist. It may have moved, or the link is stale."
                </p>
                <div class="mt-6 flex flex-col sm:flex-row items-center gap-4">
                    <A
                        href={paths::HOME}
                        {..}
                        class="inline-flex items-center rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                    >
                        "Go home"
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center rounded-lg border border-gray-300 px-5 py-2.5 text-sm font-medium text-gray-700 hover:bg-gray-100 dark:border-gray-600 dark:text-gray-300 dark:hover:bg-gray-800"
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Ok(history) = window.history() {
                                    let _ = history.back();
                                }
                            }
                        }
                    >
                        "Go back"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
