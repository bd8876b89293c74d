//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup and the mobile menu toggle so routes can focus
//! on content. The nav swaps between auth links and the dashboard link based
//! on the in-memory session flag.

use crate::app_lib::build_info;
use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let session = use_session();

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href={paths::HOME}
                        {..}
                        class="flex items-center space-x-2"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-xl" aria-hidden="true">"◳"</span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "StudioFlow"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        "☰"
                    </button>
                    <nav
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="flex flex-col gap-2 p-4 mt-2 md:mt-0 md:flex-row md:items-center md:gap-6 md:p-0">
                            {move || {
                                if session.is_signed_in.get() {
                                    view! {
                                        <li>
                                            <A
                                                href={paths::DASHBOARD}
                                                {..}
                                                class="text-sm font-medium text-gray-700 hover:text-blue-700 dark:text-gray-300 dark:hover:text-white"
                                            >
                                                "Dashboard"
                                            </A>
                                        </li>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <li class="flex flex-col gap-2 md:flex-row md:items-center md:gap-6">
                                            <A
                                                href={paths::SIGN_IN}
                                                {..}
                                                class="text-sm font-medium text-gray-700 hover:text-blue-700 dark:text-gray-300 dark:hover:text-white"
                                            >
                                                "Sign in"
                                            </A>
                                            <A
                                                href={paths::SIGN_UP}
                                                {..}
                                                class="inline-block rounded-lg bg-blue-700 px-4 py-2 text-sm font-medium text-white hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                                            >
                                                "Get started"
                                            </A>
                                        </li>
                                    }
                                        .into_any()
                                }
                            }}
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1 max-w-screen-xl w-full mx-auto px-4 py-8">{children()}</main>
            <footer class="border-t border-gray-200 py-4 text-center text-xs text-gray-400 dark:border-gray-700 dark:text-gray-500">
                {format!("StudioFlow · build {}", short_hash(build_info::git_commit_hash()))}
            </footer>
        </div>
    }
}

fn short_hash(hash: &str) -> &str {
    if hash.len() > 7 { &hash[..7] } else { hash }
}
