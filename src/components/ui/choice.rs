//! Clickable selection containers wrapping native inputs. The wrapped input
//! stays visually hidden but keeps its checked state in sync with the signal,
//! so the card, the input, and any form semantics always agree. Mutual
//! exclusivity for radio groups comes from the caller holding an `Option`
//! signal, not from clearing sibling classes.

use leptos::prelude::*;

/// Card that selects (radio) or toggles (checkbox) on click.
#[component]
pub fn ChoiceCard(
    /// `"radio"` or `"checkbox"`.
    input_type: &'static str,
    name: &'static str,
    value: &'static str,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="cursor-pointer rounded-lg border border-gray-200 p-4 transition-colors hover:border-blue-400 dark:border-gray-700 dark:hover:border-blue-500"
            class=("border-blue-600", move || selected.get())
            class=("bg-blue-50", move || selected.get())
            class=("dark:bg-blue-900/20", move || selected.get())
            on:click=move |_| on_toggle.run(())
        >
            <input
                type=input_type
                name=name
                value=value
                class="sr-only"
                tabindex="-1"
                prop:checked=move || selected.get()
            />
            {children()}
        </div>
    }
}

/// Pill button for mutually exclusive toggle groups.
#[component]
pub fn ToggleButton(
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_select: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="rounded-full border border-gray-300 px-4 py-1.5 text-sm text-gray-700 transition-colors hover:border-blue-400 dark:border-gray-600 dark:text-gray-300"
            class=("border-blue-600", move || active.get())
            class=("bg-blue-600", move || active.get())
            class=("text-white", move || active.get())
            on:click=move |_| on_select.run(())
        >
            {children()}
        </button>
    }
}
