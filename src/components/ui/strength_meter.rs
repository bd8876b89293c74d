//! Three-bar password strength meter driven by the scoring in
//! `features::auth::strength`.

use crate::features::auth::strength::Strength;
use leptos::prelude::*;

fn bar_class(strength: Strength, index: u8) -> &'static str {
    if index >= strength.bars() {
        return "h-1 flex-1 rounded bg-gray-200 dark:bg-gray-700";
    }
    match strength {
        Strength::Weak => "h-1 flex-1 rounded bg-red-500",
        Strength::Medium => "h-1 flex-1 rounded bg-amber-500",
        _ => "h-1 flex-1 rounded bg-emerald-500",
    }
}

#[component]
pub fn StrengthMeter(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let strength = Signal::derive(move || Strength::of(&password.get()));

    view! {
        <div class="mt-2">
            <div class="flex gap-1">
                {(0u8..3)
                    .map(|index| {
                        view! { <div class=move || bar_class(strength.get(), index)></div> }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                {move || strength.get().label()}
            </p>
        </div>
    }
}
