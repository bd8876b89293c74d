use leptos::prelude::*;

/// Horizontal progress bar; `percent` is 0..=100.
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>) -> impl IntoView {
    view! {
        <div class="h-1.5 w-full overflow-hidden rounded-full bg-gray-200 dark:bg-gray-700">
            <div
                class="h-full rounded-full bg-blue-600 transition-all duration-300"
                style:width=move || format!("{}%", percent.get())
            ></div>
        </div>
    }
}
