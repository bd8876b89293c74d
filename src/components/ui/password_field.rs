//! Password input with a visibility toggle. The toggle flips the input type
//! between `password` and `text` and its own label between "Show" and
//! "Hide". Extra children (popup bubble, strength meter) render inside the
//! relative wrapper so they can anchor to the input.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    value: RwSignal<String>,
    #[prop(optional, into, default = Signal::from(false))] invalid: Signal<bool>,
    #[prop(optional, into)] on_blur: Option<Callback<()>>,
    #[prop(optional, into)] on_focus: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="mb-5">
            <label class=Theme::LABEL for=id>{label}</label>
            <div class="relative">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    class=Theme::INPUT
                    class=("border-red-500", move || invalid.get())
                    autocomplete=autocomplete.unwrap_or("current-password")
                    on:input=move |event| value.set(event_target_value(&event))
                    on:blur=move |_| {
                        if let Some(callback) = on_blur {
                            callback.run(());
                        }
                    }
                    on:focus=move |_| {
                        if let Some(callback) = on_focus {
                            callback.run(());
                        }
                    }
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 px-3 text-sm font-medium text-gray-500 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white"
                    on:click=move |_| set_visible.update(|visible| *visible = !*visible)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
                {children.map(|children| children())}
            </div>
        </div>
    }
}
