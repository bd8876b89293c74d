//! Popup bubble anchored below an input. The parent wrapper must be
//! `relative`; the bubble appears while a message is set and disappears when
//! the field regains focus and the message is cleared.

use leptos::prelude::*;

#[component]
pub fn FieldPopup(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div
            class="absolute left-0 top-full z-10 mt-1 rounded-lg bg-red-600 px-3 py-1.5 text-xs text-white shadow-md"
            class:hidden=move || message.get().is_none()
            role="alert"
        >
            {move || message.get().unwrap_or_default()}
        </div>
    }
}
