//! StudioFlow web frontend.
//!
//! A client-side rendered Leptos app covering the public marketing page, the
//! sign-in and sign-up forms, and the onboarding wizard. Authentication is
//! simulated on the client: forms validate locally, wait a fixed delay, and
//! then route into onboarding. Nothing is persisted across page loads.

mod app;
#[path = "lib/mod.rs"]
mod app_lib;
mod components;
mod features;
mod routes;

pub use app::App;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    leptos::prelude::mount_to_body(App);
}
