mod dashboard;
mod landing;
mod not_found;
mod onboarding;
mod sign_in;
mod sign_up;

pub(crate) use dashboard::DashboardPage;
pub(crate) use landing::LandingPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use onboarding::OnboardingPage;
pub(crate) use sign_in::SignInPage;
pub(crate) use sign_up::SignUpPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths, kept in one place so navigation and links cannot drift.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const SIGN_IN: &str = "/sign-in";
    pub const SIGN_UP: &str = "/sign-up";
    pub const ONBOARDING: &str = "/onboarding";
    pub const DASHBOARD: &str = "/dashboard";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/sign-in") view=SignInPage />
            <Route path=path!("/sign-up") view=SignUpPage />
            <Route path=path!("/onboarding") view=OnboardingPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
