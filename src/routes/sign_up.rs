//! Signup route. Validates name, email, and password locally on submit,
//! shows a live strength meter under the password field, and runs the same
//! simulated auth round trip as sign-in before moving into onboarding.

use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::Theme;
use crate::components::{AppShell, Button, PasswordField, Spinner, StrengthMeter};
use crate::features::auth::simulate;
use crate::features::auth::state::use_session;
use crate::features::auth::validate::{
    PasswordPolicy, validate_email, validate_name, validate_password,
};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (name_error, set_name_error) = signal::<Option<String>>(None);
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);

    let auth_action = Action::new_local(move |_: &()| async move {
        simulate::authenticate().await;
    });

    Effect::new(move |_| {
        if auth_action.value().get().is_some() {
            session.mark_signed_in();
            let config = AppConfig::load();
            navigate(&config.onboarding_path, Default::default());
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let name_result = validate_name(&name.get_untracked());
        let email_result = validate_email(&email.get_untracked());
        let password_result =
            validate_password(&password.get_untracked(), PasswordPolicy::SignUp);

        set_name_error.set(name_result.as_ref().err().map(ToString::to_string));
        set_email_error.set(email_result.as_ref().err().map(ToString::to_string));
        set_password_error.set(password_result.as_ref().err().map(ToString::to_string));

        if name_result.is_ok() && email_result.is_ok() && password_result.is_ok() {
            auth_action.dispatch(());
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Create your account"
                </h1>
                <div class="mb-5">
                    <label class=Theme::LABEL for="name">
                        "Your name"
                    </label>
                    <input
                        id="name"
                        type="text"
                        class=Theme::INPUT
                        class=("border-red-500", move || name_error.get().is_some())
                        autocomplete="name"
                        on:input=move |event| name.set(event_target_value(&event))
                    />
                    {move || {
                        name_error.get().map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })
                    }}
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="signup-email">
                        "Your email"
                    </label>
                    <input
                        id="signup-email"
                        type="email"
                        class=Theme::INPUT
                        class=("border-red-500", move || email_error.get().is_some())
                        autocomplete="email"
                        placeholder="name@studio.im"
                        on:input=move |event| email.set(event_target_value(&event))
                    />
                    {move || {
                        email_error.get().map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })
                    }}
                </div>
                <PasswordField
                    id="signup-password"
                    label="Choose a password"
                    autocomplete="new-password"
                    value=password
                    invalid=Signal::derive(move || password_error.get().is_some())
                >
                    <StrengthMeter password=password />
                </PasswordField>
                {move || {
                    password_error
                        .get()
                        .map(|message| view! { <p class="-mt-3 mb-4 text-sm text-red-600 dark:text-red-400">{message}</p> })
                }}
                <Button button_type="submit" disabled=auth_action.pending()>
                    {move || {
                        if auth_action.pending().get() {
                            view! {
                                <span class="inline-flex items-center justify-center gap-2">
                                    <Spinner />
                                    "Processing..."
                                </span>
                            }
                                .into_any()
                        } else {
                            view! { <span>"Create account"</span> }.into_any()
                        }
                    }}
                </Button>
                <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                    "Already have an account? "
                    <A href={paths::SIGN_IN} {..} class="text-blue-700 hover:underline dark:text-blue-400">
                        "Sign in"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
