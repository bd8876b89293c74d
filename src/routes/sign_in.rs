use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::Theme;
use crate::components::{AppShell, Button, FieldPopup, PasswordField, Spinner};
use crate::features::auth::simulate;
use crate::features::auth::state::use_session;
use crate::features::auth::validate::{PasswordPolicy, validate_email, validate_password};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
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

    let check_email = move || {
        set_email_error.set(
            validate_email(&email.get_untracked())
                .err()
                .map(|err| err.to_string()),
        );
    };
    let check_password = move || {
        set_password_error.set(
            validate_password(&password.get_untracked(), PasswordPolicy::SignIn)
                .err()
                .map(|err| err.to_string()),
        );
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        check_email();
        check_password();

        if email_error.get_untracked().is_none() && password_error.get_untracked().is_none() {
            auth_action.dispatch(());
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Welcome back"
                </h1>
                <div class="mb-5">
                    <label class=Theme::LABEL for="email">
                        "Your email"
                    </label>
                    <div class="relative">
                        <input
                            id="email"
                            type="email"
                            class=Theme::INPUT
                            class=("border-red-500", move || email_error.get().is_some())
                            autocomplete="email"
                            placeholder="name@studio.im"
                            on:input=move |event| email.set(event_target_value(&event))
                            on:blur=move |_| check_email()
                            on:focus=move |_| set_email_error.set(None)
                        />
                        <FieldPopup message=email_error />
                    </div>
                </div>
                <PasswordField
                    id="password"
                    label="Your password"
                    autocomplete="current-password"
                    value=password
                    invalid=Signal::derive(move || password_error.get().is_some())
                    on_blur=Callback::new(move |()| check_password())
                    on_focus=Callback::new(move |()| set_password_error.set(None))
                >
                    <FieldPopup message=password_error />
                </PasswordField>
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
                            view! { <span>"Sign in"</span> }.into_any()
                        }
                    }}
                </Button>
                <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                    "New to StudioFlow? "
                    <A href={paths::SIGN_UP} {..} class="text-blue-700 hover:underline dark:text-blue-400">
                        "Create an account"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
