//! Onboarding wizard route.
//!
//! Three screens: profile (user type + work types), tools, workspace
//! preferences. The continue button validates the current step before the
//! wizard moves; the back button never validates. Finishing the last step
//! navigates to the dashboard. All selections live in signals and are
//! discarded on navigation.

use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::Theme;
use crate::components::{
    Alert, AlertKind, AppShell, Button, ChoiceCard, ProgressBar, ToggleButton,
};
use crate::features::onboarding::steps::{
    StepInput, TOTAL_STEPS, TeamSize, UserType, WorkType, validate_step,
};
use crate::features::onboarding::tools::CATALOG;
use crate::features::onboarding::wizard::{Advance, Wizard};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// How long a validation banner stays on screen.
const BANNER_DISMISS_MS: u32 = 5_000;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let navigate = use_navigate();
    let wizard = RwSignal::new(Wizard::new(TOTAL_STEPS));
    let user_type = RwSignal::new(None::<UserType>);
    let work_types = RwSignal::new(Vec::<WorkType>::new());
    let selected_tools = RwSignal::new(Vec::<&'static str>::new());
    let team_size = RwSignal::new(None::<TeamSize>);
    let workspace_name = RwSignal::new(String::new());
    let (banner, set_banner) = signal::<Option<String>>(None);

    let show_banner = move |message: String| {
        set_banner.set(Some(message));
        Timeout::new(BANNER_DISMISS_MS, move || set_banner.set(None)).forget();
    };

    let on_continue = move |_| {
        let work_selection = work_types.get_untracked();
        let input = StepInput {
            user_type: user_type.get_untracked(),
            work_types: &work_selection,
            selected_tools: selected_tools.get_untracked().len(),
        };
        let mut next = wizard.get_untracked();
        if let Err(error) = validate_step(next.current(), &input) {
            show_banner(error.to_string());
            return;
        }

        match next.advance() {
            Advance::Completed => {
                let config = AppConfig::load();
                navigate(&config.dashboard_path, Default::default());
            }
            Advance::Advanced => {
                wizard.set(next);
                scroll_to_top();
            }
        }
    };

    let on_back = move |_| {
        let mut previous = wizard.get_untracked();
        previous.back();
        wizard.set(previous);
        scroll_to_top();
    };

    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto">
                <div class="mb-8">
                    <ProgressBar percent=Signal::derive(move || wizard.get().progress_percent()) />
                    <p class="mt-2 text-xs text-gray-500 dark:text-gray-400">
                        {move || format!("Step {} of {}", wizard.get().current(), wizard.get().total())}
                    </p>
                </div>

                {move || match wizard.get().current() {
                    1 => view! { <StepProfile user_type=user_type work_types=work_types /> }.into_any(),
                    2 => view! { <StepTools selected_tools=selected_tools /> }.into_any(),
                    _ => {
                        view! { <StepWorkspace team_size=team_size workspace_name=workspace_name /> }
                            .into_any()
                    }
                }}

                {move || {
                    banner
                        .get()
                        .map(|message| {
                            view! {
                                <div class="my-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}

                <div class="mt-8 flex items-center justify-between">
                    <button
                        type="button"
                        class="text-sm font-medium text-gray-500 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white"
                        class:hidden=move || wizard.get().is_first()
                        on:click=on_back
                    >
                        "Back"
                    </button>
                    <Button on:click=on_continue>
                        {move || if wizard.get().is_last() { "Get Started" } else { "Continue" }}
                    </Button>
                </div>
            </div>
        </AppShell>
    }
}

#[component]
fn StepProfile(
    user_type: RwSignal<Option<UserType>>,
    work_types: RwSignal<Vec<WorkType>>,
) -> impl IntoView {
    view! {
        <section class=Theme::CARD>
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                "Tell us about yourself"
            </h2>
            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                "This shapes the templates you'll see first."
            </p>

            <fieldset class="mt-6">
                <legend class=Theme::LABEL>"What best describes you?"</legend>
                <div class="grid gap-3 sm:grid-cols-2">
                    {UserType::ALL
                        .iter()
                        .map(|&option| {
                            view! {
                                <ChoiceCard
                                    input_type="radio"
                                    name="user-type"
                                    value=option.id()
                                    selected=Signal::derive(move || user_type.get() == Some(option))
                                    on_toggle=Callback::new(move |()| user_type.set(Some(option)))
                                >
                                    <span class="text-sm font-medium text-gray-900 dark:text-white">
                                        {option.label()}
                                    </span>
                                </ChoiceCard>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </fieldset>

            <fieldset class="mt-6">
                <legend class=Theme::LABEL>"What kind of work do you do?"</legend>
                <div class="grid gap-3 sm:grid-cols-2">
                    {WorkType::ALL
                        .iter()
                        .map(|&option| {
                            view! {
                                <ChoiceCard
                                    input_type="checkbox"
                                    name="work-type"
                                    value=option.id()
                                    selected=Signal::derive(move || work_types.get().contains(&option))
                                    on_toggle=Callback::new(move |()| toggle_work(work_types, option))
                                >
                                    <span class="text-sm font-medium text-gray-900 dark:text-white">
                                        {option.label()}
                                    </span>
                                </ChoiceCard>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </fieldset>
        </section>
    }
}

#[component]
fn StepTools(selected_tools: RwSignal<Vec<&'static str>>) -> impl IntoView {
    view! {
        <section class=Theme::CARD>
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                "Which tools do you use?"
            </h2>
            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                "Pick at least one; integrations come pre-wired."
            </p>
            <div class="mt-6 grid grid-cols-2 gap-3 sm:grid-cols-3">
                {CATALOG
                    .iter()
                    .map(|tool| {
                        let id = tool.id;
                        view! {
                            <ChoiceCard
                                input_type="checkbox"
                                name="tools"
                                value=id
                                selected=Signal::derive(move || {
                                    selected_tools.get().iter().any(|selected| *selected == id)
                                })
                                on_toggle=Callback::new(move |()| toggle_tool(selected_tools, id))
                            >
                                <div class="text-2xl" aria-hidden="true">{tool.icon}</div>
                                <div class="mt-1 text-sm font-medium text-gray-900 dark:text-white">
                                    {tool.name}
                                </div>
                            </ChoiceCard>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn StepWorkspace(
    team_size: RwSignal<Option<TeamSize>>,
    workspace_name: RwSignal<String>,
) -> impl IntoView {
    view! {
        <section class=Theme::CARD>
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                "Set up your workspace"
            </h2>
            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                "Everything here is optional; you can change it later in settings."
            </p>

            <div class="mt-6">
                <span class=Theme::LABEL>"How big is your team?"</span>
                <div class="flex flex-wrap gap-2">
                    {TeamSize::ALL
                        .iter()
                        .map(|&option| {
                            view! {
                                <ToggleButton
                                    active=Signal::derive(move || team_size.get() == Some(option))
                                    on_select=Callback::new(move |()| team_size.set(Some(option)))
                                >
                                    {option.label()}
                                </ToggleButton>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="mt-6">
                <label class=Theme::LABEL for="workspace-name">
                    "Workspace name"
                </label>
                <input
                    id="workspace-name"
                    type="text"
                    class=Theme::INPUT
                    placeholder="e.g. Northwind Studio"
                    on:input=move |event| workspace_name.set(event_target_value(&event))
                />
            </div>
        </section>
    }
}

fn toggle_work(work_types: RwSignal<Vec<WorkType>>, option: WorkType) {
    work_types.update(|selected| {
        if let Some(index) = selected.iter().position(|current| *current == option) {
            selected.remove(index);
        } else {
            selected.push(option);
        }
    });
}

fn toggle_tool(selected_tools: RwSignal<Vec<&'static str>>, id: &'static str) {
    selected_tools.update(|selected| {
        if let Some(index) = selected.iter().position(|current| *current == id) {
            selected.remove(index);
        } else {
            selected.push(id);
        }
    });
}

/// Each step change restarts at the top of the page.
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
