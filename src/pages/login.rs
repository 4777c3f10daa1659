//! Login Page
//!
//! Login and registration surface. Validation runs before any network call;
//! a successful login persists the session and navigates to the workspace
//! after a short grace period so the user sees the confirmation.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::session::{self, RegistrationForm, Session};
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (show_register, set_show_register) = create_signal(false);

    // Already logged in? Verify the stored token and skip the form.
    {
        let navigate = navigate.clone();
        create_effect(move |_| {
            if let Some(stored) = session::load_session() {
                let navigate = navigate.clone();
                spawn_local(async move {
                    if api::verify_session(stored.token()).await {
                        navigate("/", Default::default());
                    } else {
                        session::clear_session();
                    }
                });
            }
        });
    }

    let state_for_submit = state.clone();
    let navigate_for_submit = navigate;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();

        // Pre-flight check; failures never reach the network
        if let Err(e) = session::validate_credentials(&user, &pass) {
            state_for_submit.show_error(&e.to_string());
            return;
        }

        set_submitting.set(true);

        let state = state_for_submit.clone();
        let navigate = navigate_for_submit.clone();
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(response) => match Session::new(response.access_token, response.user) {
                    Some(session) => {
                        session::store_session(&session);
                        state.session.set(Some(session));
                        state.show_success("Login successful! Redirecting...");

                        // Grace period so the confirmation is visible
                        gloo_timers::callback::Timeout::new(1_000, move || {
                            navigate("/", Default::default());
                        })
                        .forget();
                    }
                    None => state.show_error("Login failed"),
                },
                Err(e) => state.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex items-center justify-center px-4">
            <div class="w-full max-w-md space-y-6">
                // Brand
                <div class="text-center">
                    <div class="text-5xl mb-2">"🏢"</div>
                    <h1 class="text-3xl font-bold">"ERP Console"</h1>
                    <p class="text-gray-400 mt-1">"Sign in to your workspace"</p>
                </div>

                <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors flex items-center justify-center space-x-2"
                    >
                        {move || if submitting.get() {
                            view! {
                                <div class="loading-spinner w-5 h-5" />
                                <span>"Signing in..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Sign In"</span>
                            }.into_view()
                        }}
                    </button>

                    // Demo credentials hint
                    <div class="bg-gray-700/50 rounded-lg p-3 text-sm text-gray-400">
                        <strong class="text-gray-300">"Demo credentials:"</strong>
                        <br/>
                        "Username: admin@erp.com"
                        <br/>
                        "Password: admin123"
                    </div>
                </form>

                // Registration toggle
                <div class="text-center text-sm text-gray-400">
                    "No account? "
                    <button
                        on:click=move |_| set_show_register.set(true)
                        class="text-primary-400 hover:text-primary-300 font-medium"
                    >
                        "Create one"
                    </button>
                </div>

                {move || {
                    if show_register.get() {
                        view! {
                            <RegisterPanel on_close=move || set_show_register.set(false) />
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// Registration form panel. Closes and resets on success; never auto-logs-in.
#[component]
fn RegisterPanel(on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (full_name, set_full_name) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = RegistrationForm {
            username: username.get(),
            email: email.get(),
            full_name: full_name.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };

        if let Err(e) = form.validate() {
            state.show_error(&e.to_string());
            return;
        }

        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            match api::register(&form).await {
                Ok(()) => {
                    state.show_success("Account created successfully! Please log in.");
                    set_username.set(String::new());
                    set_email.set(String::new());
                    set_full_name.set(String::new());
                    set_password.set(String::new());
                    set_confirm.set(String::new());
                    on_close();
                }
                Err(e) => state.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold">"Create Account"</h2>
                <button
                    type="button"
                    on:click=move |_| on_close()
                    class="text-gray-400 hover:text-white"
                >
                    "×"
                </button>
            </div>

            <RegisterField label="Username" kind="text" value=username set_value=set_username />
            <RegisterField label="Email" kind="email" value=email set_value=set_email />
            <RegisterField label="Full Name" kind="text" value=full_name set_value=set_full_name />
            <RegisterField label="Password" kind="password" value=password set_value=set_password />
            <RegisterField
                label="Confirm Password"
                kind="password"
                value=confirm
                set_value=set_confirm
            />

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if submitting.get() { "Creating..." } else { "Create Account" }}
            </button>
        </form>
    }
}

#[component]
fn RegisterField(
    label: &'static str,
    kind: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
