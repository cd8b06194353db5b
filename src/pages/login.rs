//! Login page with the embedded forgot-password modal.
//!
//! Validation runs entirely client-side before the single login request.
//! Success persists the session and forces a full reload onto the home
//! route; failure surfaces the server's error (or a generic fallback) in a
//! dismissible banner while the form stays editable.

use leptos::prelude::*;

use crate::net::api;
use crate::state::forms::{self, LoginErrors, LoginForm};
use crate::state::session::{Session, SessionStore};
use crate::util::browser;
use crate::util::storage::BrowserStorage;

fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full px-4 py-3 border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 border-red-300 bg-red-50"
    } else {
        "w-full px-4 py-3 border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 border-gray-300"
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(LoginErrors::default());
    let general = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let show_reset = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let validation = current.validate();
        errors.set(validation);
        if !validation.is_empty() {
            return;
        }
        general.set(None);
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::login(&current.email, &current.password).await {
                    Ok(resp) => {
                        let session = Session {
                            token: resp.token,
                            email: resp.email.unwrap_or(current.email),
                            username: resp.username,
                        };
                        SessionStore::new(BrowserStorage).save(&session);
                        browser::redirect_home();
                    }
                    Err(message) => {
                        general.set(Some(message));
                        loading.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#f7f6fb] to-[#f0eff7] dark:from-gray-900 dark:to-gray-800 flex items-center justify-center px-4 pt-16">
            <div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
                <div class="text-center mb-8">
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white">"Welcome Back"</h2>
                    <p class="text-gray-600 dark:text-gray-400 text-sm mt-2">
                        "Sign in to access your AI tools"
                    </p>
                </div>

                <form on:submit=submit class="space-y-6">
                    {move || {
                        general
                            .get()
                            .map(|message| {
                                view! {
                                    <div class="bg-red-50 border border-red-200 text-red-600 px-4 py-3 rounded-md text-sm flex justify-between items-center">
                                        <span>{message}</span>
                                        <button
                                            type="button"
                                            class="text-red-600 hover:text-red-800 ml-2"
                                            on:click=move |_| general.set(None)
                                        >
                                            <i class="fas fa-times"></i>
                                        </button>
                                    </div>
                                }
                            })
                    }}

                    <div>
                        <label
                            for="email"
                            class="block text-sm font-semibold text-gray-700 dark:text-gray-300 mb-2"
                        >
                            "Email Address"
                        </label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            class=move || field_class(errors.get().email.is_some())
                            prop:value=move || form.get().email
                            on:input=move |ev| {
                                form.update(|f| f.email = event_target_value(&ev));
                                errors.update(|e| e.email = None);
                            }
                        />
                        {move || {
                            errors
                                .get()
                                .email
                                .map(|msg| view! { <p class="text-red-600 text-xs mt-1">{msg}</p> })
                        }}
                    </div>

                    <div>
                        <label
                            for="password"
                            class="block text-sm font-semibold text-gray-700 dark:text-gray-300 mb-2"
                        >
                            "Password"
                        </label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            class=move || field_class(errors.get().password.is_some())
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                form.update(|f| f.password = event_target_value(&ev));
                                errors.update(|e| e.password = None);
                            }
                        />
                        {move || {
                            errors
                                .get()
                                .password
                                .map(|msg| view! { <p class="text-red-600 text-xs mt-1">{msg}</p> })
                        }}
                    </div>

                    <div class="flex items-center justify-end">
                        <button
                            type="button"
                            class="text-sm text-blue-600 hover:underline"
                            on:click=move |_| show_reset.set(true)
                        >
                            "Forgot password? 😅"
                        </button>
                    </div>

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-blue-400 text-white font-semibold py-3 px-4 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    >
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <ForgotPasswordModal show=show_reset/>

                <div class="mt-6 text-center">
                    <p class="text-sm text-gray-600 dark:text-gray-400">
                        "Don't have an account? "
                        <a href="/signup" class="text-blue-600 hover:underline font-semibold">
                            "Sign up here"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Modal for requesting a password-reset email.
#[component]
fn ForgotPasswordModal(show: RwSignal<bool>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked();
        if let Some(msg) = forms::validate_reset_email(&address) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);
        message.set(None);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::forgot_password(&address).await {
                    Ok(confirmation) => {
                        message.set(Some(confirmation));
                        email.set(String::new());
                    }
                    Err(failure) => error.set(Some(failure)),
                }
            });
        }
    };

    view! {
        <Show when=move || show.get()>
            <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
                <div class="bg-white dark:bg-gray-800 rounded-lg p-6 max-w-sm w-full">
                    <div class="flex justify-between items-center mb-4">
                        <h3 class="text-lg font-bold text-gray-900 dark:text-white">
                            "Reset Password 🚀"
                        </h3>
                        <button
                            class="text-gray-600 dark:text-gray-300 hover:text-gray-900"
                            on:click=move |_| show.set(false)
                        >
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                    <form on:submit=submit class="space-y-4">
                        {move || {
                            message
                                .get()
                                .map(|msg| view! { <p class="text-green-600 text-sm">{msg}</p> })
                        }}
                        {move || {
                            error
                                .get()
                                .map(|msg| view! { <p class="text-red-600 text-sm">{msg}</p> })
                        }}
                        <div>
                            <label
                                for="reset-email"
                                class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                            >
                                "Email"
                            </label>
                            <input
                                id="reset-email"
                                type="email"
                                placeholder="Enter your email"
                                class="w-full px-3 py-2 text-sm border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 border-gray-300"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full bg-blue-600 text-white text-sm font-semibold py-2 rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        >
                            "Send Reset Link 🪄"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
