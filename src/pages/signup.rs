//! Signup page. Same shape as the login page with a username field and a
//! confirm-password field.

use leptos::prelude::*;

use crate::net::api;
use crate::state::forms::{SignupErrors, SignupForm};
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
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(SignupErrors::default());
    let general = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

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
                match api::signup(
                    &current.email,
                    &current.username,
                    &current.password,
                    &current.confirm_password,
                )
                .await
                {
                    Ok(resp) => {
                        let session = Session {
                            token: resp.token,
                            email: resp.email.unwrap_or(current.email),
                            username: resp.username.or(Some(current.username)),
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
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white">
                        "Create Account"
                    </h2>
                    <p class="text-gray-600 dark:text-gray-400 text-sm mt-2">
                        "Join the hub and start exploring AI tools"
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
                            for="username"
                            class="block text-sm font-semibold text-gray-700 dark:text-gray-300 mb-2"
                        >
                            "Username"
                        </label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Pick a username"
                            class=move || field_class(errors.get().username.is_some())
                            prop:value=move || form.get().username
                            on:input=move |ev| {
                                form.update(|f| f.username = event_target_value(&ev));
                                errors.update(|e| e.username = None);
                            }
                        />
                        {move || {
                            errors
                                .get()
                                .username
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
                            placeholder="At least 6 characters"
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

                    <div>
                        <label
                            for="confirm-password"
                            class="block text-sm font-semibold text-gray-700 dark:text-gray-300 mb-2"
                        >
                            "Confirm Password"
                        </label>
                        <input
                            type="password"
                            id="confirm-password"
                            placeholder="Repeat your password"
                            class=move || field_class(errors.get().confirm_password.is_some())
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| {
                                form.update(|f| f.confirm_password = event_target_value(&ev));
                                errors.update(|e| e.confirm_password = None);
                            }
                        />
                        {move || {
                            errors
                                .get()
                                .confirm_password
                                .map(|msg| view! { <p class="text-red-600 text-xs mt-1">{msg}</p> })
                        }}
                    </div>

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-blue-400 text-white font-semibold py-3 px-4 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    >
                        {move || if loading.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>

                <div class="mt-6 text-center">
                    <p class="text-sm text-gray-600 dark:text-gray-400">
                        "Already have an account? "
                        <a href="/login" class="text-blue-600 hover:underline font-semibold">
                            "Sign in here"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
