//! Password-reset page reached from the emailed link.
//!
//! The reset token arrives as a `?token=` query parameter. After a
//! successful reset the page shows the server confirmation for a few
//! seconds, then routes back to the login form.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::state::forms::{ResetErrors, ResetForm};

const REDIRECT_DELAY_MS: u32 = 3_000;

fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full px-4 py-3 border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 border-red-300 bg-red-50"
    } else {
        "w-full px-4 py-3 border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 border-gray-300"
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let token = Memo::new(move |_| query.read().get("token").unwrap_or_default());

    let form = RwSignal::new(ResetForm::default());
    let errors = RwSignal::new(ResetErrors::default());
    let general = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let validation = current.validate();
        errors.set(validation);
        if !validation.is_empty() {
            return;
        }
        let reset_token = token.get_untracked();
        if reset_token.is_empty() {
            general.set(Some("Reset link is invalid or expired".to_owned()));
            return;
        }
        general.set(None);
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::reset_password(&reset_token, &current.password, &current.confirm_password)
                    .await
                {
                    Ok(message) => {
                        success.set(Some(message));
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate("/login", Default::default());
                    }
                    Err(message) => {
                        general.set(Some(message));
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#f7f6fb] to-[#f0eff7] dark:from-gray-900 dark:to-gray-800 flex items-center justify-center px-4 pt-16">
            <div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
                <div class="text-center mb-8">
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white">
                        "Choose a New Password"
                    </h2>
                    <p class="text-gray-600 dark:text-gray-400 text-sm mt-2">
                        "Enter a new password for your account"
                    </p>
                </div>

                <form on:submit=submit class="space-y-6">
                    {move || {
                        success
                            .get()
                            .map(|message| {
                                view! {
                                    <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded-md text-sm">
                                        {message} " Redirecting to login..."
                                    </div>
                                }
                            })
                    }}
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
                            for="password"
                            class="block text-sm font-semibold text-gray-700 dark:text-gray-300 mb-2"
                        >
                            "New Password"
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
                            "Confirm New Password"
                        </label>
                        <input
                            type="password"
                            id="confirm-password"
                            placeholder="Repeat the new password"
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
                        {move || if loading.get() { "Resetting..." } else { "Reset Password" }}
                    </button>
                </form>

                <div class="mt-6 text-center">
                    <p class="text-sm text-gray-600 dark:text-gray-400">
                        "Remembered it after all? "
                        <a href="/login" class="text-blue-600 hover:underline font-semibold">
                            "Back to login"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
