//! Home page hero banner with a time-of-day greeting for signed-in
//! visitors.

use leptos::prelude::*;

use crate::state::session::Session;
use crate::util::time;

#[component]
pub fn Hero() -> impl IntoView {
    let session = expect_context::<RwSignal<Option<Session>>>();

    let greeting = move || {
        session.get().map(|s| {
            format!(
                "{}, {}! Explore our curated AI tools below.",
                time::greeting_for_hour(time::current_hour()),
                s.email,
            )
        })
    };

    view! {
        <section class="px-4 sm:px-6 md:px-10 lg:px-16 py-14 text-center bg-gray-50 dark:bg-gray-800">
            <h1 class="text-5xl sm:text-6xl font-extrabold text-gray-900 dark:text-white mb-6 leading-tight">
                "Welcome to " <span class="text-red-600">"AI Tools Hub"</span>
            </h1>

            {move || {
                greeting()
                    .map(|text| {
                        view! {
                            <p class="text-xl text-gray-700 dark:text-gray-300 mb-4 font-semibold">
                                {text}
                            </p>
                        }
                    })
            }}

            <p class="text-lg text-gray-600 dark:text-gray-400 mb-8 max-w-xl mx-auto">
                "Discover powerful, curated AI tools to boost your productivity and creativity."
            </p>

            <a
                href="#tools"
                class="inline-block bg-red-600 hover:bg-red-700 text-white font-semibold py-3 px-6 rounded-xl shadow"
            >
                "🚀 Explore Tools"
            </a>
        </section>
    }
}
