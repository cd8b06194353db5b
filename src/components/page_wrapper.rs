//! Shared page shell: offsets content below the fixed header.

use leptos::prelude::*;

/// Wraps page content in a centered column below the fixed header.
#[component]
pub fn PageWrapper(children: Children) -> impl IntoView {
    view! {
        <main class="relative pt-24 px-4 max-w-4xl mx-auto bg-white dark:bg-gray-900">
            {children()}
        </main>
    }
}
