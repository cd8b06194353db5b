//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-100 dark:bg-gray-800 py-6 px-4 sm:px-6 md:px-10 lg:px-16 text-center text-xs text-gray-600 dark:text-gray-400">
            <p>"© 2025 AI Tools Hub. All rights reserved."</p>
        </footer>
    }
}
