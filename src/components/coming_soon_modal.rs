//! Modal shown when a visitor clicks a tool that is not live yet.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Coming-soon dialog. Backdrop click and the close button both dismiss it.
#[component]
pub fn ComingSoonModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move |_| ui.update(|u| u.coming_soon_open = false);

    view! {
        <Show when=move || ui.get().coming_soon_open>
            <div
                class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50"
                on:click=close
            >
                <div
                    class="bg-white dark:bg-gray-800 rounded-lg p-6 max-w-sm w-full text-center"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <h2 class="text-lg font-bold text-gray-900 dark:text-white mb-4">
                        "Coming Soon"
                    </h2>
                    <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">
                        "This tool is not available yet. Check back soon!"
                    </p>
                    <button
                        class="bg-blue-600 hover:bg-blue-700 text-white text-sm font-semibold px-4 py-2 rounded-md"
                        on:click=close
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
