//! Tool click history page: read, render, clear.

use leptos::prelude::*;

use crate::components::page_wrapper::PageWrapper;
use crate::state::history::{HistoryEntry, HistoryStore};
use crate::util::storage::BrowserStorage;
use crate::util::time;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let entries = RwSignal::new(Vec::<HistoryEntry>::new());

    // Load from storage on the client; effects never run during SSR.
    Effect::new(move || {
        entries.set(HistoryStore::new(BrowserStorage).list());
    });

    let clear = move |_| {
        HistoryStore::new(BrowserStorage).clear();
        entries.set(Vec::new());
    };

    view! {
        <PageWrapper>
            <div class="p-4 md:p-8">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white">
                        "Tool Click History"
                    </h2>
                    <Show when=move || !entries.get().is_empty()>
                        <button
                            class="bg-red-500 text-white px-3 py-1 text-sm rounded hover:bg-red-600"
                            on:click=clear
                        >
                            "Clear History"
                        </button>
                    </Show>
                </div>

                <Show
                    when=move || !entries.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-gray-500 dark:text-gray-400">"No history found."</p>
                        }
                    }
                >
                    <ul class="space-y-3">
                        {move || {
                            entries
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    let when = time::format_timestamp(&entry.timestamp);
                                    view! {
                                        <li class="border dark:border-gray-700 p-3 rounded-md bg-white dark:bg-gray-800 flex items-center gap-3">
                                            <i class=format!("{} text-lg text-blue-600", entry.icon)></i>
                                            <div class="flex-1">
                                                <a
                                                    href=entry.url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-blue-600 hover:underline text-sm font-medium"
                                                >
                                                    {entry.name}
                                                </a>
                                                <div class="text-xs text-gray-500 dark:text-gray-400">
                                                    {when}
                                                </div>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </div>
        </PageWrapper>
    }
}
