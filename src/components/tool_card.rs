//! Card for a single catalog tool.
//!
//! Live tools render an outbound link that records a click-history entry;
//! coming-soon tools render a button that opens the shared modal and never
//! touch history.

use leptos::prelude::*;

use crate::catalog::{Badge, Tool};
use crate::state::history::{HistoryEntry, HistoryStore};
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;
use crate::util::time;

#[component]
pub fn ToolCard(tool: &'static Tool) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let badge = tool.badge.label().map(|label| {
        let class = if tool.badge == Badge::Recommended {
            "text-[10px] font-semibold text-yellow-600 border-yellow-600 border rounded px-1 select-none"
        } else {
            "text-[10px] font-semibold text-red-600 border-red-600 border rounded px-1 select-none"
        };
        view! { <span class=class>{label}</span> }
    });

    let action = match tool.link() {
        Some(url) => {
            let record_click = move |_| {
                HistoryStore::new(BrowserStorage).record(HistoryEntry {
                    name: tool.name.to_owned(),
                    url: url.to_owned(),
                    icon: tool.icon.to_owned(),
                    timestamp: time::now_iso(),
                });
            };
            view! {
                <a
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-xs text-blue-600 hover:underline"
                    on:click=record_click
                >
                    "Get Tool"
                </a>
            }
            .into_any()
        }
        None => view! {
            <button
                class="text-xs text-blue-600 hover:underline"
                on:click=move |_| ui.update(|u| u.coming_soon_open = true)
            >
                "Get Tool"
            </button>
        }
        .into_any(),
    };

    view! {
        <article class="tool-card border border-gray-200 dark:border-gray-700 rounded-md p-4 flex flex-col gap-2 shadow-sm bg-white dark:bg-gray-800">
            <i class=format!("{} w-6 h-6 text-gray-700 dark:text-gray-300", tool.icon)></i>
            <h3 class="font-bold text-sm text-gray-900 dark:text-white flex items-center gap-2">
                {tool.name}
                {badge}
            </h3>
            <p class="text-xs text-gray-500 dark:text-gray-400 leading-tight">
                {tool.description}
            </p>
            {action}
        </article>
    }
}
