//! Searchable, filterable tool grid for the home page.

use leptos::prelude::*;

use crate::catalog::{self, data};
use crate::components::tool_card::ToolCard;
use crate::state::tools::ToolsState;

#[component]
pub fn ToolsSection() -> impl IntoView {
    let tools = expect_context::<RwSignal<ToolsState>>();

    let matches = move || tools.get().matches();

    view! {
        <section
            id="tools"
            class="px-4 sm:px-6 md:px-10 lg:px-16 py-8 max-w-7xl mx-auto bg-white dark:bg-gray-900"
        >
            <div class="mb-8 flex flex-col sm:flex-row gap-4 items-center">
                <div class="flex w-full sm:w-auto">
                    <input
                        type="text"
                        placeholder="Search tools..."
                        aria-label="Search tools"
                        class="w-full sm:w-64 px-4 py-2 text-sm border border-gray-300 dark:border-gray-700 bg-white dark:bg-gray-800 text-black dark:text-white rounded-l-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        prop:value=move || tools.get().query
                        on:input=move |ev| {
                            tools.update(|t| t.set_query(&event_target_value(&ev)));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                tools.update(ToolsState::submit_search);
                            }
                        }
                    />
                    <button
                        class="px-4 py-2 text-sm font-semibold text-white bg-blue-600 rounded-r-md hover:bg-blue-700"
                        aria-label="Search button"
                        on:click=move |_| tools.update(ToolsState::submit_search)
                    >
                        "Search"
                    </button>
                </div>
                <div class="flex flex-wrap gap-2">
                    {data::FILTER_BUTTONS
                        .iter()
                        .map(|button| {
                            let id = button.id;
                            let active = move || tools.get().active_filter == id;
                            view! {
                                <button
                                    class=move || {
                                        if active() {
                                            "px-3 py-1 text-xs font-semibold rounded-md bg-blue-500 text-white"
                                        } else {
                                            "px-3 py-1 text-xs font-semibold rounded-md bg-gray-200 dark:bg-gray-800 dark:text-white hover:bg-gray-300 dark:hover:bg-gray-700"
                                        }
                                    }
                                    aria-pressed=move || active().to_string()
                                    on:click=move |_| tools.update(|t| t.select_filter(id))
                                >
                                    {button.name}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <Show when=move || matches().is_empty()>
                <div class="text-center text-gray-500 dark:text-gray-400 py-10 text-sm">
                    "No tools found matching your search."
                </div>
            </Show>

            {move || {
                matches()
                    .into_iter()
                    .map(|m| {
                        let category = m.category;
                        let heading_class = format!(
                            "text-xl font-bold mb-4 flex items-center gap-2 text-{}",
                            catalog::category_color(category.id),
                        );
                        let icon_class = format!(
                            "fas {} text-{}",
                            catalog::category_icon(category.id),
                            catalog::category_color(category.id),
                        );
                        view! {
                            <div class="category-section mb-8" data-category=category.id>
                                <h2 class=heading_class>
                                    <i class=icon_class></i>
                                    {category.name}
                                </h2>
                                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4">
                                    {m.tools
                                        .into_iter()
                                        .map(|tool| view! { <ToolCard tool=tool/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}
