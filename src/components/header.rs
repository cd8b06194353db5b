//! Fixed site header: category navigation, ALL TOOLS dropdown, dark mode
//! toggle, auth controls, responsive mobile menu, and the back-to-top
//! button.
//!
//! Category buttons scroll to the matching `[data-category]` section when
//! already on the home route; from any other route they navigate home first
//! and scroll after a short delay so the section exists. The dropdown
//! closes on outside click (backdrop), Escape, or a delay after
//! mouse-leave.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::catalog::data::{MENU_LINKS, NAV_LINKS};
use crate::state::session::{Session, SessionStore};
use crate::state::ui::{
    BACK_TO_TOP_THRESHOLD, DROPDOWN_CLOSE_DELAY_MS, SCROLL_AFTER_NAV_DELAY_MS, UiState,
};
use crate::util::storage::BrowserStorage;
use crate::util::{browser, dark_mode};

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Option<Session>>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let location = use_location();

    // Generation counter for the delayed dropdown close; bumping it cancels
    // any close already scheduled.
    let close_generation = RwSignal::new(0u32);

    let cancel_close = move || close_generation.update(|g| *g += 1);

    let close_with_delay = move || {
        close_generation.update(|g| *g += 1);
        #[cfg(feature = "hydrate")]
        {
            let scheduled = close_generation.get_untracked();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DROPDOWN_CLOSE_DELAY_MS).await;
                if close_generation.get_untracked() == scheduled {
                    ui.update(|u| u.dropdown_open = false);
                }
            });
        }
    };

    let go_to_category = Callback::new(move |category_id: &'static str| {
        ui.update(UiState::close_menus);
        if location.pathname.get_untracked() == "/" {
            browser::scroll_to_category(category_id);
        } else {
            navigate("/", NavigateOptions::default());
            #[cfg(feature = "hydrate")]
            {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(SCROLL_AFTER_NAV_DELAY_MS).await;
                    browser::scroll_to_category(category_id);
                });
            }
        }
    });

    let toggle_theme = move |_| {
        let next = dark_mode::toggle(&BrowserStorage, ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let logout = move |_| {
        SessionStore::new(BrowserStorage).clear();
        session.set(None);
        browser::reload();
    };

    // Back-to-top visibility tracks the scroll position; Escape closes the
    // dropdown and mobile menu.
    #[cfg(feature = "hydrate")]
    {
        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = browser::scroll_y();
            ui.update(|u| u.back_to_top_visible = y > BACK_TO_TOP_THRESHOLD);
        });
        let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ui.update(UiState::close_menus);
            }
        });
        on_cleanup(move || {
            scroll_handle.remove();
            key_handle.remove();
        });
    }

    let theme_icon = move || {
        if ui.get().dark_mode { "fas fa-moon" } else { "fas fa-sun" }
    };

    view! {
        <div>
            <header class="fixed top-0 left-0 w-full border-b border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-700 z-50">
                <nav class="flex items-center justify-between px-4 sm:px-6 md:px-10 lg:px-5 h-16">
                    <a
                        href="/"
                        class="flex items-center text-xl font-extrabold text-red-600 dark:text-red-400"
                        on:click=move |_| browser::scroll_to_top()
                    >
                        <i class="fas fa-bolt mr-2"></i>
                        " AI Tools Hub"
                    </a>

                    // Desktop nav
                    <ul class="hidden sm:flex items-center space-x-4 text-sm">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let id = link.id;
                                view! {
                                    <li>
                                        <button
                                            class="flex items-center hover:text-blue-600 dark:hover:text-blue-400"
                                            on:click=move |_| go_to_category.run(id)
                                        >
                                            {link.name}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <li>
                            <a href="/about" class="hover:text-blue-600 dark:hover:text-blue-400">
                                "ABOUT"
                            </a>
                        </li>
                        <li>
                            <a href="/contact" class="hover:text-blue-600 dark:hover:text-blue-400">
                                "CONTACT"
                            </a>
                        </li>
                        <li class="relative">
                            <button
                                class="flex items-center gap-1 hover:text-blue-600 dark:hover:text-blue-400"
                                on:click=move |_| ui.update(|u| u.dropdown_open = !u.dropdown_open)
                                on:mouseenter=move |_| cancel_close()
                                on:mouseleave=move |_| close_with_delay()
                            >
                                <i class="fas fa-tools mr-1"></i>
                                " ALL TOOLS "
                                <i class="fas fa-caret-down text-[10px]"></i>
                            </button>
                            <Show when=move || ui.get().dropdown_open>
                                // Backdrop catches outside clicks.
                                <div
                                    class="fixed inset-0 z-40"
                                    on:click=move |_| ui.update(|u| u.dropdown_open = false)
                                ></div>
                                <ul
                                    class="absolute right-0 bg-white dark:bg-gray-800 shadow-lg rounded-md mt-2 py-2 w-48 z-50 text-xs"
                                    on:mouseenter=move |_| cancel_close()
                                    on:mouseleave=move |_| close_with_delay()
                                >
                                    {MENU_LINKS
                                        .iter()
                                        .map(|link| {
                                            let id = link.id;
                                            view! {
                                                <li>
                                                    <button
                                                        class="block px-4 py-2 hover:bg-gray-100 dark:hover:bg-gray-700 w-full text-left text-gray-800 dark:text-white"
                                                        on:click=move |_| go_to_category.run(id)
                                                    >
                                                        {link.name}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </Show>
                        </li>
                    </ul>

                    // Right options
                    <div class="hidden sm:flex items-center space-x-4 text-xs font-normal">
                        <button
                            class="text-yellow-400 dark:text-gray-200"
                            title="Toggle Dark Mode"
                            on:click=toggle_theme
                        >
                            <i class=theme_icon></i>
                        </button>
                        <Show
                            when=move || session.get().is_some()
                            fallback=|| {
                                view! {
                                    <a href="/login" class="hover:text-blue-600 dark:hover:text-blue-400">
                                        <i class="fas fa-sign-in-alt mr-1"></i>
                                        " Login"
                                    </a>
                                    <a
                                        href="/signup"
                                        class="bg-red-600 hover:bg-red-700 text-white px-3 py-1 rounded-md flex items-center"
                                    >
                                        <i class="fas fa-user-plus mr-1"></i>
                                        " Sign up"
                                    </a>
                                }
                            }
                        >
                            <a href="/history" class="hover:text-blue-600 dark:hover:text-blue-400">
                                <i class="fas fa-clock-rotate-left mr-1"></i>
                                " History"
                            </a>
                            <button
                                class="hover:text-blue-600 dark:hover:text-blue-400"
                                on:click=logout
                            >
                                <i class="fas fa-sign-out-alt mr-1"></i>
                                " Logout"
                            </button>
                        </Show>
                    </div>

                    // Mobile menu toggle
                    <div class="sm:hidden">
                        <button
                            class="hover:text-blue-600 dark:hover:text-blue-400"
                            on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
                        >
                            <i class=move || {
                                if ui.get().mobile_menu_open {
                                    "fas fa-times text-xl"
                                } else {
                                    "fas fa-bars text-xl"
                                }
                            }></i>
                        </button>
                    </div>
                </nav>

                // Mobile menu
                <Show when=move || ui.get().mobile_menu_open>
                    <div class="sm:hidden px-4 py-4 text-sm bg-white dark:bg-gray-800 space-y-3">
                        {MENU_LINKS
                            .iter()
                            .take(7)
                            .map(|link| {
                                let id = link.id;
                                view! {
                                    <button
                                        class="block hover:text-blue-600 dark:hover:text-blue-400"
                                        on:click=move |_| go_to_category.run(id)
                                    >
                                        {link.name}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <a
                            href="/about"
                            class="block hover:text-blue-600 dark:hover:text-blue-400"
                            on:click=move |_| ui.update(UiState::close_menus)
                        >
                            "About"
                        </a>
                        <a
                            href="/contact"
                            class="block hover:text-blue-600 dark:hover:text-blue-400"
                            on:click=move |_| ui.update(UiState::close_menus)
                        >
                            "Contact"
                        </a>
                        <details>
                            <summary class="cursor-pointer flex items-center gap-1 select-none">
                                <i class="fas fa-tools mr-1"></i>
                                " All Tools"
                            </summary>
                            <ul class="ml-4 mt-2 space-y-1">
                                {MENU_LINKS
                                    .iter()
                                    .map(|link| {
                                        let id = link.id;
                                        view! {
                                            <li>
                                                <button
                                                    class="block hover:text-blue-600 dark:hover:text-blue-400 w-full text-left"
                                                    on:click=move |_| go_to_category.run(id)
                                                >
                                                    {link.name}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </details>

                        <div class="pt-2 border-t border-gray-300 dark:border-gray-600 flex items-center justify-between">
                            <button class="text-yellow-400 dark:text-gray-200" on:click=toggle_theme>
                                <i class=theme_icon></i>
                                " Mode"
                            </button>
                            <Show
                                when=move || session.get().is_some()
                                fallback=move || {
                                    view! {
                                        <div class="flex gap-4">
                                            <a
                                                href="/login"
                                                class="hover:text-blue-600 dark:hover:text-blue-400"
                                                on:click=move |_| ui.update(UiState::close_menus)
                                            >
                                                "Login"
                                            </a>
                                            <a
                                                href="/signup"
                                                class="text-red-600 hover:text-red-700"
                                                on:click=move |_| ui.update(UiState::close_menus)
                                            >
                                                "Sign up"
                                            </a>
                                        </div>
                                    }
                                }
                            >
                                <button
                                    class="hover:text-blue-600 dark:hover:text-blue-400"
                                    on:click=logout
                                >
                                    "Logout"
                                </button>
                            </Show>
                        </div>
                    </div>
                </Show>
            </header>

            // Back to top
            <Show when=move || ui.get().back_to_top_visible>
                <button
                    class="fixed bottom-6 right-6 bg-red-600 text-white p-3 rounded-full shadow-lg hover:bg-red-700 z-50"
                    title="Back to Top 🚀"
                    on:click=move |_| browser::scroll_to_top()
                >
                    <i class="fas fa-rocket text-lg"></i>
                </button>
            </Show>
        </div>
    }
}
