//! Static about page.

use leptos::prelude::*;

use crate::components::page_wrapper::PageWrapper;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageWrapper>
            <section class="py-10">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-6 text-center">
                    "About AI Tools Hub 😜"
                </h1>
                <div class="bg-white dark:bg-gray-800 p-6 rounded-md shadow-sm border border-gray-200 dark:border-gray-700">
                    <p class="text-gray-700 dark:text-gray-300 mb-4">
                        "Welcome to AI Tools Hub, your one-stop shop for the coolest AI tools on the planet! 🚀 We're here to make your life easier, funnier, and smarter with cutting-edge AI solutions."
                    </p>
                    <p class="text-gray-700 dark:text-gray-300 mb-4">
                        "From chatbots that sass back to image generators that turn your doodles into masterpieces, we've got it all. Our mission? To sprinkle a bit of AI magic into your daily grind! ✨"
                    </p>
                    <p class="text-gray-700 dark:text-gray-300">
                        "We're constantly updating our hub with the latest and greatest tools. Stick around, and let's geek out together! 🐒"
                    </p>
                </div>
            </section>
        </PageWrapper>
    }
}
