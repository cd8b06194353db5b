//! Static contact page.

use leptos::prelude::*;

use crate::components::page_wrapper::PageWrapper;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageWrapper>
            <section class="py-10">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-6 text-center">
                    "Contact Us 📬"
                </h1>
                <div class="bg-white dark:bg-gray-800 p-6 rounded-md shadow-sm border border-gray-200 dark:border-gray-700">
                    <p class="text-gray-700 dark:text-gray-300 mb-4">
                        "Got a question, suggestion, or just wanna chat about AI? We're all ears... or rather, all pixels! 😎"
                    </p>
                    <p class="text-gray-700 dark:text-gray-300 mb-4">
                        "Drop us a line at "
                        <a href="mailto:support@aitoolshub.com" class="text-blue-600 hover:underline">
                            "support@aitoolshub.com"
                        </a>
                        " and we'll get back to you faster than an AI can generate a meme! 🚀"
                    </p>
                    <ul class="list-disc pl-6 text-gray-700 dark:text-gray-300">
                        <li>
                            <a href="#" class="text-blue-600 hover:underline">
                                "Twitter: @AIToolsHub 😜"
                            </a>
                        </li>
                        <li>
                            <a href="#" class="text-blue-600 hover:underline">
                                "GitHub: AIToolsHub 🐱"
                            </a>
                        </li>
                    </ul>
                </div>
            </section>
        </PageWrapper>
    }
}
