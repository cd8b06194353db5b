//! Home page: hero banner plus the searchable tool grid.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::tools_section::ToolsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="pt-16">
            <Hero/>
            <ToolsSection/>
        </div>
    }
}
