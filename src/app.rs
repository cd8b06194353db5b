//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::coming_soon_modal::ComingSoonModal;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::{
    about::AboutPage, contact::ContactPage, history::HistoryPage, home::HomePage,
    login::LoginPage, reset_password::ResetPasswordPage, signup::SignupPage,
};
use crate::state::session::{Session, SessionStore};
use crate::state::tools::ToolsState;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-[#f7f6fb] dark:bg-gray-900">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(None::<Session>);
    let ui = RwSignal::new(UiState::default());
    let tools = RwSignal::new(ToolsState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(tools);

    // Restore the persisted session and theme once on the client. Effects
    // never run during SSR, so server output stays storage-free.
    Effect::new(move || {
        session.set(SessionStore::new(BrowserStorage).load());

        let dark = dark_mode::read_preference(&BrowserStorage);
        dark_mode::apply(dark);
        ui.update(|state| state.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ai-tools-hub.css"/>
        <Title text="AI Tools Hub"/>

        <Router>
            <Header/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
            </Routes>
            <Footer/>
            <ComingSoonModal/>
        </Router>
    }
}
