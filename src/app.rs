mod demo;
mod developer;
mod grid_hero;
mod home;
mod hooks;
mod progress_lines;
mod slide_content;
mod slide_deck;
mod social;
mod terminal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::Theme;

use demo::SlidesDemoPage;
use developer::{DeveloperPage, DeveloperV2Page, DeveloperV3Page};
use home::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(RwSignal::new(Theme::default()));

    view! {
        <Title formatter=|title| format!("Benjamin Hu - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/developer") view=DeveloperPage />
                <Route path=path!("/developerv2") view=DeveloperV2Page />
                <Route path=path!("/developerv3") view=DeveloperV3Page />
                <Route path=path!("/slides") view=SlidesDemoPage />
            </Routes>
        </Router>
    }
}

/// Fades a page in on mount
#[component]
fn PageTransition(children: Children) -> impl IntoView {
    view! { <div class="animate-fade-in">{children()}</div> }
}
