mod contact;
mod header;
mod homepage;
mod projects;
mod resume;
mod trackers;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::PageConfig;
use crate::content;
use homepage::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=SitePage />
            </Routes>
        </Router>
    }
}

/// Loads the embedded catalog and hands it to the page with the build-time
/// variant overrides applied.
#[component]
fn SitePage() -> impl IntoView {
    match content::site() {
        Ok(site) => {
            let config: PageConfig = site.page.clone().with_build_overrides();
            view! {
                <Title text=site.profile.full_name() />
                <PortfolioPage config site />
            }
            .into_any()
        }
        Err(e) => {
            log::error!("{e}");
            view! {
                <Title text="Portfolio" />
                <main class="min-h-screen flex items-center justify-center">
                    <p class="text-red-400">"Site content is unavailable."</p>
                </main>
            }
            .into_any()
        }
    }
}
