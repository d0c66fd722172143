//! Root application component and browser entry point.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::AppConfig;
use crate::pages::post::PostPage;
use crate::state::post::PostProvider;

/// Page heading and document title.
pub const HEADING: &str = "Salve pra firma";

/// Root application component.
///
/// Provides the config and the post state scope, then renders the page.
#[component]
pub fn App(#[prop(optional)] config: AppConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text=HEADING/>

        <PostProvider>
            <main class="is-flex is-flex-direction-column is-align-items-center is-justify-content-start">
                <h1 class="title is-1 is-dark mb-6">{HEADING}</h1>
                <PostPage/>
            </main>
        </PostProvider>
    }
}

/// Install browser logging and mount `App` on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = AppConfig::from_location().unwrap_or_else(|e| {
        leptos::logging::warn!("{e}; using default config");
        AppConfig::default()
    });
    log::debug!("api latency: {:?}", config.api_latency);

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
