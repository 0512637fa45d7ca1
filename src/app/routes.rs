use dioxus::prelude::*;

use crate::app::pages::{Dashboard, Landing, NotFound, Settings};
use crate::shared::config::AppConfig;
use crate::shared::services::default_store;

const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Sign-in lives outside this app; unauthenticated users land here
    #[route("/")]
    Landing {},

    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/settings")]
    Settings {},

    // Menu targets without a page yet, and anything else
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppConfig::from_env);
    use_context_provider(default_store);

    use_effect(|| {
        tracing::info!("Falcon Panel initialized");
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        Router::<Route> {}
    }
}
