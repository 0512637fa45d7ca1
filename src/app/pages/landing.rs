use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::shared::hooks::use_app_config;

/// Root page. Sign-in is handled elsewhere; this only points at the dashboard.
#[component]
pub fn Landing() -> Element {
    let config = use_app_config();

    rsx! {
        div { class: "c-landing",
            h1 { class: "c-landing__title", "{config.brand}" }
            p { class: "c-landing__text", "Sign in to access your dashboard." }
            Link { to: Route::Dashboard {}, class: "c-button c-button--primary",
                "Go to dashboard"
            }
        }
    }
}
