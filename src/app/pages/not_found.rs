use dioxus::prelude::*;

use crate::app::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "c-landing",
            h1 { class: "c-landing__title", "Page not available" }
            p { class: "c-landing__text", "Nothing is published at {path} yet." }
            Link { to: Route::Dashboard {}, class: "c-button c-button--secondary",
                "Back to dashboard"
            }
        }
    }
}
