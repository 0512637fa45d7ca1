use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Page title block used inside the dashboard frame
#[component]
pub fn PageHeader(title: String, children: Element) -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            {children}
        }
    }
}
