use dioxus::prelude::*;

use crate::app::components::PageHeader;
use crate::app::layouts::DashboardLayout;

#[component]
pub fn Settings() -> Element {
    rsx! {
        DashboardLayout {
            SettingsContent {}
        }
    }
}

#[component]
pub fn SettingsContent() -> Element {
    rsx! {
        PageHeader { title: "Settings",
            p { class: "c-page__text c-page__text--muted", "Account and workspace settings will appear here." }
        }
    }
}
