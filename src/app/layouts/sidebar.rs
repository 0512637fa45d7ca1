use dioxus::prelude::*;

use crate::domain::models::{MENU_ITEMS, MenuItem, NavIcon};
use crate::shared::constants::SIDEBAR_ID;
use crate::shared::hooks::DashboardShell;

/// Navigation chrome: brand, menu entries and the logout button
#[component]
pub fn Sidebar(shell: DashboardShell, brand: String, on_logout: EventHandler<MouseEvent>) -> Element {
    let sidebar_class = if shell.is_sidebar_open() {
        "c-sidebar c-sidebar--open"
    } else {
        "c-sidebar"
    };

    rsx! {
        div { id: SIDEBAR_ID, class: "{sidebar_class}",
            div { class: "c-sidebar__header",
                h2 { class: "c-sidebar__brand", "{brand}" }
            }
            nav { class: "c-sidebar__nav",
                for item in MENU_ITEMS.iter() {
                    NavEntry { key: "{item.key()}", item: *item, shell }
                }
            }
            button {
                class: "c-sidebar__logout",
                onclick: move |evt| on_logout.call(evt),
                span { class: "c-sidebar__icon", "{NavIcon::Logout.glyph()}" }
                "Logout"
            }
        }
    }
}

#[component]
fn NavEntry(item: MenuItem, shell: DashboardShell) -> Element {
    let mut shell = shell;
    let icon = item.icon().glyph();
    let label = item.label();

    match item {
        MenuItem::Leaf { href, .. } => rsx! {
            Link { to: href, class: "c-sidebar__link",
                span { class: "c-sidebar__icon", "{icon}" }
                "{label}"
            }
        },
        MenuItem::Group { key, sub_items, .. } => {
            let open = shell.is_dropdown_open(key);
            let chevron = if open { NavIcon::ChevronUp } else { NavIcon::ChevronDown };

            rsx! {
                div { class: "c-sidebar__group",
                    button {
                        class: "c-sidebar__link c-sidebar__link--group",
                        aria_expanded: "{open}",
                        onclick: move |_| shell.toggle_dropdown(key),
                        span { class: "c-sidebar__label",
                            span { class: "c-sidebar__icon", "{icon}" }
                            "{label}"
                        }
                        span { class: "c-sidebar__chevron", "{chevron.glyph()}" }
                    }
                    if open {
                        div { class: "c-sidebar__submenu",
                            for sub in sub_items.iter() {
                                Link { key: "{sub.href}", to: sub.href, class: "c-sidebar__sublink",
                                    "{sub.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
