use dioxus::prelude::*;

use crate::app::layouts::Sidebar;
use crate::app::routes::Route;
use crate::domain::models::NavIcon;
use crate::shared::constants::SIDEBAR_TOGGLE_ID;
use crate::shared::hooks::{use_app_config, use_dashboard_shell, use_key_value_store, use_outside_click};
use crate::shared::logging::log_navigation;
use crate::shared::state::logout;

/// Sidebar shell wrapping every dashboard page.
///
/// On narrow viewports the sidebar slides in over a blurred overlay and is
/// driven by the edge toggle button; from 1024px up it is always visible and
/// the toggle and overlay are hidden by CSS.
#[component]
pub fn DashboardLayout(children: Element) -> Element {
    let config = use_app_config();
    let store = use_key_value_store();
    let mut shell = use_dashboard_shell();
    use_outside_click(shell);

    let brand = config.brand.clone();
    let handle_logout = move |_: MouseEvent| {
        logout(&*store, &config.token_key);
        let target = Route::Landing {};
        log_navigation(&target.to_string());
        navigator().push(target);
    };

    let open = shell.is_sidebar_open();
    let toggle_class = if open { "c-shell__toggle c-shell__toggle--open" } else { "c-shell__toggle" };
    let overlay_class = if open { "c-shell__overlay c-shell__overlay--visible" } else { "c-shell__overlay" };
    let chevron_class = if open { "c-shell__chevron c-shell__chevron--flipped" } else { "c-shell__chevron" };

    rsx! {
        div { class: "c-shell",
            button {
                id: SIDEBAR_TOGGLE_ID,
                class: "{toggle_class}",
                aria_label: "Toggle sidebar",
                onclick: move |_| shell.toggle_sidebar(),
                span { class: "{chevron_class}", "{NavIcon::ChevronRight.glyph()}" }
            }

            div {
                class: "{overlay_class}",
                onclick: move |_| shell.close_sidebar(),
            }

            Sidebar { shell, brand, on_logout: handle_logout }

            div { class: "c-shell__main",
                div { class: "c-shell__frame",
                    div { class: "c-shell__content",
                        {children}
                    }
                }
            }
        }
    }
}
