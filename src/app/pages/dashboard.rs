use dioxus::prelude::*;

use crate::app::components::{LoadingText, PageHeader};
use crate::app::layouts::DashboardLayout;
use crate::app::routes::Route;
use crate::domain::models::UserProfile;
use crate::shared::hooks::use_dashboard_session;
use crate::shared::logging::log_navigation;
use crate::shared::state::DashboardPhase;

/// Authenticated landing page of the panel.
///
/// Renders a loading placeholder until the session resolves, then either the
/// layout with the user's profile or a redirect to the root.
#[component]
pub fn Dashboard() -> Element {
    let phase = use_dashboard_session();

    use_effect(move || {
        if phase.read().is_redirecting() {
            let target = Route::Landing {};
            log_navigation(&target.to_string());
            navigator().push(target);
        }
    });

    rsx! {
        DashboardView { phase: phase() }
    }
}

/// The layout is only mounted once a profile is available
#[component]
fn DashboardView(phase: DashboardPhase) -> Element {
    match phase {
        DashboardPhase::Authenticated(user) => rsx! {
            DashboardLayout {
                DashboardContent { user }
            }
        },
        DashboardPhase::Loading | DashboardPhase::Redirecting => rsx! {
            LoadingText { message: "Loading..." }
        },
    }
}

#[component]
pub fn DashboardContent(user: UserProfile) -> Element {
    rsx! {
        PageHeader { title: "Welcome to your Dashboard",
            p { class: "c-page__text", "Email: {user.email}" }
        }
    }
}
