// Custom Dioxus hooks
pub mod use_app_context;
pub mod use_dashboard_session;
pub mod use_dashboard_shell;
pub mod use_outside_click;

pub use use_app_context::{use_app_config, use_key_value_store};
pub use use_dashboard_session::use_dashboard_session;
pub use use_dashboard_shell::{use_dashboard_shell, DashboardShell};
pub use use_outside_click::use_outside_click;
