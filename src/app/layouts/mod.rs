pub mod dashboard_layout;
pub mod sidebar;

pub use dashboard_layout::DashboardLayout;
pub use sidebar::Sidebar;
