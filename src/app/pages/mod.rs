pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod settings;

pub use dashboard::{Dashboard, DashboardContent};
pub use landing::Landing;
pub use not_found::NotFound;
pub use settings::{Settings, SettingsContent};
