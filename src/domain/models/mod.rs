// Falcon Panel models
pub mod menu;
pub mod user;

pub use menu::{MENU_ITEMS, MenuItem, NavIcon, SubItem};
pub use user::UserProfile;
