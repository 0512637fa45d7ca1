pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod services;
pub mod state;

// Dioxus hooks
pub mod hooks;
