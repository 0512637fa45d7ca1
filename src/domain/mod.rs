// Domain models (navigation + user profile)
// Pure Rust, no framework dependencies
pub mod models;
