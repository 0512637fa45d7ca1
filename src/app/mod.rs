pub mod components;
pub mod layouts;
pub mod pages;
pub mod routes;

// Re-export the Falcon Panel App
pub use routes::{App, Route};
