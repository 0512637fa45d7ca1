// Public API exports
pub mod domain;
pub mod shared;

// Dioxus UI: routes, layout shell and pages
pub mod app;
