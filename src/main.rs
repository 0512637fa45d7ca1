//! Falcon Panel - Main Entry Point

use falcon_panel::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Falcon Panel - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Initialize tracing BEFORE dioxus::launch
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();

    tracing::info!("Starting Falcon Panel...");
    dioxus::launch(App);
}
