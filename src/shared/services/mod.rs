// Shared services
pub mod api_service;
pub mod storage;

pub use api_service::{ApiService, UserApi};
pub use storage::{KeyValueStore, MemoryStore, SharedStore, default_store};
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
