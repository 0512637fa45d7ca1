use dioxus::prelude::*;

use crate::shared::config::AppConfig;
use crate::shared::services::SharedStore;

/// Configuration provided by the root `App`
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Token store provided by the root `App`
pub fn use_key_value_store() -> SharedStore {
    use_context::<SharedStore>()
}
