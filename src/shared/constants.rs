// Backend
pub const DEFAULT_API_BASE_URL: &str = "http://0.0.0.0:3232";
pub const CURRENT_USER_ENDPOINT: &str = "/api/v1/auth/users/me";

// Environment overrides (native builds only)
pub const API_BASE_URL_ENV: &str = "FALCON_API_BASE_URL";
pub const TOKEN_KEY_ENV: &str = "FALCON_TOKEN_KEY";

// Client-side storage
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

// Routing
pub const ROOT_PATH: &str = "/";

// Branding
pub const BRAND_NAME: &str = "Falcon Panel";

// DOM ids used by the outside-click listener
pub const SIDEBAR_ID: &str = "falcon-sidebar";
pub const SIDEBAR_TOGGLE_ID: &str = "falcon-sidebar-toggle";
