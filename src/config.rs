//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The API base path can be overridden at build time with `API_BASE_URL`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name appended to document titles.
pub const APP_NAME: &str = "AI Egg";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base path every API request is resolved against.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

/// Request timeout in milliseconds.
pub const REQUEST_TIMEOUT_MS: i32 = 10000;

/// Envelope `code` that marks a successful response.
pub const SUCCESS_CODE: i64 = 200;

/// HTTP status that signals an expired or missing session.
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Content type sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =============================================================================
// Persisted State
// =============================================================================

/// localStorage keys for durable client state.
pub mod storage_keys {
    /// Bearer token of the current session.
    pub const TOKEN: &str = "token";
    /// Selected interface language.
    pub const LOCALE: &str = "locale";
    /// Selected colour theme.
    pub const THEME: &str = "theme";
}

// =============================================================================
// Navigation
// =============================================================================

/// Route unauthenticated users are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Landing route after login and for the bare `/` path.
pub const HOME_PATH: &str = "/home";

// =============================================================================
// Notifications
// =============================================================================

/// Toast text shown to the user.
pub mod messages {
    /// Domain failure without a server-provided message.
    pub const REQUEST_FAILED: &str = "请求失败";
    /// Transport failure without a usable error message.
    pub const NETWORK_ERROR: &str = "网络错误";
    /// Shown when the server rejects the session with 401.
    pub const SESSION_EXPIRED: &str = "登录已过期，请重新登录";
}

/// Profile header labels while no username is available.
pub mod labels {
    pub const GUEST: &str = "游客";
    pub const LOGGING_IN: &str = "登录中...";
    /// Logged in but the profile has not arrived yet.
    pub const LOADING_PROFILE: &str = "加载中...";
}

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 2000;

// =============================================================================
// Presentation
// =============================================================================

/// Class toggled on the root element while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Media query backing the `auto` theme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
