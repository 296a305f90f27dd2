//! Configuration loader and defaults for the calcweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from environment
//! variables (with sensible defaults). Fields include the name shown in the
//! home page greeting (`display_name`) and the listening port (`web_port`).
//!
use std::env;

use once_cell::sync::Lazy;

/// Default name rendered in the home page greeting
const DEFAULT_DISPLAY_NAME: &str = "Krupakar";

/// Default web http port
const DEFAULT_WEB_PORT: u16 = 8080;

/// Application configuration containing display and listener settings
pub struct Config {
    /// Name rendered in the home page greeting
    pub display_name: String,
    /// Web http port
    pub web_port: u16,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    display_name: env::var("CALCWEB_NAME").unwrap_or_else(|_| DEFAULT_DISPLAY_NAME.into()),

    web_port: env::var("CALCWEB_WEB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_WEB_PORT),
});
