//! Access to the app configuration and the remote directory client.
//!
//! The web entry point provides an [`AppConfig`] through the Dioxus context. Views
//! build their own [`HttpDirectory`] from it.

use api::HttpDirectory;
use directory::AppConfig;
use dioxus::prelude::*;

/// The configuration provided at the root of the app.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// A directory client for the calling component, built once on mount.
pub fn use_directory() -> Signal<HttpDirectory> {
    let config = use_app_config();
    use_signal(move || HttpDirectory::from_config(&config.directory))
}
