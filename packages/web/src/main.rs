use dioxus::prelude::*;

use directory::AppConfig;
use views::{NotFound, Profile, Root, UserList};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/userlist/:query")]
    UserList { query: String },
    #[route("/user/:name/:date")]
    Profile { name: String, date: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../footprint.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to initialise logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = AppConfig::from_toml_or_default(CONFIG_TOML);
        tracing::info!(base_url = %config.directory.base_url, "directory configured");
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
