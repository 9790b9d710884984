use dioxus::prelude::*;

use crate::Route;

/// Redirect `/` to the unfiltered user list.
#[component]
pub fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::UserList {
        query: "all".to_string(),
    });
    rsx! {}
}

/// Any unknown route goes back to `/`.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = %segments.join("/"), "unknown route, redirecting");
    nav.replace(Route::Root {});
    rsx! {}
}
