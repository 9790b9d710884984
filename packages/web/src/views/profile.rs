use dioxus::prelude::*;

use ui::views::ProfileView;

#[component]
pub fn Profile(name: String, date: String) -> Element {
    rsx! {
        ProfileView { name, date }
    }
}
