use dioxus::prelude::*;

use directory::UserRecord;
use ui::views::UserListView;

use crate::Route;

#[component]
pub fn UserList(query: String) -> Element {
    let nav = use_navigator();

    rsx! {
        UserListView {
            query,
            on_replace_query: move |segment: String| {
                nav.replace(Route::UserList { query: segment });
            },
            on_open_profile: move |user: UserRecord| {
                nav.push(Route::Profile {
                    date: user.registered_at_key(),
                    name: user.full_name,
                });
            },
        }
    }
}
