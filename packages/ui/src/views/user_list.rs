use dioxus::prelude::*;

use api::HttpDirectory;
use directory::{FetchRequest, ListController, SortMode, UserDirectory, UserRecord};

use crate::icons::FaMagnifyingGlass;
use crate::{sleep, use_app_config, use_directory, Icon, UserTable};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Searchable, sortable, paginated list of users.
///
/// The view owns a [`ListController`] built from the route segment it was mounted
/// with. Every state change is reported through `on_replace_query` so the platform
/// package can replace (not push) the current route.
#[component]
pub fn UserListView(
    /// Raw `<query>` of the `/userlist/<query>` route.
    query: String,
    /// Called with the new query segment after every state change.
    on_replace_query: EventHandler<String>,
    /// Called when a user's name is clicked.
    on_open_profile: EventHandler<UserRecord>,
) -> Element {
    let config = use_app_config();
    let directory = use_directory();
    let mut controller =
        use_signal(|| ListController::new(&query, config.list.search_delay()));

    // Initial fetch for the mounted query
    let _loader = use_resource(move || async move {
        let request = controller.peek().mount_request();
        fetch_users(directory, controller, request).await;
    });

    let on_search = move |evt: FormEvent| {
        let ticket = controller.write().on_search_input(evt.value());
        let delay = controller.peek().search_delay();
        spawn(async move {
            sleep(delay).await;
            let commit = controller.write().on_search_elapsed(ticket);
            if let Some(commit) = commit {
                tracing::debug!(segment = %commit.segment, "search settled");
                on_replace_query.call(commit.segment);
                fetch_users(directory, controller, commit.fetch).await;
            }
        });
    };

    let on_sort = move |evt: FormEvent| {
        let mode = evt
            .value()
            .parse::<usize>()
            .map(SortMode::from_code)
            .unwrap_or_default();
        let segment = controller.write().on_sort_change(mode);
        on_replace_query.call(segment);
    };

    let on_page_size = move |evt: FormEvent| {
        let Ok(size) = evt.value().parse::<usize>() else {
            tracing::warn!(value = %evt.value(), "ignoring invalid page size");
            return;
        };
        let segment = controller.write().on_page_size_change(size);
        on_replace_query.call(segment);
    };

    let on_prev = move |_: MouseEvent| {
        let segment = controller.write().on_prev_page();
        on_replace_query.call(segment);
    };

    let on_next = move |_: MouseEvent| {
        let segment = controller.write().on_next_page();
        on_replace_query.call(segment);
    };

    let (state, rows, summary, has_prev, has_next, fetch_failed) = {
        let c = controller.read();
        (
            c.query().clone(),
            c.visible(),
            c.summary(),
            c.has_prev(),
            c.has_next(),
            c.fetch_failed(),
        )
    };
    let page_sizes = config.list.page_size_options.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "user-list",
            h2 { id: "userPageHeader", "Users" }

            div {
                class: "list-options",
                div {
                    class: "search-box",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        id: "searchInput",
                        placeholder: "Search",
                        value: "{state.search_term}",
                        oninput: on_search,
                    }
                }
                div {
                    class: "sort-box",
                    label { r#for: "sortBy", "Sort by" }
                    select {
                        id: "sortBy",
                        onchange: on_sort,
                        for mode in SortMode::ALL {
                            option {
                                value: "{mode.code()}",
                                selected: mode == state.sort_mode,
                                "{mode.label()}"
                            }
                        }
                    }
                }
            }

            div { class: "divider" }

            if fetch_failed {
                div {
                    class: "fetch-error",
                    "Something went wrong! This is on us. Please try again later."
                }
            }

            UserTable { users: rows, on_open_profile }

            div {
                class: "table-options",
                div { class: "result-count", "{summary}" }
                div {
                    class: "pagination",
                    label { r#for: "numResults", "Rows per page" }
                    select {
                        id: "numResults",
                        onchange: on_page_size,
                        for size in page_sizes {
                            option {
                                value: "{size}",
                                selected: size == state.page_size,
                                "{size}"
                            }
                        }
                    }
                    button {
                        class: "page-button",
                        disabled: !has_prev,
                        onclick: on_prev,
                        "Previous"
                    }
                    button {
                        class: "page-button",
                        disabled: !has_next,
                        onclick: on_next,
                        "Next"
                    }
                }
            }
        }
    }
}

async fn fetch_users(
    directory: Signal<HttpDirectory>,
    mut controller: Signal<ListController>,
    request: FetchRequest,
) {
    let client = directory.peek().clone();
    tracing::debug!(?request, "dispatching user fetch");
    let result = client.fetch(&request).await;
    controller.write().apply_fetch(result);
}
