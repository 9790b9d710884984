use dioxus::prelude::*;
use directory::format::{format_phone, format_registered_at, format_status};
use directory::{Status, UserRecord};

const COLUMNS: [&str; 7] = [
    "FULL NAME",
    "FOOTPRINT TOKEN",
    "STATUS",
    "EMAIL",
    "SSN",
    "PHONE NUMBER",
    "DATE",
];

/// Table of users, one row per record. Clicking a name opens the profile.
#[component]
pub fn UserTable(users: Vec<UserRecord>, on_open_profile: EventHandler<UserRecord>) -> Element {
    rsx! {
        table {
            id: "userTable",
            thead {
                tr {
                    for column in COLUMNS {
                        th { "{column}" }
                    }
                }
            }
            tbody {
                for user in users {
                    UserRow {
                        key: "{user.verification_token}-{user.registered_at_key()}",
                        user: user.clone(),
                        on_open_profile,
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: UserRecord, on_open_profile: EventHandler<UserRecord>) -> Element {
    let phone = format_phone(&user.phone_digits());
    let ssn = user.ssn_digits();
    let registered = format_registered_at(&user.registered_at);
    let target = user.clone();

    rsx! {
        tr {
            class: "table-row",
            td {
                class: "user-name",
                button {
                    class: "link-button",
                    onclick: move |_| on_open_profile.call(target.clone()),
                    "{user.full_name}"
                }
            }
            td { class: "user-token", "{user.verification_token}" }
            td { class: "user-status", StatusPill { status: user.status.clone() } }
            td { class: "user-email", "{user.email}" }
            td { class: "user-ssn", "{ssn}" }
            td { class: "user-phone", "{phone}" }
            td { class: "user-date", "{registered}" }
        }
    }
}

/// Rounded status badge: green for verified, red otherwise.
#[component]
pub fn StatusPill(status: Status) -> Element {
    let tone = if status.is_verified() { "positive" } else { "negative" };
    let label = format_status(&status);
    rsx! {
        span {
            class: "status-pill {tone}",
            "{label}"
        }
    }
}
