use dioxus::prelude::*;

use directory::format::format_registered_at;
use directory::{load_profile, FieldKind, ProfileState};

use crate::{use_directory, EditableProfileField, ReadOnlyProfileField, StatusPill};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Profile page for the user named `name` registered at `date`.
#[component]
pub fn ProfileView(
    /// Full name from the route.
    name: String,
    /// Registration timestamp from the route, RFC 3339.
    date: String,
) -> Element {
    // Track route params in a signal so use_resource re-runs on navigation
    let mut route_key = use_signal(|| (name.clone(), date.clone()));
    if route_key.peek().0 != name || route_key.peek().1 != date {
        route_key.set((name.clone(), date.clone()));
    }

    let directory = use_directory();
    let mut profile = use_signal(|| ProfileState::Loading);

    let _loader = use_resource(move || {
        let (name, date) = route_key();
        async move {
            profile.set(ProfileState::Loading);
            let client = directory.peek().clone();
            profile.set(load_profile(&client, &name, &date).await);
        }
    });

    let body = match profile() {
        ProfileState::Found(user) => {
            let registered = format_registered_at(&user.registered_at);
            rsx! {
                div {
                    id: "profileContainer",
                    EditableProfileField { kind: FieldKind::FullName, value: user.full_name.clone() }
                    EditableProfileField { kind: FieldKind::Email, value: user.email.clone() }
                    EditableProfileField { kind: FieldKind::Phone, value: user.phone_digits() }
                    EditableProfileField { kind: FieldKind::Ssn, value: user.ssn_digits() }
                    ReadOnlyProfileField {
                        label: "Footprint Token".to_string(),
                        span { class: "user-token", "{user.verification_token}" }
                    }
                    ReadOnlyProfileField {
                        label: "Status".to_string(),
                        StatusPill { status: user.status.clone() }
                    }
                    ReadOnlyProfileField {
                        label: "Registration Date".to_string(),
                        "{registered}"
                    }
                }
            }
        }
        other => {
            let message = other.message().unwrap_or_default();
            rsx! {
                div { class: "view-placeholder", "{message}" }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        {body}
    }
}
