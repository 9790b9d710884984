//! # Profile lookup
//!
//! A profile route `/user/<name>/<createdAt>` carries no id. The user is found by
//! searching the directory for `<name>` and taking the first result whose full name
//! and registration timestamp both match exactly.

use chrono::{DateTime, Utc};

use crate::controller::FetchRequest;
use crate::directory::UserDirectory;
use crate::models::UserRecord;

/// What the profile view shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileState {
    Loading,
    Found(UserRecord),
    NotFound,
    NetworkError,
}

impl ProfileState {
    /// Placeholder text for every state except [`ProfileState::Found`].
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ProfileState::Loading => Some("Please wait while we fetch the user's info for you . . ."),
            ProfileState::Found(_) => None,
            ProfileState::NotFound => Some("Sorry, couldn't find the user you are looking for!"),
            ProfileState::NetworkError => {
                Some("Something went wrong! This is on us. Please try again later.")
            }
        }
    }
}

/// First user named exactly `name` registered exactly at `registered_at`.
pub fn select_profile<'a>(
    users: &'a [UserRecord],
    name: &str,
    registered_at: &DateTime<Utc>,
) -> Option<&'a UserRecord> {
    users
        .iter()
        .find(|u| u.full_name == name && u.registered_at == *registered_at)
}

/// Fetch and select the profile for a `/user/<name>/<date>` route.
pub async fn load_profile<D: UserDirectory>(directory: &D, name: &str, date: &str) -> ProfileState {
    let registered_at = match DateTime::parse_from_rfc3339(date) {
        Ok(at) => at.with_timezone(&Utc),
        Err(e) => {
            tracing::info!(%date, error = %e, "profile route has an invalid timestamp");
            return ProfileState::NotFound;
        }
    };

    match directory.fetch(&FetchRequest::for_term(name)).await {
        Ok(users) => match select_profile(&users, name, &registered_at) {
            Some(user) => ProfileState::Found(user.clone()),
            None => {
                tracing::info!(%name, %date, candidates = users.len(), "profile not found");
                ProfileState::NotFound
            }
        },
        Err(e) => {
            tracing::error!(error = %e, %name, "profile fetch failed");
            ProfileState::NetworkError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;
    use crate::memory::MemoryDirectory;
    use crate::models::fixtures::user;

    struct Unreachable;

    impl UserDirectory for Unreachable {
        async fn fetch(&self, _: &FetchRequest) -> Result<Vec<UserRecord>, DirectoryError> {
            Err(DirectoryError::Network("connection refused".into()))
        }
    }

    fn directory() -> MemoryDirectory {
        let mut older = user("Jane Doe", "2021-06-01T08:00:00.000Z");
        older.email = "older@doe.com".into();
        let mut newer = user("Jane Doe", "2022-03-15T17:45:30.000Z");
        newer.email = "newer@doe.com".into();
        MemoryDirectory::new(vec![older, user("Jane Doering", "2022-03-15T17:45:30.000Z"), newer])
    }

    #[tokio::test]
    async fn test_selects_by_timestamp() {
        let dir = directory();
        let state = load_profile(&dir, "Jane Doe", "2022-03-15T17:45:30.000Z").await;
        let found = match state {
            ProfileState::Found(found) => found,
            other => panic!("expected a profile, got {other:?}"),
        };
        assert_eq!(found.email, "newer@doe.com");
        assert_eq!(dir.requests(), vec![FetchRequest::Search("Jane Doe".into())]);

        let state = load_profile(&dir, "Jane Doe", "2021-06-01T08:00:00.000Z").await;
        assert!(matches!(state, ProfileState::Found(u) if u.email == "older@doe.com"));
    }

    #[tokio::test]
    async fn test_unmatched_timestamp_is_not_found() {
        let dir = directory();
        let state = load_profile(&dir, "Jane Doe", "2020-01-01T00:00:00.000Z").await;
        assert_eq!(state, ProfileState::NotFound);
        assert_eq!(
            state.message(),
            Some("Sorry, couldn't find the user you are looking for!")
        );
    }

    #[tokio::test]
    async fn test_invalid_timestamp_is_not_found() {
        let dir = directory();
        assert_eq!(load_profile(&dir, "Jane Doe", "yesterday").await, ProfileState::NotFound);
        assert!(dir.requests().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure() {
        let state = load_profile(&Unreachable, "Jane Doe", "2022-03-15T17:45:30.000Z").await;
        assert_eq!(state, ProfileState::NetworkError);
        assert!(state.message().unwrap().contains("try again later"));
    }
}
