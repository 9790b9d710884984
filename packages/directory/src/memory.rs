use std::sync::{Arc, Mutex};

use crate::controller::FetchRequest;
use crate::directory::UserDirectory;
use crate::error::DirectoryError;
use crate::models::UserRecord;

/// In-memory UserDirectory for tests and offline demos.
///
/// Search matches case-insensitive substrings of the full name, which is close to
/// what the hosted directory does.
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
    users: Arc<Mutex<Vec<UserRecord>>>,
    requests: Arc<Mutex<Vec<FetchRequest>>>,
}

impl MemoryDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            requests: Arc::default(),
        }
    }

    /// Every request served so far, oldest first.
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl UserDirectory for MemoryDirectory {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<UserRecord>, DirectoryError> {
        self.requests.lock().unwrap().push(request.clone());
        let users = self.users.lock().unwrap();
        let found = match request {
            FetchRequest::All => users.clone(),
            FetchRequest::Search(term) => {
                let needle = term.to_lowercase();
                users
                    .iter()
                    .filter(|u| u.full_name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
        };
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::user;

    #[tokio::test]
    async fn test_search_filters_by_name() {
        let dir = MemoryDirectory::new(vec![
            user("Jane Doe", "2022-01-01T00:00:00.000Z"),
            user("John Smith", "2022-01-02T00:00:00.000Z"),
        ]);

        assert_eq!(dir.fetch(&FetchRequest::All).await.unwrap().len(), 2);

        let found = dir.fetch(&FetchRequest::Search("jane".into())).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name, "Jane Doe");

        assert_eq!(
            dir.requests(),
            vec![FetchRequest::All, FetchRequest::Search("jane".into())]
        );
    }
}
