//! The seam between the views and wherever user records come from.

use crate::controller::FetchRequest;
use crate::error::DirectoryError;
use crate::models::UserRecord;

/// Async source of user records. [`crate::MemoryDirectory`] backs tests; the `api`
/// crate provides the HTTP implementation.
pub trait UserDirectory {
    fn fetch(
        &self,
        request: &FetchRequest,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, DirectoryError>>;
}
