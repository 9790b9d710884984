//! # List State Controller
//!
//! [`ListController`] is the single owner of the list view's state: the
//! [`ListQueryState`] mirrored in the URL, the users last fetched from the
//! directory, and the search debouncer. It performs no I/O. Each transition
//! returns what the caller has to do next:
//!
//! | Transition | Returns | Caller then |
//! |------------|---------|-------------|
//! | [`new`](ListController::new) | controller | fetches [`mount_request`](ListController::mount_request) |
//! | [`on_search_input`](ListController::on_search_input) | [`Ticket`] | sleeps for the debounce delay, then calls [`on_search_elapsed`](ListController::on_search_elapsed) |
//! | [`on_search_elapsed`](ListController::on_search_elapsed) | `Option<`[`SearchCommit`]`>` | replaces the URL and fetches |
//! | [`on_sort_change`](ListController::on_sort_change), [`on_page_size_change`](ListController::on_page_size_change), [`on_prev_page`](ListController::on_prev_page), [`on_next_page`](ListController::on_next_page) | URL segment | replaces the URL |
//! | [`apply_fetch`](ListController::apply_fetch) | — | re-renders |
//!
//! Fetch results are applied in the order they complete. A slow response for an old
//! search term can therefore overwrite the list of a newer one.

use std::time::Duration;

use crate::debounce::{Debouncer, Ticket};
use crate::error::DirectoryError;
use crate::models::UserRecord;
use crate::projector::{constrain, page_bounds};
use crate::query::{ListQueryState, SortMode, FIRST_PAGE};

/// Which directory endpoint to hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchRequest {
    /// `GET /users`
    All,
    /// `GET /users?search=<term>`
    Search(String),
}

impl FetchRequest {
    /// An empty term means the unfiltered endpoint.
    pub fn for_term(term: &str) -> Self {
        if term.is_empty() {
            FetchRequest::All
        } else {
            FetchRequest::Search(term.to_string())
        }
    }

    pub fn search_term(&self) -> Option<&str> {
        match self {
            FetchRequest::All => None,
            FetchRequest::Search(term) => Some(term),
        }
    }
}

/// Outcome of a debounced search: the fetch to run and the URL segment to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchCommit {
    pub fetch: FetchRequest,
    pub segment: String,
}

#[derive(Clone, Debug)]
pub struct ListController {
    query: ListQueryState,
    users: Vec<UserRecord>,
    fetch_failed: bool,
    search: Debouncer<String>,
}

impl ListController {
    /// Build the controller from the route segment the view was mounted with.
    pub fn new(segment: &str, search_delay: Duration) -> Self {
        Self {
            query: ListQueryState::parse(segment),
            users: Vec::new(),
            fetch_failed: false,
            search: Debouncer::new(search_delay),
        }
    }

    /// The fetch to issue right after mounting.
    pub fn mount_request(&self) -> FetchRequest {
        FetchRequest::for_term(&self.query.search_term)
    }

    pub fn query(&self) -> &ListQueryState {
        &self.query
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// True while the most recent fetch failed and no later one succeeded.
    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    pub fn search_delay(&self) -> Duration {
        self.search.delay()
    }

    /// Echo `text` into the search box right away and (re)schedule the fetch.
    pub fn on_search_input(&mut self, text: String) -> Ticket {
        self.query.search_term = text.clone();
        self.search.arm(text)
    }

    /// The debounce delay for `ticket` elapsed. Returns `None` if a newer keystroke
    /// superseded it.
    pub fn on_search_elapsed(&mut self, ticket: Ticket) -> Option<SearchCommit> {
        let term = self.search.fire(ticket)?;
        self.query.search_term = term;
        self.query.page_number = FIRST_PAGE;
        Some(SearchCommit {
            fetch: FetchRequest::for_term(&self.query.search_term),
            segment: self.query.serialize(),
        })
    }

    pub fn on_sort_change(&mut self, mode: SortMode) -> String {
        self.query.sort_mode = mode;
        self.query.page_number = FIRST_PAGE;
        self.query.serialize()
    }

    pub fn on_page_size_change(&mut self, size: usize) -> String {
        self.query.page_size = size.max(1);
        self.query.page_number = FIRST_PAGE;
        self.query.serialize()
    }

    pub fn on_prev_page(&mut self) -> String {
        self.query.page_number = self.query.page_number.saturating_sub(1).max(FIRST_PAGE);
        self.query.serialize()
    }

    pub fn on_next_page(&mut self) -> String {
        self.query.page_number = self.query.page_number.saturating_add(1);
        self.query.serialize()
    }

    /// Store a completed fetch. Failures are logged and keep the previous list.
    pub fn apply_fetch(&mut self, result: Result<Vec<UserRecord>, DirectoryError>) {
        match result {
            Ok(users) => {
                tracing::debug!(count = users.len(), "user list updated");
                self.users = users;
                self.fetch_failed = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "user fetch failed, keeping previous list");
                self.fetch_failed = true;
            }
        }
    }

    /// Rows for the current page.
    pub fn visible(&self) -> Vec<UserRecord> {
        constrain(
            &self.users,
            self.query.sort_mode,
            self.query.page_number,
            self.query.page_size,
        )
    }

    pub fn total(&self) -> usize {
        self.users.len()
    }

    pub fn has_prev(&self) -> bool {
        self.query.page_number > FIRST_PAGE
    }

    pub fn has_next(&self) -> bool {
        self.query.page_number.saturating_mul(self.query.page_size) < self.users.len()
    }

    /// Result count line shown under the table.
    pub fn summary(&self) -> String {
        let total = self.users.len();
        if total == 0 {
            return "No users found! Try changing your search word.".to_string();
        }
        let (start, end) = page_bounds(total, self.query.page_number, self.query.page_size);
        format!("Showing {} to {} of {} results", start.saturating_add(1), end, total)
    }
}
