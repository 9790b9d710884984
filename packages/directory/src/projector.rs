//! Constrained list: the sorted, paginated slice of users the table renders.

use crate::models::UserRecord;
use crate::query::SortMode;

/// Sort a copy of `users` by `sort_mode` and cut out page `page_number` of
/// `page_size` rows. The source slice is never reordered.
///
/// [`SortMode::DateDesc`] keeps the order in which the directory returned the
/// users; only the other three modes sort. A page past the end yields an empty list.
pub fn constrain(
    users: &[UserRecord],
    sort_mode: SortMode,
    page_number: usize,
    page_size: usize,
) -> Vec<UserRecord> {
    let mut all = users.to_vec();

    match sort_mode {
        SortMode::NameAsc => all.sort_by(|a, b| a.full_name.cmp(&b.full_name)),
        SortMode::NameDesc => all.sort_by(|a, b| b.full_name.cmp(&a.full_name)),
        SortMode::DateAsc => all.sort_by_key(|u| u.registered_at),
        SortMode::DateDesc => {}
    }

    let (start, end) = page_bounds(all.len(), page_number, page_size);
    if start >= end {
        return Vec::new();
    }
    all.drain(start..end).collect()
}

/// Half-open index range `[start, end)` of a page within `total` rows, clamped to
/// the list. `start >= end` means the page is empty.
pub fn page_bounds(total: usize, page_number: usize, page_size: usize) -> (usize, usize) {
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    let end = page_number.saturating_mul(page_size).min(total);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::user;

    fn seven_users() -> Vec<UserRecord> {
        vec![
            user("Grace Hopper", "2022-01-03T00:00:00.000Z"),
            user("Ada Lovelace", "2022-01-07T00:00:00.000Z"),
            user("Frances Allen", "2022-01-01T00:00:00.000Z"),
            user("Edsger Dijkstra", "2022-01-05T00:00:00.000Z"),
            user("Barbara Liskov", "2022-01-02T00:00:00.000Z"),
            user("Donald Knuth", "2022-01-06T00:00:00.000Z"),
            user("Claude Shannon", "2022-01-04T00:00:00.000Z"),
        ]
    }

    fn names(users: &[UserRecord]) -> Vec<&str> {
        users.iter().map(|u| u.full_name.as_str()).collect()
    }

    #[test]
    fn test_name_asc_second_page() {
        let users = seven_users();
        let page = constrain(&users, SortMode::NameAsc, 2, 5);
        assert_eq!(names(&page), vec!["Frances Allen", "Grace Hopper"]);
    }

    #[test]
    fn test_name_desc_first_page() {
        let users = seven_users();
        let page = constrain(&users, SortMode::NameDesc, 1, 3);
        assert_eq!(names(&page), vec!["Grace Hopper", "Frances Allen", "Edsger Dijkstra"]);
    }

    #[test]
    fn test_date_asc() {
        let users = seven_users();
        let page = constrain(&users, SortMode::DateAsc, 1, 7);
        assert_eq!(
            names(&page),
            vec![
                "Frances Allen",
                "Barbara Liskov",
                "Grace Hopper",
                "Claude Shannon",
                "Edsger Dijkstra",
                "Donald Knuth",
                "Ada Lovelace",
            ]
        );
    }

    #[test]
    fn test_date_desc_keeps_fetched_order() {
        let users = seven_users();
        let page = constrain(&users, SortMode::DateDesc, 1, 10);
        assert_eq!(page, users);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let users = seven_users();
        assert!(constrain(&users, SortMode::NameAsc, 10, 5).is_empty());
        assert!(constrain(&[], SortMode::NameAsc, 1, 5).is_empty());
    }

    #[test]
    fn test_source_not_mutated() {
        let users = seven_users();
        let before = users.clone();
        let _ = constrain(&users, SortMode::NameAsc, 1, 5);
        assert_eq!(users, before);
    }

    #[test]
    fn test_equal_names_keep_relative_order() {
        let users = vec![
            user("Jane Doe", "2022-02-01T00:00:00.000Z"),
            user("Adam Smith", "2022-03-01T00:00:00.000Z"),
            user("Jane Doe", "2022-01-01T00:00:00.000Z"),
        ];
        let page = constrain(&users, SortMode::NameAsc, 1, 5);
        assert_eq!(page[1].registered_at_key(), "2022-02-01T00:00:00.000Z");
        assert_eq!(page[2].registered_at_key(), "2022-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(7, 1, 5), (0, 5));
        assert_eq!(page_bounds(7, 2, 5), (5, 7));
        assert_eq!(page_bounds(7, 3, 5), (10, 7));
    }
}
