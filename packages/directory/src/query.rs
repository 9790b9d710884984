//! # List query state and its URL segment
//!
//! The list view keeps its search/sort/pagination state in the route
//! `/userlist/<segment>`, where the segment is
//!
//! ```text
//! search=<term>&sortBy=<mode>&perPage=<size>&pageNo=<page>
//! ```
//!
//! Parsing is deliberately strict about shape and lenient about content:
//!
//! - A segment that does not split into exactly four `&`-separated pairs yields
//!   [`ListQueryState::default`] as a whole. This is also how the `/userlist/all`
//!   sentinel ends up meaning "no filter".
//! - Pairs are matched by key, so the four pairs may come in any order.
//! - Empty values, unknown keys and pairs that do not split into exactly one
//!   `key=value` are skipped and leave the default in place.
//! - Numeric values are only taken when they are positive integers; `"0"` keeps
//!   the default.
//!
//! Serialisation always writes the four keys in the fixed order above and does not
//! escape the search term, so a term containing `&` or `=` does not survive a round trip.

use std::fmt;

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const FIRST_PAGE: usize = 1;

/// Row ordering offered by the list view. The discriminants are the codes used in
/// the URL (`sortBy=1` .. `sortBy=4`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    NameAsc = 1,
    NameDesc = 2,
    #[default]
    DateDesc = 3,
    DateAsc = 4,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::NameAsc,
        SortMode::NameDesc,
        SortMode::DateDesc,
        SortMode::DateAsc,
    ];

    pub fn code(self) -> usize {
        self as usize
    }

    /// Map a URL code to a mode. Unknown codes fall back to [`SortMode::DateDesc`].
    pub fn from_code(code: usize) -> Self {
        match code {
            1 => SortMode::NameAsc,
            2 => SortMode::NameDesc,
            4 => SortMode::DateAsc,
            _ => SortMode::DateDesc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::NameAsc => "Full name - A to Z",
            SortMode::NameDesc => "Full name - Z to A",
            SortMode::DateDesc => "Date - recent to old",
            SortMode::DateAsc => "Date - old to recent",
        }
    }
}

/// Search, sort and pagination state of the list view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQueryState {
    /// Substring filter sent to the directory. Empty means "all users".
    pub search_term: String,
    pub sort_mode: SortMode,
    /// Rows per page, always at least 1.
    pub page_size: usize,
    /// 1-based page number.
    pub page_number: usize,
}

impl Default for ListQueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_mode: SortMode::default(),
            page_size: DEFAULT_PAGE_SIZE,
            page_number: FIRST_PAGE,
        }
    }
}

impl ListQueryState {
    /// Parse a `/userlist/<segment>` segment. Never fails; see the module docs for
    /// the fallback rules.
    pub fn parse(segment: &str) -> Self {
        let mut state = Self::default();

        let pairs: Vec<&str> = segment.split('&').collect();
        if pairs.len() != 4 {
            return state;
        }

        for pair in pairs {
            let parts: Vec<&str> = pair.split('=').collect();
            let [key, value] = parts.as_slice() else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match *key {
                "search" => state.search_term = value.to_string(),
                "sortBy" => {
                    if let Some(code) = positive_integer(value) {
                        state.sort_mode = SortMode::from_code(code);
                    }
                }
                "perPage" => {
                    if let Some(size) = positive_integer(value) {
                        state.page_size = size;
                    }
                }
                "pageNo" => {
                    if let Some(page) = positive_integer(value) {
                        state.page_number = page;
                    }
                }
                _ => {}
            }
        }

        state
    }

    /// Render the state as a URL segment, keys in fixed order.
    pub fn serialize(&self) -> String {
        format!(
            "search={}&sortBy={}&perPage={}&pageNo={}",
            self.search_term,
            self.sort_mode.code(),
            self.page_size,
            self.page_number
        )
    }

    /// Full list route for this state: `/userlist/<segment>`.
    pub fn route_path(&self) -> String {
        format!("/userlist/{}", self.serialize())
    }
}

impl fmt::Display for ListQueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Numeric coercion for query values: whitespace is ignored and the value must be a
/// finite, non-zero, positive whole number (`"5"`, `" 5 "`, `"5.0"`, `"+5"`).
/// Plain integers are taken exactly; only decimal forms go through `f64`.
fn positive_integer(value: &str) -> Option<usize> {
    let value = value.trim();
    if let Ok(n) = value.parse::<usize>() {
        return (n >= FIRST_PAGE).then_some(n);
    }
    let n: f64 = value.parse().ok()?;
    if n.is_finite() && n >= 1.0 && n.fract() == 0.0 && n <= usize::MAX as f64 {
        Some(n as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(search: &str, sort_mode: SortMode, page_size: usize, page_number: usize) -> ListQueryState {
        ListQueryState {
            search_term: search.to_string(),
            sort_mode,
            page_size,
            page_number,
        }
    }

    #[test]
    fn test_default_state() {
        let s = ListQueryState::default();
        assert_eq!(s, state("", SortMode::DateDesc, 5, 1));
        assert_eq!(s.serialize(), "search=&sortBy=3&perPage=5&pageNo=1");
    }

    #[test]
    fn test_serialize_fixed_key_order() {
        let s = state("jane", SortMode::NameDesc, 3, 2);
        assert_eq!(s.serialize(), "search=jane&sortBy=2&perPage=3&pageNo=2");
        assert_eq!(s.route_path(), "/userlist/search=jane&sortBy=2&perPage=3&pageNo=2");
        assert_eq!(s.to_string(), s.serialize());
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            ListQueryState::default(),
            state("jane", SortMode::NameAsc, 2, 1),
            state("Doe", SortMode::NameDesc, 3, 4),
            state("a b", SortMode::DateAsc, 5, 10),
            state("", SortMode::DateDesc, 50, 7),
        ];
        for s in cases {
            assert_eq!(ListQueryState::parse(&s.serialize()), s);
        }
    }

    #[test]
    fn test_wrong_pair_count_yields_defaults() {
        for segment in [
            "all",
            "",
            "search=jane&sortBy=1&perPage=2",
            "search=jane&sortBy=1&perPage=2&pageNo=3&extra=1",
        ] {
            assert_eq!(ListQueryState::parse(segment), ListQueryState::default(), "{segment}");
        }
    }

    #[test]
    fn test_zero_sort_keeps_default() {
        let s = ListQueryState::parse("sortBy=0&perPage=5&pageNo=1&search=");
        assert_eq!(s, state("", SortMode::DateDesc, 5, 1));
    }

    #[test]
    fn test_reordered_pairs_are_matched_by_key() {
        let s = ListQueryState::parse("pageNo=2&perPage=3&sortBy=1&search=jo");
        assert_eq!(s, state("jo", SortMode::NameAsc, 3, 2));
    }

    #[test]
    fn test_empty_and_malformed_values_keep_defaults() {
        let s = ListQueryState::parse("search=&sortBy=&perPage=&pageNo=");
        assert_eq!(s, ListQueryState::default());

        let s = ListQueryState::parse("search=a=b&sortBy=abc&perPage=0&pageNo=-2");
        assert_eq!(s, ListQueryState::default());

        let s = ListQueryState::parse("search&sortBy=2&perPage=2.5&pageNo= 3 ");
        assert_eq!(s, state("", SortMode::NameDesc, 5, 3));
    }

    #[test]
    fn test_unknown_sort_code_maps_to_date_desc() {
        let s = ListQueryState::parse("search=&sortBy=9&perPage=5&pageNo=1");
        assert_eq!(s.sort_mode, SortMode::DateDesc);
    }

    #[test]
    fn test_unknown_keys_still_count_towards_shape() {
        let s = ListQueryState::parse("q=x&sortBy=4&perPage=2&page=9");
        assert_eq!(s, state("", SortMode::DateAsc, 2, 1));
    }

    #[test]
    fn test_sort_mode_codes() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_code(mode.code()), mode);
        }
        assert_eq!(SortMode::from_code(0), SortMode::DateDesc);
    }

    #[test]
    fn test_large_integers_are_taken_exactly() {
        let s = state("", SortMode::DateDesc, 5, usize::MAX);
        assert_eq!(ListQueryState::parse(&s.serialize()), s);

        let s = ListQueryState::parse("search=&sortBy=+1&perPage=2.0&pageNo=007");
        assert_eq!(s, state("", SortMode::NameAsc, 2, 7));
    }
}
