//! # Pagination
//!
//! Fixed-size page slices for list responses, plus the `meta`/`links`
//! members. Page numbers are 1-based; anything absent or unparseable
//! defaults to page 1, and out-of-range pages yield an empty slice rather
//! than an error.

use std::collections::HashMap;

use crate::jsonapi::{Links, Meta};

/// Records per page.
pub const PAGE_SIZE: usize = 25;

/// Extract the requested page number from query parameters.
///
/// Accepts both `page[number]=N` (the JSON:API style) and a bare `page=N`.
pub fn requested_page(query: &HashMap<String, String>) -> usize {
    query
        .get("page[number]")
        .or_else(|| query.get("page"))
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(1)
}

/// The contiguous slice for a page.
pub fn slice<T>(items: &[T], page: usize) -> &[T] {
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Number of pages for a record count; an empty collection still has one.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Collection `meta` member.
pub fn meta(total: usize) -> Meta {
    Meta { total_count: total }
}

/// Collection `links` member.
///
/// `first` is the bare collection URL and `prev` clamps to it at page 1,
/// while `next` clamps to the last page, so first/prev coincide exactly at
/// page 1 and next/last exactly at the final page.
pub fn links(collection: &str, page: usize, total: usize) -> Links {
    let base = format!("/{collection}");
    let pages = page_count(total);
    let page_url = |n: usize| format!("{base}?page={n}");

    Links {
        prev: if page > 1 { page_url(page - 1) } else { base.clone() },
        next: page_url((page + 1).min(pages)),
        last: page_url(pages),
        first: base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_requested_page_defaults_to_one() {
        assert_eq!(requested_page(&query(&[])), 1);
        assert_eq!(requested_page(&query(&[("page", "abc")])), 1);
        assert_eq!(requested_page(&query(&[("page", "0")])), 1);
        assert_eq!(requested_page(&query(&[("page", "3")])), 3);
        assert_eq!(requested_page(&query(&[("page[number]", "2")])), 2);
    }

    #[test]
    fn test_slice_boundaries() {
        let items: Vec<usize> = (0..150).collect();
        assert_eq!(slice(&items, 1).len(), PAGE_SIZE);
        assert_eq!(slice(&items, 2).first(), Some(&25));
        assert_eq!(slice(&items, 6).last(), Some(&149));
        assert!(slice(&items, 7).is_empty());
    }

    #[test]
    fn test_partial_final_page() {
        let items: Vec<usize> = (0..30).collect();
        assert_eq!(slice(&items, 2).len(), 5);
        assert_eq!(page_count(30), 2);
    }

    #[test]
    fn test_page_count_of_empty_collection_is_one() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(25), 1);
        assert_eq!(page_count(26), 2);
    }

    #[test]
    fn test_first_equals_prev_only_at_page_one() {
        let at_one = links("posts", 1, 150);
        assert_eq!(at_one.first, at_one.prev);

        let at_two = links("posts", 2, 150);
        assert_ne!(at_two.first, at_two.prev);
    }

    #[test]
    fn test_last_equals_next_only_at_final_page() {
        let at_final = links("posts", 6, 150);
        assert_eq!(at_final.last, at_final.next);

        let mid = links("posts", 2, 150);
        assert_ne!(mid.last, mid.next);
    }

    #[test]
    fn test_single_page_collection_links_coincide() {
        let links = links("users", 1, 5);
        assert_eq!(links.first, links.prev);
        assert_eq!(links.last, links.next);
    }
}
