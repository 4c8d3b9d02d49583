//! Pagination window arithmetic and page-link construction
//!
//! List endpoints share the same envelope: `{count, next, previous, results}`
//! where `next`/`previous` are relative URLs carrying only `limit` and
//! `offset`. Filter endpoints deliberately do not paginate; they return the
//! full matching set.

use serde::{Deserialize, Serialize};

/// Default page size when `limit` is absent.
pub const DEFAULT_LIMIT: usize = 20;

/// Raw pagination query parameters.
///
/// Deserialization into unsigned integers is the validation boundary:
/// negative or non-numeric values are rejected by the extractor and never
/// reach the windowing arithmetic.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl PageQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }
}

/// Paged response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total collection size, independent of the window
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Slice one page out of `records` and build the adjacent-page links.
///
/// The window is clamped: an offset at or beyond the end yields an empty
/// result set, never an error. `next` exists iff the window stops short of
/// the end; `previous` exists iff the offset is non-zero.
pub fn paginate<T: Clone>(records: &[T], query: &PageQuery, base_path: &str) -> Page<T> {
    let limit = query.limit();
    let offset = query.offset();
    let count = records.len();

    let end = offset.saturating_add(limit).min(count);
    let results = if offset >= count {
        Vec::new()
    } else {
        records[offset..end].to_vec()
    };

    let next = (offset.saturating_add(limit) < count)
        .then(|| format!("{base_path}?limit={limit}&offset={}", offset + limit));
    let previous = (offset > 0).then(|| {
        format!(
            "{base_path}?limit={limit}&offset={}",
            offset.saturating_sub(limit)
        )
    });

    Page {
        count,
        next,
        previous,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn defaults_apply_when_params_absent() {
        let query = PageQuery::default();
        assert_eq!(query.limit(), DEFAULT_LIMIT);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn first_page_has_no_previous() {
        let page = paginate(&records(50), &PageQuery::default(), "/api/monsters");
        assert_eq!(page.count, 50);
        assert_eq!(page.results.len(), 20);
        assert_eq!(page.previous, None);
        assert_eq!(
            page.next.as_deref(),
            Some("/api/monsters?limit=20&offset=20")
        );
    }

    #[test]
    fn middle_page_links_both_ways() {
        let query = PageQuery {
            limit: Some(10),
            offset: Some(20),
        };
        let page = paginate(&records(50), &query, "/api/monsters");
        assert_eq!(page.results.len(), 10);
        assert_eq!(page.results[0], 20);
        assert_eq!(
            page.previous.as_deref(),
            Some("/api/monsters?limit=10&offset=10")
        );
        assert_eq!(
            page.next.as_deref(),
            Some("/api/monsters?limit=10&offset=30")
        );
    }

    #[test]
    fn last_page_has_no_next() {
        let query = PageQuery {
            limit: Some(10),
            offset: Some(40),
        };
        let page = paginate(&records(50), &query, "/api/monsters");
        assert_eq!(page.results.len(), 10);
        assert_eq!(page.next, None);
        assert_eq!(
            page.previous.as_deref(),
            Some("/api/monsters?limit=10&offset=30")
        );
    }

    #[test]
    fn offset_beyond_total_yields_empty_window() {
        let query = PageQuery {
            limit: None,
            offset: Some(100),
        };
        let page = paginate(&records(2), &query, "/api/quests");
        assert!(page.results.is_empty());
        assert_eq!(page.count, 2);
        assert_eq!(page.next, None);
        assert_eq!(
            page.previous.as_deref(),
            Some("/api/quests?limit=20&offset=80")
        );
    }

    #[test]
    fn previous_offset_clamps_to_zero() {
        let query = PageQuery {
            limit: Some(20),
            offset: Some(10),
        };
        let page = paginate(&records(50), &query, "/api/monsters");
        assert_eq!(
            page.previous.as_deref(),
            Some("/api/monsters?limit=20&offset=0")
        );
    }

    #[test]
    fn boundary_next_is_null_when_window_reaches_end() {
        let query = PageQuery {
            limit: Some(25),
            offset: Some(25),
        };
        let page = paginate(&records(50), &query, "/api/monsters");
        assert_eq!(page.next, None);
        assert_eq!(page.results.len(), 25);
    }

    #[test]
    fn huge_offset_does_not_overflow() {
        let query = PageQuery {
            limit: Some(1),
            offset: Some(usize::MAX),
        };
        let page = paginate(&records(50), &query, "/api/monsters");
        assert!(page.results.is_empty());
        assert_eq!(page.count, 50);
        assert_eq!(page.next, None);
        assert_eq!(
            page.previous.as_deref(),
            Some(format!("/api/monsters?limit=1&offset={}", usize::MAX - 1).as_str())
        );
    }

    #[test]
    fn empty_collection_is_valid() {
        let page = paginate(&records(0), &PageQuery::default(), "/api/endemic-life");
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
    }

    #[test]
    fn envelope_serializes_null_links() {
        let page = paginate(&records(1), &PageQuery::default(), "/api/monsters");
        let json = serde_json::to_value(&page).unwrap();
        assert!(json["next"].is_null());
        assert!(json["previous"].is_null());
        assert_eq!(json["count"], 1);
    }
}
