//! Single-record exact-match lookup
//!
//! Stateless and deterministic: the first record in store order whose key
//! matches case-insensitively wins. Duplicate keys in the source data are
//! not deduplicated; callers always get the earliest record.

use crate::filter::eq_ignore_case;

/// Find the first record whose projected key equals `needle`,
/// case-insensitively.
pub fn find_by_key<'a, T, K>(records: &'a [T], key: K, needle: &str) -> Option<&'a T>
where
    K: Fn(&T) -> &str,
{
    records.iter().find(|record| eq_ignore_case(key(record), needle))
}
