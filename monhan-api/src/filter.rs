//! Filter predicates over record fields
//!
//! The filter endpoints accept comma-separated value lists for array-typed
//! attributes (`elements=fire,water`) together with an `and`/`or` operator,
//! plus exact-match scalar filters. This module turns those raw query values
//! into predicates; everything here is pure and order-preserving, and an
//! empty result set is never an error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Combinator for multi-valued membership filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    /// Every supplied value must be a member of the record's attribute
    And,
    /// At least one supplied value must be a member
    #[default]
    Or,
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

/// Set-membership predicate over an array-valued record attribute.
///
/// Built from a raw comma-separated query value. Tokens are trimmed and
/// lower-cased; empty tokens are kept as-is — they never match anything,
/// which is the correct edge behavior, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipFilter {
    values: Vec<String>,
    operator: FilterOperator,
}

impl MembershipFilter {
    /// Parse a raw comma-separated value list.
    pub fn parse(raw: &str, operator: FilterOperator) -> Self {
        Self::from_values(raw.split(','), operator)
    }

    /// Build from already-split values (e.g. another record's attribute).
    pub fn from_values<I, S>(values: I, operator: FilterOperator) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .collect();
        Self { values, operator }
    }

    /// Evaluate the predicate against a record's attribute values.
    ///
    /// The attribute is projected to lowercase; a missing attribute is the
    /// empty set (callers pass an empty slice).
    pub fn matches<S: AsRef<str>>(&self, attribute: &[S]) -> bool {
        let members: Vec<String> = attribute
            .iter()
            .map(|v| v.as_ref().to_lowercase())
            .collect();
        match self.operator {
            FilterOperator::And => self.values.iter().all(|v| members.contains(v)),
            FilterOperator::Or => self.values.iter().any(|v| members.contains(v)),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }
}

/// Case-insensitive exact string equality, the scalar-filter primitive.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive membership test for a single value.
pub fn contains_ignore_case<S: AsRef<str>>(values: &[S], needle: &str) -> bool {
    values.iter().any(|v| eq_ignore_case(v.as_ref(), needle))
}

/// Parse a boolean-like query value: `"true"` in any casing is `true`,
/// anything else — including malformed input — is silently `false`.
pub fn parse_flag(raw: &str) -> bool {
    raw.to_lowercase() == "true"
}
