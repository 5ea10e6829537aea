//! Version precedence

use std::cmp::Ordering;

use crate::operator::Operator;
use crate::version::{Identifier, Version};

/// Compare two versions by precedence.
///
/// Major, minor and patch decide first. A normal release outranks any
/// pre-release of the same core. Build metadata is only consulted when
/// everything else is equal, with absent metadata ranking lowest.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| compare_pre_release(&a.pre_release, &b.pre_release))
        .then_with(|| compare_identifier_lists(&a.build, &b.build))
}

/// Tests precedence of `a` over `b`
pub fn less(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Less
}

/// Compare pre-release lists. An empty list is a normal release and ranks
/// above any non-empty one.
pub fn compare_pre_release(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_identifier_lists(a, b),
    }
}

/// Element-wise comparison; when one list is a prefix of the other the
/// longer (more specific) one is greater.
fn compare_identifier_lists(a: &[Identifier], b: &[Identifier]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| compare_identifiers(x, y))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Compare two identifiers.
///
/// All-digit identifiers compare numerically and always rank below
/// alphanumeric ones; everything else compares in ASCII order.
pub fn compare_identifiers(a: &Identifier, b: &Identifier) -> Ordering {
    match (a.is_numeric(), b.is_numeric()) {
        (true, true) => compare_numeric(a.as_str(), b.as_str()),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_str().cmp(b.as_str()),
    }
}

/// Numeric comparison of digit strings of any length. Equal values with
/// different spellings (`001` and `1`, only possible in build metadata) fall
/// back to byte order so the result stays consistent with equality.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a_digits = a.trim_start_matches('0');
    let b_digits = b.trim_start_matches('0');
    a_digits
        .len()
        .cmp(&b_digits.len())
        .then_with(|| a_digits.cmp(b_digits))
        .then_with(|| a.cmp(b))
}

/// Comparison helpers over parsed versions
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &Version, operator: Operator, version2: &Version) -> bool {
        operator.holds(compare(version1, version2))
    }
}
