//! Semver facade providing high-level version operations

use crate::Version;

/// Operations over lists of version strings
pub struct Semver;

impl Semver {
    /// Check whether a string is a valid version
    pub fn is_valid(version: &str) -> bool {
        Version::parse(version).is_ok()
    }

    /// Sort versions in ascending order, dropping strings that don't parse
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    /// Highest version among the parsable inputs
    pub fn max(versions: &[&str]) -> Option<Version> {
        Self::parse_all(versions).into_iter().max()
    }

    /// Lowest version among the parsable inputs
    pub fn min(versions: &[&str]) -> Option<Version> {
        Self::parse_all(versions).into_iter().min()
    }

    fn parse_all(versions: &[&str]) -> Vec<Version> {
        versions
            .iter()
            .filter_map(|v| match Version::parse(v) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    log::debug!("Skipping invalid version {:?}: {}", v, err);
                    None
                }
            })
            .collect()
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed = Self::parse_all(versions);

        // stable sort keeps input order for equal versions
        if ascending {
            parsed.sort();
        } else {
            parsed.sort_by(|a, b| b.cmp(a));
        }

        parsed.iter().map(Version::to_string).collect()
    }
}
