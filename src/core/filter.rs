// ipscmon - core/filter.rs
//
// Composable filter engine for repeater records.
// All active filters are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{RepeaterRecord, Role, SystemGroup};
use crate::util::error::FilterError;
use regex::Regex;
use std::collections::HashSet;

/// Complete filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// System groups to include (empty = all).
    pub groups: HashSet<SystemGroup>,

    /// Sites to include (empty = all).
    pub sites: HashSet<String>,

    /// Roles to include (empty = all).
    pub roles: HashSet<Role>,

    /// Substring text search over alias, site, and IP (case-insensitive).
    /// Empty = no filter.
    pub text_search: String,

    /// Compiled regex search over the same fields. None = no regex filter.
    pub regex_search: Option<Regex>,
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
            && self.sites.is_empty()
            && self.roles.is_empty()
            && self.text_search.is_empty()
            && self.regex_search.is_none()
    }

    /// Set the regex search pattern, compiling it.
    /// Returns an error if the pattern is invalid or too long.
    pub fn set_regex(&mut self, pattern: &str) -> Result<(), FilterError> {
        if pattern.is_empty() {
            self.regex_search = None;
            return Ok(());
        }
        if pattern.len() > crate::util::constants::MAX_REGEX_PATTERN_LENGTH {
            return Err(FilterError::InvalidRegex {
                pattern: pattern.to_string(),
                source: regex::Error::Syntax("pattern too long".to_string()),
            });
        }
        let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.regex_search = Some(regex);
        Ok(())
    }

    /// Create a quick-filter showing Masters only.
    pub fn masters_only() -> Self {
        let mut roles = HashSet::new();
        roles.insert(Role::Master);
        Self {
            roles,
            ..Default::default()
        }
    }
}

/// Apply filters to a slice of records, returning indices of matches.
///
/// Returns a Vec of indices into the original records slice. This avoids
/// copying records and lets the tables render the filtered view directly.
pub fn apply_filters(records: &[RepeaterRecord], filter: &FilterState) -> Vec<usize> {
    if filter.is_empty() {
        return (0..records.len()).collect();
    }

    let text_lower = filter.text_search.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| matches_all(rec, filter, &text_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single record matches all active filters.
fn matches_all(rec: &RepeaterRecord, filter: &FilterState, text_lower: &str) -> bool {
    if !filter.groups.is_empty() && !filter.groups.contains(&rec.system_group) {
        return false;
    }

    if !filter.sites.is_empty() && !filter.sites.contains(&rec.site) {
        return false;
    }

    if !filter.roles.is_empty() && !filter.roles.contains(&rec.role) {
        return false;
    }

    // Text search (case-insensitive substring over the display fields).
    if !text_lower.is_empty() {
        let haystack = format!(
            "{} {} {} {}",
            rec.alias, rec.site, rec.ip_ethernet, rec.id
        )
        .to_lowercase();
        if !haystack.contains(text_lower) {
            return false;
        }
    }

    // Regex search over the same fields, case preserved.
    if let Some(ref regex) = filter.regex_search {
        let haystack = format!("{} {} {} {}", rec.alias, rec.site, rec.ip_ethernet, rec.id);
        if !regex.is_match(&haystack) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;

    fn rec(id: u32, site: &str, alias: &str, link_type: &str) -> RepeaterRecord {
        RepeaterRecord {
            id,
            site: site.to_string(),
            alias: alias.to_string(),
            ip_ethernet: format!("10.0.0.{id}"),
            link_type: Some(link_type.to_string()),
            rx_mhz: None,
            tx_mhz: None,
            udp_port: None,
            system_group: classify::system_group(id),
            role: classify::role(Some(link_type)),
        }
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let records = vec![
            rec(150, "Alpha", "RPT-A", "Master IPSC"),
            rec(450, "Beta", "RPT-B", "Peer"),
        ];
        let result = apply_filters(&records, &FilterState::default());
        assert_eq!(result, vec![0, 1]);
    }

    #[test]
    fn test_group_filter() {
        let records = vec![
            rec(150, "Alpha", "RPT-A", "Peer"),
            rec(450, "Beta", "RPT-B", "Peer"),
            rec(160, "Gamma", "RPT-C", "Peer"),
        ];
        let filter = FilterState {
            groups: [SystemGroup::Prevention].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&records, &filter), vec![0, 2]);
    }

    #[test]
    fn test_masters_only_quick_filter() {
        let records = vec![
            rec(150, "Alpha", "RPT-A", "Master IPSC"),
            rec(151, "Beta", "RPT-B", "Peer"),
        ];
        let result = apply_filters(&records, &FilterState::masters_only());
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_text_search_case_insensitive() {
        let records = vec![
            rec(150, "Cerro ALTO", "RPT-A", "Peer"),
            rec(151, "Valley", "RPT-B", "Peer"),
        ];
        let filter = FilterState {
            text_search: "alto".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&records, &filter), vec![0]);
    }

    #[test]
    fn test_regex_filter() {
        let records = vec![
            rec(150, "Alpha", "RPT-A", "Peer"),
            rec(151, "Alpha", "AUX-9", "Peer"),
        ];
        let mut filter = FilterState::default();
        filter.set_regex(r"^RPT-\w").unwrap();
        assert_eq!(apply_filters(&records, &filter), vec![0]);
    }

    #[test]
    fn test_combined_filters() {
        let records = vec![
            rec(150, "Alpha", "RPT-A", "Master IPSC"),
            rec(151, "Alpha", "RPT-B", "Peer"),
            rec(450, "Alpha", "RPT-C", "Master IPSC"),
        ];
        let filter = FilterState {
            groups: [SystemGroup::Prevention].into_iter().collect(),
            roles: [Role::Master].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&records, &filter), vec![0]);
    }

    #[test]
    fn test_invalid_regex() {
        let mut filter = FilterState::default();
        assert!(filter.set_regex("[invalid").is_err());
    }

    #[test]
    fn test_clearing_regex() {
        let mut filter = FilterState::default();
        filter.set_regex("RPT").unwrap();
        filter.set_regex("").unwrap();
        assert!(filter.regex_search.is_none());
    }
}
