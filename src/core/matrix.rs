// ipscmon - core/matrix.rs
//
// Cross-tabulation of system group × site into the dominant role, plus
// master-location lookup. Pure logic over an in-memory record slice.

use crate::core::model::{RepeaterRecord, Role, SystemGroup};
use std::collections::BTreeMap;

/// One axis-sorted pivot of the inventory: (system group, site) → dominant
/// role. Pairs with no records are absent; the renderer shows those as "—".
pub type RoleMatrix = BTreeMap<(SystemGroup, String), Role>;

/// Build the role matrix for a record set.
///
/// A cell containing at least one Master reports Master, regardless of how
/// many Peers share it — a mixed cell is not an error here (the health
/// audit reports multi-master anomalies separately). The result is a pure
/// function of the record set: row order never changes the output, which
/// the `BTreeMap` keying also makes deterministic to iterate.
pub fn build_matrix(records: &[RepeaterRecord]) -> RoleMatrix {
    let mut matrix = RoleMatrix::new();
    for rec in records {
        let cell = matrix
            .entry((rec.system_group, rec.site.clone()))
            .or_insert(Role::Peer);
        if rec.role == Role::Master {
            *cell = Role::Master;
        }
    }
    matrix
}

/// Sorted list of distinct sites in a matrix (the pivot's column axis).
pub fn matrix_sites(matrix: &RoleMatrix) -> Vec<String> {
    let mut sites: Vec<String> = matrix.keys().map(|(_, site)| site.clone()).collect();
    sites.sort();
    sites.dedup();
    sites
}

/// Sorted list of distinct system groups in a matrix (the pivot's row axis).
pub fn matrix_groups(matrix: &RoleMatrix) -> Vec<SystemGroup> {
    let mut groups: Vec<SystemGroup> = matrix.keys().map(|(group, _)| *group).collect();
    groups.sort();
    groups.dedup();
    groups
}

/// Find the site hosting the Master of a system group.
///
/// Returns the site of the first Master in stored record order, or `None`
/// when the group has no Master. When a group holds several Masters (a
/// misconfiguration) the first one still wins here; callers that care get
/// the full picture from `health::audit`.
pub fn find_master_site(records: &[RepeaterRecord], group: SystemGroup) -> Option<&str> {
    records
        .iter()
        .find(|rec| rec.system_group == group && rec.role == Role::Master)
        .map(|rec| rec.site.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;

    fn rec(id: u32, site: &str, link_type: &str) -> RepeaterRecord {
        RepeaterRecord {
            id,
            site: site.to_string(),
            alias: format!("RPT-{id}"),
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
    fn test_matrix_basic_cells() {
        let records = vec![rec(150, "Alpha", "Master IPSC"), rec(160, "Beta", "Peer")];
        let matrix = build_matrix(&records);
        assert_eq!(
            matrix.get(&(SystemGroup::Prevention, "Alpha".to_string())),
            Some(&Role::Master)
        );
        assert_eq!(
            matrix.get(&(SystemGroup::Prevention, "Beta".to_string())),
            Some(&Role::Peer)
        );
        // No records, no cell.
        assert_eq!(
            matrix.get(&(SystemGroup::Mine, "Alpha".to_string())),
            None
        );
    }

    #[test]
    fn test_matrix_master_dominates_mixed_cell() {
        let records = vec![
            rec(150, "Alpha", "Peer"),
            rec(151, "Alpha", "Master IPSC"),
            rec(152, "Alpha", "Peer"),
        ];
        let matrix = build_matrix(&records);
        assert_eq!(
            matrix.get(&(SystemGroup::Prevention, "Alpha".to_string())),
            Some(&Role::Master)
        );
    }

    #[test]
    fn test_matrix_order_independent() {
        let forward = vec![
            rec(150, "Alpha", "Peer"),
            rec(151, "Alpha", "Master IPSC"),
            rec(450, "Beta", "Peer"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(build_matrix(&forward), build_matrix(&reversed));
    }

    #[test]
    fn test_matrix_empty_input() {
        assert!(build_matrix(&[]).is_empty());
    }

    #[test]
    fn test_matrix_axes() {
        let records = vec![
            rec(150, "Beta", "Peer"),
            rec(450, "Alpha", "Master IPSC"),
            rec(460, "Beta", "Peer"),
        ];
        let matrix = build_matrix(&records);
        assert_eq!(matrix_sites(&matrix), vec!["Alpha", "Beta"]);
        assert_eq!(
            matrix_groups(&matrix),
            vec![SystemGroup::Prevention, SystemGroup::Plant]
        );
    }

    #[test]
    fn test_find_master_site() {
        let records = vec![
            rec(150, "Alpha", "Master IPSC"),
            rec(160, "Beta", "Peer"),
            rec(450, "Gamma", "Peer"),
        ];
        assert_eq!(
            find_master_site(&records, SystemGroup::Prevention),
            Some("Alpha")
        );
        // Plant has only peers.
        assert_eq!(find_master_site(&records, SystemGroup::Plant), None);
    }

    #[test]
    fn test_find_master_site_first_in_stored_order() {
        let records = vec![
            rec(150, "First", "Master IPSC"),
            rec(151, "Second", "Master IPSC"),
        ];
        assert_eq!(
            find_master_site(&records, SystemGroup::Prevention),
            Some("First")
        );
    }
}
