// ipscmon - core/classify.rs
//
// Classification of repeaters into system groups and synchronisation roles.
// Both functions are total, stateless, and order-independent: pure
// functions of a single field.

use crate::core::model::{Role, SystemGroup};

/// Map a repeater ID to its logical system group.
///
/// The ID bands are evaluated as ordered half-open intervals, first match
/// wins. The [300, 400) band is deliberately unassigned in the source
/// numbering plan and resolves to `Other` — do not "fix" this without
/// confirming the plan has changed.
pub fn system_group(id: u32) -> SystemGroup {
    match id {
        100..=199 => SystemGroup::Prevention,
        200..=299 => SystemGroup::Stacking,
        400..=499 => SystemGroup::Plant,
        500..=599 => SystemGroup::Mine,
        600..=699 => SystemGroup::Zalotrc,
        _ => SystemGroup::Other,
    }
}

/// Map a raw link-type cell to a synchronisation role.
///
/// The source sheet marks masters with strings like "Master IPSC" or
/// "Link Master"; the match is a case-sensitive substring test to mirror
/// the sheet's own convention ("master" in lowercase is NOT a master).
/// Empty or absent cells imply Peer.
pub fn role(link_type: Option<&str>) -> Role {
    match link_type {
        Some(text) if text.contains("Master") => Role::Master,
        _ => Role::Peer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_group_bands() {
        assert_eq!(system_group(100), SystemGroup::Prevention);
        assert_eq!(system_group(150), SystemGroup::Prevention);
        assert_eq!(system_group(199), SystemGroup::Prevention);
        assert_eq!(system_group(200), SystemGroup::Stacking);
        assert_eq!(system_group(299), SystemGroup::Stacking);
        assert_eq!(system_group(400), SystemGroup::Plant);
        assert_eq!(system_group(500), SystemGroup::Mine);
        assert_eq!(system_group(600), SystemGroup::Zalotrc);
        assert_eq!(system_group(699), SystemGroup::Zalotrc);
    }

    #[test]
    fn test_system_group_gap_and_edges() {
        // The [300, 400) band is unassigned on purpose.
        assert_eq!(system_group(300), SystemGroup::Other);
        assert_eq!(system_group(350), SystemGroup::Other);
        assert_eq!(system_group(399), SystemGroup::Other);
        // Below, between, and above the defined bands.
        assert_eq!(system_group(0), SystemGroup::Other);
        assert_eq!(system_group(99), SystemGroup::Other);
        assert_eq!(system_group(700), SystemGroup::Other);
        assert_eq!(system_group(u32::MAX), SystemGroup::Other);
    }

    #[test]
    fn test_system_group_is_total() {
        // Every ID resolves to one of the six variants without panicking.
        for id in [0, 1, 99, 100, 299, 300, 399, 400, 699, 700, 10_000] {
            let group = system_group(id);
            assert!(SystemGroup::all().contains(&group));
        }
    }

    #[test]
    fn test_role_substring_match() {
        assert_eq!(role(Some("Master IPSC")), Role::Master);
        assert_eq!(role(Some("Link Master")), Role::Master);
        assert_eq!(role(Some("Master")), Role::Master);
        assert_eq!(role(Some("Peer")), Role::Peer);
        assert_eq!(role(Some("Slave")), Role::Peer);
    }

    #[test]
    fn test_role_case_sensitive() {
        // Lowercase "master" is not a master — the sheet convention is exact.
        assert_eq!(role(Some("master")), Role::Peer);
        assert_eq!(role(Some("MASTER")), Role::Peer);
    }

    #[test]
    fn test_role_absent_or_empty_is_peer() {
        assert_eq!(role(None), Role::Peer);
        assert_eq!(role(Some("")), Role::Peer);
    }
}
