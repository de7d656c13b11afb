// ipscmon - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Repeater record (normalised output of loading)
// =============================================================================

/// A single repeater from the inventory, normalised and classified.
///
/// This is the core data unit that flows through filtering, display,
/// and export. The derived fields (`system_group`, `role`) are computed
/// once at load time from `id` and `link_type`; they are never mutated
/// independently — a reload replaces the whole record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeaterRecord {
    /// Numeric repeater identifier from the source sheet. Rows without a
    /// parseable non-negative ID are dropped by the loader.
    pub id: u32,

    /// Physical location name (source column "Cerro").
    pub site: String,

    /// Display name of the device.
    pub alias: String,

    /// Ethernet IP address as free text (not validated as an address).
    pub ip_ethernet: String,

    /// Raw link-type text (source column "Tipo Vinculo"). `None` when the
    /// source cell was empty.
    pub link_type: Option<String>,

    /// Receive frequency in MHz, passed through unchanged.
    pub rx_mhz: Option<f64>,

    /// Transmit frequency in MHz, passed through unchanged.
    pub tx_mhz: Option<f64>,

    /// UDP port of the IPSC link, passed through unchanged.
    pub udp_port: Option<u32>,

    /// Logical system this repeater belongs to, derived from `id`.
    pub system_group: SystemGroup,

    /// Synchronisation role, derived from `link_type`.
    pub role: Role,
}

// =============================================================================
// System group
// =============================================================================

/// Logical system partition, derived solely from the repeater ID band.
///
/// Every ID maps to exactly one group; IDs outside the defined bands
/// (including the [300, 400) gap in the source numbering plan) fall
/// through to `Other`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum SystemGroup {
    Prevention,
    Stacking,
    Plant,
    Mine,
    Zalotrc,
    #[default]
    Other,
}

impl SystemGroup {
    /// Returns all variants in display order.
    pub fn all() -> &'static [SystemGroup] {
        &[
            SystemGroup::Prevention,
            SystemGroup::Stacking,
            SystemGroup::Plant,
            SystemGroup::Mine,
            SystemGroup::Zalotrc,
            SystemGroup::Other,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            SystemGroup::Prevention => "Prevention",
            SystemGroup::Stacking => "Stacking",
            SystemGroup::Plant => "Plant",
            SystemGroup::Mine => "Mine",
            SystemGroup::Zalotrc => "ZALOTRC",
            SystemGroup::Other => "Other",
        }
    }
}

impl std::fmt::Display for SystemGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Role
// =============================================================================

/// Synchronisation role within an IPSC system. The Master is the clock
/// reference for its group; everything else is a Peer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Role {
    Master,
    #[default]
    Peer,
}

impl Role {
    /// Returns both variants in display order (Master first).
    pub fn all() -> &'static [Role] {
        &[Role::Master, Role::Peer]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Master => "Master",
            Role::Peer => "Peer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Load outcome
// =============================================================================

/// Distinguishes "the file genuinely holds no rows" from "the file could
/// not be read or parsed". Both degrade to an empty record set — the UI
/// uses this flag to decide which warning to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadOutcome {
    /// Records were loaded successfully.
    Loaded,

    /// The source parsed cleanly but contained no usable rows.
    #[default]
    Empty,

    /// The source could not be read or parsed; the message is the
    /// user-facing description of the failure.
    Failed(String),
}

impl LoadOutcome {
    /// True when the outcome represents a load error (as opposed to an
    /// empty-but-valid source).
    pub fn is_failure(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

// =============================================================================
// Inventory summary
// =============================================================================

/// Aggregate statistics over a loaded record set, powering the KPI cards
/// and the load-summary dialog.
#[derive(Debug, Clone, Default)]
pub struct InventorySummary {
    /// Total repeater records loaded.
    pub total_records: usize,

    /// Distinct logical systems present.
    pub system_count: usize,

    /// Distinct physical sites present.
    pub site_count: usize,

    /// Records with role Master.
    pub master_count: usize,

    /// Records with role Peer.
    pub peer_count: usize,

    /// Record count per system group (groups with no records absent).
    pub records_by_group: HashMap<SystemGroup, usize>,

    /// Rows dropped during loading (missing or unparsable ID).
    pub rows_dropped: usize,

    /// Wall-clock load duration.
    pub duration: std::time::Duration,
}

impl InventorySummary {
    /// Compute summary statistics from a classified record set.
    pub fn from_records(records: &[RepeaterRecord]) -> Self {
        let mut records_by_group: HashMap<SystemGroup, usize> = HashMap::new();
        let mut sites = std::collections::HashSet::new();
        let mut masters = 0;

        for rec in records {
            *records_by_group.entry(rec.system_group).or_insert(0) += 1;
            sites.insert(rec.site.as_str());
            if rec.role == Role::Master {
                masters += 1;
            }
        }

        Self {
            total_records: records.len(),
            system_count: records_by_group.len(),
            site_count: sites.len(),
            master_count: masters,
            peer_count: records.len() - masters,
            records_by_group,
            rows_dropped: 0,
            duration: std::time::Duration::ZERO,
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// An immutable view of one complete load of the inventory source.
///
/// Snapshots are replaced wholesale by `InventoryRepository::reload`; they
/// are never mutated in place, so holding one across a reload is safe.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Classified records in source row order.
    pub records: Vec<RepeaterRecord>,

    /// Whether the load succeeded, found nothing, or failed.
    pub outcome: LoadOutcome,

    /// Aggregate statistics over `records`.
    pub summary: InventorySummary,

    /// When this snapshot was produced.
    pub loaded_at: Option<DateTime<Utc>>,

    /// Modification time of the source file at load time, used for
    /// staleness hints. `None` when the metadata was unavailable.
    pub source_modified: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: u32, site: &str, role: Role) -> RepeaterRecord {
        RepeaterRecord {
            id,
            site: site.to_string(),
            alias: format!("RPT-{id}"),
            ip_ethernet: format!("10.0.0.{id}"),
            link_type: None,
            rx_mhz: None,
            tx_mhz: None,
            udp_port: None,
            system_group: crate::core::classify::system_group(id),
            role,
        }
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![
            rec(150, "Alpha", Role::Master),
            rec(160, "Beta", Role::Peer),
            rec(450, "Alpha", Role::Master),
        ];
        let summary = InventorySummary::from_records(&records);
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.system_count, 2); // Prevention, Plant
        assert_eq!(summary.site_count, 2);
        assert_eq!(summary.master_count, 2);
        assert_eq!(summary.peer_count, 1);
        assert_eq!(
            summary.records_by_group.get(&SystemGroup::Prevention),
            Some(&2)
        );
    }

    #[test]
    fn test_summary_empty() {
        let summary = InventorySummary::from_records(&[]);
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.system_count, 0);
        assert!(summary.records_by_group.is_empty());
    }

    #[test]
    fn test_load_outcome_failure_flag() {
        assert!(LoadOutcome::Failed("boom".to_string()).is_failure());
        assert!(!LoadOutcome::Empty.is_failure());
        assert!(!LoadOutcome::Loaded.is_failure());
    }
}
