// ipscmon - core/health.rs
//
// Configuration health audit over a loaded inventory.
// Advisory findings only: anomalies never block loading or rendering.

use crate::core::model::{RepeaterRecord, Role, SystemGroup};
use std::collections::BTreeMap;

/// Severity of a health finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl IssueSeverity {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            IssueSeverity::Error => "Error",
            IssueSeverity::Warning => "Warning",
        }
    }
}

/// One configuration anomaly detected by the audit.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthIssue {
    /// A system group has no Master — its peers have no clock reference.
    NoMaster { group: SystemGroup },

    /// A system group has more than one Master — the clock reference is
    /// ambiguous. Sites are listed in stored record order.
    MultipleMasters {
        group: SystemGroup,
        sites: Vec<String>,
    },

    /// The same Ethernet IP appears on more than one repeater.
    DuplicateIp { ip: String, aliases: Vec<String> },
}

impl HealthIssue {
    /// Severity classification for display ordering and colouring.
    pub fn severity(&self) -> IssueSeverity {
        match self {
            HealthIssue::NoMaster { .. } => IssueSeverity::Error,
            HealthIssue::MultipleMasters { .. } => IssueSeverity::Warning,
            HealthIssue::DuplicateIp { .. } => IssueSeverity::Error,
        }
    }

    /// One-line human-readable description.
    pub fn describe(&self) -> String {
        match self {
            HealthIssue::NoMaster { group } => {
                format!("System '{group}' has no Master repeater")
            }
            HealthIssue::MultipleMasters { group, sites } => format!(
                "System '{group}' has {} Masters ({})",
                sites.len(),
                sites.join(", ")
            ),
            HealthIssue::DuplicateIp { ip, aliases } => format!(
                "IP {ip} is assigned to {} repeaters ({})",
                aliases.len(),
                aliases.join(", ")
            ),
        }
    }
}

/// Run all health checks over a record set.
///
/// Checks are independent and all applicable findings are reported
/// together. Groups that have no records at all are not flagged — only a
/// populated group can be missing its Master. Empty input yields no
/// findings.
pub fn audit(records: &[RepeaterRecord]) -> Vec<HealthIssue> {
    let mut issues = Vec::new();

    // Master count per populated group, preserving stored site order.
    let mut master_sites: BTreeMap<SystemGroup, Vec<String>> = BTreeMap::new();
    for rec in records {
        let sites = master_sites.entry(rec.system_group).or_default();
        if rec.role == Role::Master {
            sites.push(rec.site.clone());
        }
    }
    for (group, sites) in &master_sites {
        match sites.len() {
            0 => issues.push(HealthIssue::NoMaster { group: *group }),
            1 => {}
            _ => issues.push(HealthIssue::MultipleMasters {
                group: *group,
                sites: sites.clone(),
            }),
        }
    }

    // Duplicate Ethernet IPs, keyed deterministically.
    let mut by_ip: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for rec in records {
        if !rec.ip_ethernet.is_empty() {
            by_ip
                .entry(rec.ip_ethernet.as_str())
                .or_default()
                .push(rec.alias.as_str());
        }
    }
    for (ip, aliases) in &by_ip {
        if aliases.len() > 1 {
            issues.push(HealthIssue::DuplicateIp {
                ip: (*ip).to_string(),
                aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;

    fn rec(id: u32, site: &str, ip: &str, link_type: &str) -> RepeaterRecord {
        RepeaterRecord {
            id,
            site: site.to_string(),
            alias: format!("RPT-{id}"),
            ip_ethernet: ip.to_string(),
            link_type: Some(link_type.to_string()),
            rx_mhz: None,
            tx_mhz: None,
            udp_port: None,
            system_group: classify::system_group(id),
            role: classify::role(Some(link_type)),
        }
    }

    #[test]
    fn test_healthy_inventory_has_no_findings() {
        let records = vec![
            rec(150, "Alpha", "10.0.0.1", "Master IPSC"),
            rec(151, "Beta", "10.0.0.2", "Peer"),
        ];
        assert!(audit(&records).is_empty());
    }

    #[test]
    fn test_no_master_is_error() {
        let records = vec![
            rec(150, "Alpha", "10.0.0.1", "Peer"),
            rec(151, "Beta", "10.0.0.2", "Peer"),
        ];
        let issues = audit(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0],
            HealthIssue::NoMaster {
                group: SystemGroup::Prevention
            }
        );
        assert_eq!(issues[0].severity(), IssueSeverity::Error);
    }

    #[test]
    fn test_multiple_masters_is_warning() {
        let records = vec![
            rec(150, "Alpha", "10.0.0.1", "Master IPSC"),
            rec(151, "Beta", "10.0.0.2", "Master IPSC"),
        ];
        let issues = audit(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0],
            HealthIssue::MultipleMasters {
                group: SystemGroup::Prevention,
                sites: vec!["Alpha".to_string(), "Beta".to_string()],
            }
        );
        assert_eq!(issues[0].severity(), IssueSeverity::Warning);
    }

    #[test]
    fn test_duplicate_ip_is_error() {
        let records = vec![
            rec(150, "Alpha", "10.0.0.9", "Master IPSC"),
            rec(450, "Beta", "10.0.0.9", "Master IPSC"),
        ];
        let issues = audit(&records);
        assert_eq!(issues.len(), 1);
        match &issues[0] {
            HealthIssue::DuplicateIp { ip, aliases } => {
                assert_eq!(ip, "10.0.0.9");
                assert_eq!(aliases.len(), 2);
            }
            other => panic!("expected DuplicateIp, got {other:?}"),
        }
    }

    #[test]
    fn test_all_checks_reported_together() {
        // One group missing a master, another with two, plus a shared IP.
        let records = vec![
            rec(150, "Alpha", "10.0.0.1", "Peer"),
            rec(450, "Beta", "10.0.0.2", "Master IPSC"),
            rec(451, "Gamma", "10.0.0.2", "Master IPSC"),
        ];
        let issues = audit(&records);
        assert_eq!(issues.len(), 3);
        assert!(issues
            .iter()
            .any(|i| matches!(i, HealthIssue::NoMaster { .. })));
        assert!(issues
            .iter()
            .any(|i| matches!(i, HealthIssue::MultipleMasters { .. })));
        assert!(issues
            .iter()
            .any(|i| matches!(i, HealthIssue::DuplicateIp { .. })));
    }

    #[test]
    fn test_empty_input_yields_no_findings() {
        assert!(audit(&[]).is_empty());
    }

    #[test]
    fn test_blank_ips_are_not_duplicates() {
        let records = vec![
            rec(150, "Alpha", "", "Master IPSC"),
            rec(151, "Beta", "", "Peer"),
        ];
        assert!(audit(&records).is_empty());
    }
}
