// ipscmon - core/loader.rs
//
// Parses inventory CSV text into classified repeater records.
// Core layer: accepts already-read content, never touches the filesystem
// directly (the app layer handles reading).

use crate::core::classify;
use crate::core::model::RepeaterRecord;
use crate::util::constants;
use crate::util::error::LoadError;
use std::path::Path;

/// Configuration for inventory loading.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Preamble lines skipped before the header row.
    pub skip_rows: usize,

    /// Maximum number of data rows accepted.
    pub max_rows: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            skip_rows: constants::DEFAULT_SKIP_ROWS,
            max_rows: constants::DEFAULT_MAX_ROWS,
        }
    }
}

/// Result of parsing one inventory source.
#[derive(Debug)]
pub struct LoadResult {
    /// Classified records in source row order.
    pub records: Vec<RepeaterRecord>,

    /// Data rows read from the source (including dropped ones).
    pub rows_read: usize,

    /// Rows dropped for lacking a parseable non-negative ID.
    pub rows_dropped: usize,
}

/// Parse inventory CSV content into classified records.
///
/// The first `config.skip_rows` lines are discarded (title block in the
/// source exports), the next line must be the header row, and every data
/// row after it becomes a record — unless its ID cell cannot be read as a
/// non-negative integer, in which case the row is dropped and counted.
/// Derived fields are computed here so a record is never observed
/// unclassified.
pub fn parse_inventory(
    content: &str,
    source: &Path,
    config: &LoaderConfig,
) -> Result<LoadResult, LoadError> {
    let body = skip_preamble(content, config.skip_rows);
    if body.trim().is_empty() {
        return Err(LoadError::MissingHeader {
            path: source.to_path_buf(),
            skip_rows: config.skip_rows,
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?
        .clone();

    let columns = ColumnMap::resolve(&headers, source)?;

    let mut records = Vec::new();
    let mut rows_read = 0;
    let mut rows_dropped = 0;

    for row in reader.records() {
        let row = row.map_err(|e| LoadError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?;
        rows_read += 1;
        if rows_read > config.max_rows {
            return Err(LoadError::TooManyRows {
                count: rows_read,
                max: config.max_rows,
            });
        }

        let Some(id) = columns.field(&row, columns.id).and_then(parse_id) else {
            tracing::debug!(row = rows_read, "Dropping row without parseable ID");
            rows_dropped += 1;
            continue;
        };

        let link_type = columns
            .field(&row, columns.link_type)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        records.push(RepeaterRecord {
            id,
            site: columns.field(&row, columns.site).unwrap_or("").to_string(),
            alias: columns.field(&row, columns.alias).unwrap_or("").to_string(),
            ip_ethernet: columns.field(&row, columns.ip).unwrap_or("").to_string(),
            rx_mhz: columns.opt_field(&row, columns.rx).and_then(parse_float),
            tx_mhz: columns.opt_field(&row, columns.tx).and_then(parse_float),
            udp_port: columns
                .opt_field(&row, columns.udp)
                .and_then(parse_id),
            system_group: classify::system_group(id),
            role: classify::role(link_type.as_deref()),
            link_type,
        });
    }

    tracing::info!(
        source = %source.display(),
        records = records.len(),
        dropped = rows_dropped,
        "Inventory parsed"
    );

    Ok(LoadResult {
        records,
        rows_read,
        rows_dropped,
    })
}

/// Drop the first `n` lines of `content`, returning the remainder.
fn skip_preamble(content: &str, n: usize) -> &str {
    let mut rest = content;
    for _ in 0..n {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}

/// Parse an ID cell as a non-negative integer.
///
/// Spreadsheet exports frequently render integer cells as floats
/// ("150.0"), so integral float values are accepted too. Anything else —
/// negatives, fractions, text — yields `None` and the row is dropped.
fn parse_id(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<u32>() {
        return Some(id);
    }
    match raw.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) => Some(v as u32),
        _ => None,
    }
}

/// Parse an optional numeric cell, treating blanks and junk as absent.
fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Resolved header-name → column-index mapping.
struct ColumnMap {
    id: usize,
    site: usize,
    alias: usize,
    ip: usize,
    link_type: usize,
    rx: Option<usize>,
    tx: Option<usize>,
    udp: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord, source: &Path) -> Result<Self, LoadError> {
        let find = |name: &'static str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: source.to_path_buf(),
                    column: name,
                })
        };
        let find_opt =
            |name: &'static str| -> Option<usize> { headers.iter().position(|h| h.trim() == name) };

        Ok(Self {
            id: find(constants::COLUMN_ID)?,
            site: find(constants::COLUMN_SITE)?,
            alias: find(constants::COLUMN_ALIAS)?,
            ip: find(constants::COLUMN_IP)?,
            link_type: find(constants::COLUMN_LINK_TYPE)?,
            rx: find_opt(constants::COLUMN_RX),
            tx: find_opt(constants::COLUMN_TX),
            udp: find_opt(constants::COLUMN_UDP),
        })
    }

    fn field<'a>(&self, row: &'a csv::StringRecord, idx: usize) -> Option<&'a str> {
        row.get(idx).map(str::trim)
    }

    fn opt_field<'a>(&self, row: &'a csv::StringRecord, idx: Option<usize>) -> Option<&'a str> {
        idx.and_then(|i| row.get(i)).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Role, SystemGroup};
    use std::path::PathBuf;

    const PREAMBLE: &str = "Radio System Inventory,,,,,\nExported 2024-06-01,,,,,\n,,,,,\n";
    const HEADER: &str = "ID,Cerro,Alias,IP Ethernet,Tipo Vinculo,RX (MHz),TX (MHz),Puerto UDP\n";

    fn src() -> PathBuf {
        PathBuf::from("inventory.csv")
    }

    fn parse(content: &str) -> Result<LoadResult, LoadError> {
        parse_inventory(content, &src(), &LoaderConfig::default())
    }

    #[test]
    fn test_basic_load_and_classification() {
        let content = format!(
            "{PREAMBLE}{HEADER}\
             150,Alpha,RPT-A,10.0.0.1,Master IPSC,170.1,175.1,50000\n\
             520,Beta,RPT-B,10.0.0.2,Peer,171.2,176.2,50001\n"
        );
        let result = parse(&content).unwrap();
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.rows_dropped, 0);

        let first = &result.records[0];
        assert_eq!(first.id, 150);
        assert_eq!(first.site, "Alpha");
        assert_eq!(first.system_group, SystemGroup::Prevention);
        assert_eq!(first.role, Role::Master);
        assert_eq!(first.rx_mhz, Some(170.1));
        assert_eq!(first.udp_port, Some(50000));

        let second = &result.records[1];
        assert_eq!(second.system_group, SystemGroup::Mine);
        assert_eq!(second.role, Role::Peer);
    }

    #[test]
    fn test_rows_without_parseable_id_are_dropped() {
        let content = format!(
            "{PREAMBLE}{HEADER}\
             150,Alpha,RPT-A,10.0.0.1,Master IPSC,,,\n\
             ,Beta,RPT-B,10.0.0.2,Peer,,,\n\
             broken,Gamma,RPT-C,10.0.0.3,Peer,,,\n\
             -5,Delta,RPT-D,10.0.0.4,Peer,,,\n"
        );
        let result = parse(&content).unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.rows_read, 4);
        assert_eq!(result.rows_dropped, 3);
    }

    #[test]
    fn test_float_rendered_ids_accepted() {
        let content = format!(
            "{PREAMBLE}{HEADER}\
             150.0,Alpha,RPT-A,10.0.0.1,Peer,,,\n\
             150.5,Beta,RPT-B,10.0.0.2,Peer,,,\n"
        );
        let result = parse(&content).unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].id, 150);
        assert_eq!(result.rows_dropped, 1);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let content = format!("{PREAMBLE}ID,Cerro,Alias,IP Ethernet\n150,Alpha,RPT-A,10.0.0.1\n");
        match parse(&content) {
            Err(LoadError::MissingColumn { column, .. }) => {
                assert_eq!(column, "Tipo Vinculo");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_after_preamble_is_missing_header() {
        let content = "title\n\n\n";
        match parse(content) {
            Err(LoadError::MissingHeader { skip_rows, .. }) => assert_eq!(skip_rows, 3),
            other => panic!("expected MissingHeader, got {other:?}"),
        }
    }

    #[test]
    fn test_header_without_rows_is_empty_not_error() {
        let content = format!("{PREAMBLE}{HEADER}");
        let result = parse(&content).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.rows_read, 0);
    }

    #[test]
    fn test_blank_link_type_is_peer() {
        let content = format!("{PREAMBLE}{HEADER}150,Alpha,RPT-A,10.0.0.1,,,,\n");
        let result = parse(&content).unwrap();
        assert_eq!(result.records[0].link_type, None);
        assert_eq!(result.records[0].role, Role::Peer);
    }

    #[test]
    fn test_row_cap_enforced() {
        let mut content = format!("{PREAMBLE}{HEADER}");
        for i in 0..5 {
            content.push_str(&format!("{},Alpha,RPT,10.0.0.1,Peer,,,\n", 100 + i));
        }
        let config = LoaderConfig {
            max_rows: 3,
            ..LoaderConfig::default()
        };
        match parse_inventory(&content, &src(), &config) {
            Err(LoadError::TooManyRows { max, .. }) => assert_eq!(max, 3),
            other => panic!("expected TooManyRows, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_is_idempotent() {
        let content = format!(
            "{PREAMBLE}{HEADER}\
             150,Alpha,RPT-A,10.0.0.1,Master IPSC,170.1,175.1,50000\n\
             160,Beta,RPT-B,10.0.0.2,Peer,,,\n"
        );
        let first = parse(&content).unwrap();
        let second = parse(&content).unwrap();
        assert_eq!(first.records, second.records);
    }
}
