// ipscmon - core/export.rs
//
// CSV and JSON export of filtered repeater records.
// Core layer: writes to any Write trait object.

use crate::core::model::RepeaterRecord;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export records to CSV format.
///
/// Writes: id, alias, site, system, role, ip_ethernet, rx_mhz, tx_mhz, udp_port
pub fn export_csv<W: Write>(
    records: &[RepeaterRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "alias",
            "site",
            "system",
            "role",
            "ip_ethernet",
            "rx_mhz",
            "tx_mhz",
            "udp_port",
        ])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for rec in records {
        csv_writer
            .write_record([
                &rec.id.to_string(),
                &rec.alias,
                &rec.site,
                rec.system_group.label(),
                rec.role.label(),
                &rec.ip_ethernet,
                &rec.rx_mhz.map(|v| v.to_string()).unwrap_or_default(),
                &rec.tx_mhz.map(|v| v.to_string()).unwrap_or_default(),
                &rec.udp_port.map(|v| v.to_string()).unwrap_or_default(),
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export records to JSON format (array of objects, derived fields included).
pub fn export_json<W: Write>(
    records: &[RepeaterRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}
