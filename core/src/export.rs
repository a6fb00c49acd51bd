//! # Exporters
//!
//! Renders reports as JSON, CSV or plain text. CSV and text work on the flattened
//! [`BlockTable`] rows; JSON serializes the whole report.

use std::fmt::{self, Write};
use std::io;
use std::string::FromUtf8Error;

use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use thiserror::Error;

use crate::report::{BlockInfo, BlockTable};

/// Column headers of the CSV export, in order.
pub const CSV_COLUMNS: [&str; 8] = [
    "network_address",
    "subnet_mask",
    "prefix_length",
    "broadcast_address",
    "host_range_start",
    "host_range_end",
    "number_of_hosts",
    "cidr",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("Invalid CSV delimiter {0:?}")]
    Delimiter(char),
}

/// Pretty JSON with two-space indentation.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// CSV with a header row and CRLF line endings. An empty table renders as an empty string.
///
/// The delimiter must be a single ASCII character other than a quote or a line break.
pub fn to_csv(table: &dyn BlockTable, delimiter: char) -> Result<String, ExportError> {
    let delim: u8 = match u8::try_from(delimiter) {
        Ok(byte) if byte.is_ascii() && !matches!(byte, b'"' | b'\r' | b'\n') => byte,
        _ => return Err(ExportError::Delimiter(delimiter)),
    };

    let rows = table.rows();
    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = WriterBuilder::new()
        .delimiter(delim)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    wtr.write_record(CSV_COLUMNS)?;
    for info in rows {
        wtr.write_record(csv_fields(info))?;
    }

    let data: Vec<u8> = wtr.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(data)?)
}

/// Numbered, human readable listing of every row.
pub fn to_text(table: &dyn BlockTable) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    render_text(&mut out, table).map(|()| out).unwrap_or_default()
}

fn render_text(out: &mut String, table: &dyn BlockTable) -> fmt::Result {
    for (i, info) in table.rows().iter().enumerate() {
        writeln!(out, "Subnet #{}:", i + 1)?;
        writeln!(out, "  Network address: {}", info.network)?;
        writeln!(out, "  Subnet mask: {}", info.netmask)?;
        writeln!(out, "  Prefix length: {}", info.prefixlen)?;
        writeln!(out, "  Broadcast address: {}", info.broadcast)?;
        writeln!(
            out,
            "  Usable host range: {} - {}",
            info.host_range_start, info.host_range_end
        )?;
        writeln!(out, "  Usable hosts: {}", info.usable_addresses)?;
        writeln!(out, "  CIDR: {}", info.cidr)?;
    }
    writeln!(out)
}

fn csv_fields(info: &BlockInfo) -> [String; 8] {
    [
        info.network.to_string(),
        info.netmask.to_string(),
        info.prefixlen.to_string(),
        info.broadcast.to_string(),
        info.host_range_start.to_string(),
        info.host_range_end.to_string(),
        info.usable_addresses.to_string(),
        info.cidr.to_string(),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
