//! Terminal output utilities.

use super::row::BlockRow;
use colored::Colorize;
use std::io::{self, Write};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Write rows as aligned plain text, highlighting the CIDR when `color` is set.
pub fn write_plain<W: Write>(out: &mut W, rows: &[BlockRow], color: bool) -> io::Result<()> {
    for row in rows {
        let cidr = format!("{:<18}", row.cidr);
        let cidr = if color {
            cidr.green().bold().to_string()
        } else {
            cidr
        };
        writeln!(
            out,
            "{cidr} {first:>15} - {last:<15} mask {netmask:<15} {size:>10} addrs {hosts:>10} hosts",
            first = row.first,
            last = row.last,
            netmask = row.netmask,
            size = row.size,
            hosts = row.hosts,
        )?;
    }
    Ok(())
}

/// Write a single value line, e.g. a prefix length.
pub fn write_value<W: Write>(out: &mut W, label: &str, value: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{}: {}", label, value.yellow().bold())
    } else {
        writeln!(out, "{label}: {value}")
    }
}
