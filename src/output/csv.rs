//! CSV output formatting for block data.

use super::row::BlockRow;
use super::terminal::format_field;
use std::io::{self, Write};

/// Write rows as CSV with a header line.
pub fn write_csv<W: Write>(out: &mut W, rows: &[BlockRow]) -> io::Result<()> {
    writeln!(
        out,
        r#" "cnt",       "cidr",         "first",          "last",       "netmask",       "size",    "hosts""#
    )?;
    for row in rows {
        write_csv_row(out, row)?;
    }
    Ok(())
}

/// Write a single CSV row.
fn write_csv_row<W: Write>(out: &mut W, row: &BlockRow) -> io::Result<()> {
    writeln!(
        out,
        "{cnt},{cidr},{first},{last},{netmask},{size},{hosts}",
        cnt = format_field(row.cnt, 6),
        cidr = format_field(&row.cidr, 18),
        first = format_field(&row.first, 17),
        last = format_field(&row.last, 17),
        netmask = format_field(&row.netmask, 17),
        size = format_field(row.size, 12),
        hosts = format_field(row.hosts, 12),
    )
}
