//! Output formatting for block data.
//!
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - plain text with colors

mod csv;
mod json;
mod row;
mod terminal;

pub use csv::write_csv;
pub use json::write_json;
pub use row::{block_rows, BlockRow};
pub use terminal::{format_field, write_plain, write_value};

use crate::config::{Config, OutputFormat};
use crate::models::CidrBlock;
use std::error::Error;
use std::io::Write;

/// Render a list of blocks in the configured format.
pub fn render_blocks<W: Write>(
    out: &mut W,
    blocks: &[CidrBlock],
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let rows = block_rows(blocks);
    match config.format {
        OutputFormat::Plain => write_plain(out, &rows, config.color)?,
        OutputFormat::Csv => write_csv(out, &rows)?,
        OutputFormat::Json => write_json(out, &rows)?,
    }
    Ok(())
}

/// Render a prefix length in the configured format.
pub fn render_prefix<W: Write>(
    out: &mut W,
    prefix: u8,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    match config.format {
        OutputFormat::Plain => write_value(out, "prefix", &format!("/{prefix}"), config.color)?,
        OutputFormat::Csv => {
            writeln!(out, r#""prefix""#)?;
            writeln!(out, "{}", format_field(prefix, 8))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &serde_json::json!({ "prefix": prefix }))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
