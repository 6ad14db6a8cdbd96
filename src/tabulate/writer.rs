use crate::tabulate::extract::plain_text;
use crate::tabulate::types::Table;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Serializes a table as delimited text: header line first, then one
/// line per row. Quoting of cells containing the delimiter or embedded
/// newlines is handled by the csv layer.
pub struct TableWriter {
    delimiter: u8,
}

impl TableWriter {
    pub fn new(delimiter: u8) -> Self {
        TableWriter { delimiter }
    }

    /// Write the table to any destination.
    pub fn write_to<W: Write>(&self, table: &Table, out: W) -> Result<()> {
        let mut writer = WriterBuilder::new().delimiter(self.delimiter).from_writer(out);

        writer
            .write_record(&table.header)
            .context("Failed to write header")?;

        for row in &table.rows {
            let cells: Vec<String> = row.iter().map(plain_text).collect();
            writer.write_record(&cells).context("Failed to write row")?;
        }

        writer.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Write the table to a file, creating or truncating it.
    pub fn write_file<P: AsRef<Path>>(&self, table: &Table, path: P) -> Result<()> {
        let file = std::fs::File::create(&path)
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        self.write_to(table, file)
    }
}
