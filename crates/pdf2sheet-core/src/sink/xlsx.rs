use crate::error::ConvertError;
use crate::model::{ExtractionResult, NamedTable};
use crate::sink::SheetSink;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// Sink backend writing an XLSX workbook, one worksheet per named table.
///
/// Sheet name = table name, row 0 = the table's column set in first-seen
/// order, then one row per record. A record missing a column leaves that
/// cell unwritten.
pub struct XlsxSink;

impl XlsxSink {
    pub fn new() -> Self {
        XlsxSink
    }
}

impl Default for XlsxSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetSink for XlsxSink {
    fn write(&self, result: &ExtractionResult, path: &Path) -> Result<(), ConvertError> {
        let mut workbook = Workbook::new();

        for table in &result.tables {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(&table.name)
                .map_err(|e| ConvertError::SinkWrite(e.to_string()))?;
            write_table(worksheet, table)?;
        }

        workbook
            .save(path)
            .map_err(|e| ConvertError::SinkWrite(e.to_string()))?;
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "xlsx"
    }
}

fn write_table(worksheet: &mut Worksheet, table: &NamedTable) -> Result<(), ConvertError> {
    let columns = table.columns();

    for (col, name) in columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .map_err(|e| ConvertError::SinkWrite(e.to_string()))?;
    }

    for (row, record) in table.records.iter().enumerate() {
        for (col, name) in columns.iter().enumerate() {
            if let Some(value) = record.get(name) {
                worksheet
                    .write_string(row as u32 + 1, col as u16, value)
                    .map_err(|e| ConvertError::SinkWrite(e.to_string()))?;
            }
        }
    }

    Ok(())
}
