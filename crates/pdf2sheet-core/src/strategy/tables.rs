use crate::model::{Document, NamedTable, Record};
use crate::strategy::Strategy;
use crate::trace::{Trace, TraceSeverity};

/// Typed-table extraction: every raw table on every page, concatenated in
/// page order into one "Tables" sheet.
///
/// Rows are keyed by their own table's header; a row whose length differs
/// from that header is dropped. Pages are allowed to disagree on header
/// shape: the sheet's column set becomes the union in first-seen order,
/// and the disagreement is recorded as a warning.
pub struct TableStrategy;

impl Strategy for TableStrategy {
    fn name(&self) -> &str {
        "tables"
    }

    fn extract(&self, document: &Document, trace: &mut Trace) -> Vec<NamedTable> {
        let mut table = NamedTable::new("Tables");
        let mut first_header: Option<Vec<String>> = None;

        for page in &document.pages {
            for raw in &page.raw_tables {
                if let Some(header) = &first_header {
                    if *header != raw.header {
                        trace.warn(
                            Some(page.number),
                            TraceSeverity::Important,
                            format!(
                                "table header {:?} differs from first-seen header {:?}; columns merged by name",
                                raw.header, header
                            ),
                        );
                    }
                } else {
                    first_header = Some(raw.header.clone());
                }

                for row in &raw.rows {
                    if row.len() != raw.header.len() {
                        trace.warn(
                            Some(page.number),
                            TraceSeverity::Info,
                            format!(
                                "dropped row with {} cell(s) against a {}-column header",
                                row.len(),
                                raw.header.len()
                            ),
                        );
                        continue;
                    }
                    table.push(Record::from_iter(
                        raw.header.iter().cloned().zip(row.iter().cloned()),
                    ));
                }
            }
        }

        vec![table]
    }
}
