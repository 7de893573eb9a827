use crate::model::{Document, NamedTable, Record};
use crate::strategy::Strategy;
use crate::trace::Trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Full-line statement pattern: date, reference, description, then
/// debit / credit / balance.
///
/// Debit and credit are unsigned magnitudes; direction is encoded by
/// column, so a leading minus disqualifies the line. Only the balance may
/// carry a sign.
static STATEMENT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(\d{2}/\d{2}/\d{2})",    // date dd/dd/dd
        r"\s+(\S+)",                // reference token run
        r"\s+([\w ]+?)",            // description: letters/digits/underscores/spaces
        r"\s+([\d,]+(?:\.\d+)?)",   // debit
        r"\s+([\d,]+(?:\.\d+)?)",   // credit
        r"\s+(-?[\d,]+(?:\.\d+)?)$" // balance
    ))
    .expect("failed to compile statement line pattern")
});

/// Match a trimmed line against the statement pattern.
///
/// The match is anchored start-to-end: a line either yields all six fields
/// or contributes nothing. Thousands-separator commas are stripped from
/// the three numeric fields.
pub fn statement_record(line: &str) -> Option<Record> {
    let caps = STATEMENT_LINE_RE.captures(line)?;
    let mut record = Record::new();
    record.insert("Date", &caps[1]);
    record.insert("Reference", &caps[2]);
    record.insert("Description", &caps[3]);
    record.insert("Debit", caps[4].replace(',', ""));
    record.insert("Credit", caps[5].replace(',', ""));
    record.insert("Balance", caps[6].replace(',', ""));
    Some(record)
}

/// Statement-line extraction: one row per matching line across all pages,
/// in page-then-line order, on the "Transactions" sheet.
pub struct TransactionStrategy;

impl Strategy for TransactionStrategy {
    fn name(&self) -> &str {
        "transactions"
    }

    fn extract(&self, document: &Document, _trace: &mut Trace) -> Vec<NamedTable> {
        let mut table = NamedTable::new("Transactions");

        for page in &document.pages {
            let raw = match page.raw_text.as_deref() {
                Some(t) => t,
                None => continue,
            };
            for line in raw.lines() {
                if let Some(record) = statement_record(line.trim()) {
                    table.push(record);
                }
            }
        }

        vec![table]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;

    #[test]
    fn test_statement_line_all_six_fields() {
        let record = statement_record("01/02/23 REF123 GROCERY STORE 50.00 0.00 1200.00").unwrap();
        assert_eq!(record.get("Date"), Some("01/02/23"));
        assert_eq!(record.get("Reference"), Some("REF123"));
        assert_eq!(record.get("Description"), Some("GROCERY STORE"));
        assert_eq!(record.get("Debit"), Some("50.00"));
        assert_eq!(record.get("Credit"), Some("0.00"));
        assert_eq!(record.get("Balance"), Some("1200.00"));
    }

    #[test]
    fn test_thousands_commas_stripped() {
        let record = statement_record("01/02/23 TRF SALARY PAYMENT 0.00 12,500.00 13,700.50").unwrap();
        assert_eq!(record.get("Credit"), Some("12500.00"));
        assert_eq!(record.get("Balance"), Some("13700.50"));
    }

    #[test]
    fn test_negative_balance_allowed() {
        let record = statement_record("05/03/23 CHQ101 RENT 900.00 0.00 -250.00").unwrap();
        assert_eq!(record.get("Balance"), Some("-250.00"));
    }

    #[test]
    fn test_negative_debit_rejected() {
        assert!(statement_record("05/03/23 CHQ101 RENT -900.00 0.00 250.00").is_none());
    }

    #[test]
    fn test_one_digit_date_segment_rejected() {
        assert!(statement_record("1/02/23 REF123 GROCERY STORE 50.00 0.00 1200.00").is_none());
    }

    #[test]
    fn test_missing_field_rejected() {
        assert!(statement_record("01/02/23 REF123 GROCERY STORE 50.00 1200.00").is_none());
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(
            statement_record("01/02/23 REF123 GROCERY STORE 50.00 0.00 1200.00 extra").is_none()
        );
    }

    #[test]
    fn test_rows_in_page_then_line_order() {
        let doc = Document::new(vec![
            Page {
                number: 1,
                raw_text: Some(
                    "STATEMENT OF ACCOUNT\n\
                     01/02/23 REF1 COFFEE 4.50 0.00 995.50\n\
                     02/02/23 REF2 BOOKS 20.00 0.00 975.50"
                        .into(),
                ),
                raw_tables: vec![],
            },
            Page {
                number: 2,
                raw_text: Some("03/02/23 REF3 REFUND 0.00 20.00 995.50".into()),
                raw_tables: vec![],
            },
        ]);
        let mut trace = Trace::default();
        let tables = TransactionStrategy.extract(&doc, &mut trace);

        let refs: Vec<&str> = tables[0]
            .records
            .iter()
            .filter_map(|r| r.get("Reference"))
            .collect();
        assert_eq!(refs, vec!["REF1", "REF2", "REF3"]);
    }

    #[test]
    fn test_non_matching_lines_contribute_nothing() {
        let doc = Document::new(vec![Page {
            number: 1,
            raw_text: Some("Opening balance 1000.00\nno dates here".into()),
            raw_tables: vec![],
        }]);
        let mut trace = Trace::default();
        let tables = TransactionStrategy.extract(&doc, &mut trace);
        assert!(tables[0].is_empty());
    }
}
