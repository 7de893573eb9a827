use crate::model::{Document, NamedTable, Record};
use crate::strategy::Strategy;
use crate::trace::Trace;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z].*:").expect("failed to compile heading pattern"));

/// Split a heading line into (label, value) at the first colon.
///
/// A line is a heading only if it starts with an uppercase letter and
/// contains a colon. Both sides are trimmed; a repeated label later in the
/// document is a new capture, not an overwrite.
pub fn heading_parts(line: &str) -> Option<(&str, &str)> {
    if !HEADING_RE.is_match(line) {
        return None;
    }
    let (label, value) = line.split_once(':')?;
    Some((label.trim(), value.trim()))
}

/// Labeled-field extraction: repeated `Label: value` lines become columns,
/// and every page's full text is kept as its own sheet.
///
/// Emits "Text" (one row per page with text) and "Headings" (one column
/// per label in first-seen order). Heading columns are ragged: row i
/// holds the i-th capture of each label regardless of which page produced
/// it, and shorter columns pad with empty values.
pub struct HeadingFieldStrategy;

impl Strategy for HeadingFieldStrategy {
    fn name(&self) -> &str {
        "headings"
    }

    fn extract(&self, document: &Document, _trace: &mut Trace) -> Vec<NamedTable> {
        let mut captures: Vec<(String, Vec<String>)> = Vec::new();
        let mut text = NamedTable::new("Text");

        for page in &document.pages {
            let raw = match page.raw_text.as_deref() {
                Some(t) => t,
                None => continue,
            };

            for line in raw.lines() {
                if let Some((label, value)) = heading_parts(line) {
                    match captures.iter_mut().find(|(l, _)| l == label) {
                        Some((_, values)) => values.push(value.to_string()),
                        None => captures.push((label.to_string(), vec![value.to_string()])),
                    }
                }
            }

            // The full page text is kept whether or not anything matched
            text.push(Record::from_iter([("Text", raw)]));
        }

        let mut headings = NamedTable::new("Headings");
        let depth = captures.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
        for i in 0..depth {
            let mut record = Record::new();
            for (label, values) in &captures {
                record.insert(
                    label.clone(),
                    values.get(i).map(String::as_str).unwrap_or(""),
                );
            }
            headings.push(record);
        }

        vec![text, headings]
    }
}
