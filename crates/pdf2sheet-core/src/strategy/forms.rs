use crate::model::{Document, NamedTable, Record};
use crate::strategy::Strategy;
use crate::trace::Trace;

/// Split a strictly two-part colon line into (key, value).
///
/// A line qualifies only if splitting on ':' yields exactly two parts;
/// lines with zero or more than one colon are skipped entirely. Stricter
/// than the heading rule, which splits at the first of any number of
/// colons.
pub fn form_field(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(':');
    let key = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((key.trim(), value.trim()))
}

/// Flat field extraction: colon-delimited lines across the whole document
/// fold into a single field -> value mapping, last occurrence wins.
///
/// Emits "Forms": one row per key with columns Field and Value, rows in
/// first-seen key order even when the stored value came later.
pub struct FormStrategy;

impl Strategy for FormStrategy {
    fn name(&self) -> &str {
        "forms"
    }

    fn extract(&self, document: &Document, _trace: &mut Trace) -> Vec<NamedTable> {
        // Record already keeps first-seen order and overwrites in place
        let mut fields = Record::new();

        for page in &document.pages {
            let raw = match page.raw_text.as_deref() {
                Some(t) => t,
                None => continue,
            };
            for line in raw.lines() {
                if let Some((key, value)) = form_field(line) {
                    fields.insert(key, value);
                }
            }
        }

        let mut forms = NamedTable::new("Forms");
        for (key, value) in fields.iter() {
            forms.push(Record::from_iter([("Field", key), ("Value", value)]));
        }

        vec![forms]
    }
}
