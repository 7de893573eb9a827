use serde::{Deserialize, Serialize};

/// A single extracted table as delivered by a page source backend.
///
/// The header is whatever the backend took as the first region row; data
/// rows may be ragged. Strategies decide what to do with malformed rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        RawTable { header, rows }
    }
}

/// One page of a source document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    /// Raw text of the page. None when the page carries no text at all.
    pub raw_text: Option<String>,
    pub raw_tables: Vec<RawTable>,
}

/// An ordered sequence of pages. Immutable once built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Document { pages }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A typed record: field name -> string value, unique keys, insertion
/// order of first occurrence preserved. Re-inserting a key replaces the
/// value in place without moving the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// A labeled, ordered collection of records destined for one output sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTable {
    pub name: String,
    pub records: Vec<Record>,
}

impl NamedTable {
    pub fn new(name: impl Into<String>) -> Self {
        NamedTable {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column set: the union of keys over all records, in order of first
    /// occurrence.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for record in &self.records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.to_string());
                }
            }
        }
        columns
    }
}

/// The aggregate output of one extraction job: non-empty tables in
/// strategy run order, names unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub tables: Vec<NamedTable>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table(&self, name: &str) -> Option<&NamedTable> {
        self.tables.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut r = Record::new();
        r.insert("B", "1");
        r.insert("A", "2");
        let keys: Vec<&str> = r.keys().collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn test_record_reinsert_keeps_position() {
        let mut r = Record::new();
        r.insert("Name", "Alice");
        r.insert("City", "Paris");
        r.insert("Name", "Bob");
        let keys: Vec<&str> = r.keys().collect();
        assert_eq!(keys, vec!["Name", "City"]);
        assert_eq!(r.get("Name"), Some("Bob"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_columns_union_first_seen_order() {
        let mut table = NamedTable::new("t");
        table.push(Record::from_iter([("A", "1"), ("B", "2")]));
        table.push(Record::from_iter([("B", "3"), ("C", "4")]));
        assert_eq!(table.columns(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_result_lookup_by_name() {
        let mut table = NamedTable::new("Forms");
        table.push(Record::from_iter([("Field", "x"), ("Value", "y")]));
        let result = ExtractionResult {
            tables: vec![table],
        };
        assert!(result.table("Forms").is_some());
        assert!(result.table("Tables").is_none());
    }
}
