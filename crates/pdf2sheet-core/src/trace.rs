use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSeverity {
    Important,
    Info,
}

/// A non-fatal observation made while scanning a document. Warnings never
/// change extraction output; they record what was skipped or irregular.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceWarning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    pub message: String,
    pub severity: TraceSeverity,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    pub warnings: Vec<TraceWarning>,
}

impl Trace {
    pub fn warn(&mut self, page: Option<usize>, severity: TraceSeverity, message: impl Into<String>) {
        self.warnings.push(TraceWarning {
            page,
            message: message.into(),
            severity,
        });
    }
}
