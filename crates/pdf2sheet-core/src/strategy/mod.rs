pub mod forms;
pub mod headings;
pub mod tables;
pub mod transactions;

use crate::model::{Document, NamedTable};
use crate::trace::Trace;

/// An independent extraction routine mapping a document to zero or more
/// named tables.
///
/// Strategies never fail for "no match": a strategy that does not apply to
/// the document returns empty tables, which the coordinator drops. Only
/// structural faults (unreadable document, broken backend) surface as
/// errors, and those happen before any strategy runs.
pub trait Strategy {
    /// Name of this strategy (for diagnostics).
    fn name(&self) -> &str;

    /// Scan the document and produce this strategy's tables, possibly
    /// empty. Skipped or irregular input is recorded on the trace.
    fn extract(&self, document: &Document, trace: &mut Trace) -> Vec<NamedTable>;
}
