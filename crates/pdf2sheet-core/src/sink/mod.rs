pub mod xlsx;

use crate::error::ConvertError;
use crate::model::ExtractionResult;
use std::path::Path;

/// Trait for artifact sink backends.
///
/// A sink persists the named tables of an extraction result as a
/// multi-sheet artifact; a single-table result yields a single sheet.
pub trait SheetSink {
    fn write(&self, result: &ExtractionResult, path: &Path) -> Result<(), ConvertError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
