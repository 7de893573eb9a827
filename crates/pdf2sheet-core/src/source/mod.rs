pub mod pdftotext;

use crate::error::ConvertError;
use crate::model::Page;

/// Trait for page source backends.
///
/// A backend turns raw document bytes into ordered pages, each exposing
/// optional raw text and zero or more raw tables. The extraction pipeline
/// never touches the document format directly.
pub trait PageSource {
    fn load_pages(&self, bytes: &[u8]) -> Result<Vec<Page>, ConvertError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
