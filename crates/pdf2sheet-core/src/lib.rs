pub mod error;
pub mod job;
pub mod model;
pub mod sink;
pub mod source;
pub mod strategy;
pub mod trace;

use error::ConvertError;
use job::ExtractionMode;
use model::{Document, ExtractionResult};
use serde::{Deserialize, Serialize};
use source::PageSource;
use trace::Trace;

/// Extracted tables plus the scan observations that accompanied them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    pub result: ExtractionResult,
    pub trace: Trace,
}

/// Main API entry point: run the extraction pipeline over a document.
///
/// The page source backend is passed in so callers (and tests) can supply
/// their own; the mode selects which strategies run. Empty input is
/// rejected before any page is loaded.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    source: &dyn PageSource,
    mode: ExtractionMode,
) -> Result<Extraction, ConvertError> {
    if pdf_bytes.is_empty() {
        return Err(ConvertError::InvalidInput("no document supplied".into()));
    }

    let pages = source.load_pages(pdf_bytes)?;
    let document = Document::new(pages);

    let mut trace = Trace::default();
    let result = job::run_extraction(&document, mode, &mut trace)?;

    Ok(Extraction { result, trace })
}
