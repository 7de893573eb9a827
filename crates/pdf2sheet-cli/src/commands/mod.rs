pub mod convert;
pub mod extract;

use pdf2sheet_core::error::ConvertError;
use pdf2sheet_core::job::ExtractionMode;

pub fn parse_mode(s: &str) -> Result<ExtractionMode, ConvertError> {
    ExtractionMode::from_str_loose(s).ok_or_else(|| {
        ConvertError::InvalidInput(format!(
            "unknown extraction mode '{s}' (expected tables, document or transactions)"
        ))
    })
}
