use pdf2sheet_core::error::ConvertError;
use pdf2sheet_core::Extraction;

pub fn print(extraction: &Extraction) -> Result<(), ConvertError> {
    let json = serde_json::to_string_pretty(extraction)?;
    println!("{json}");
    Ok(())
}
