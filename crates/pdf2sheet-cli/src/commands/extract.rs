use pdf2sheet_core::source::pdftotext::PdftotextSource;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    mode: &str,
    output_format: &str,
    save: Option<PathBuf>,
) -> Result<(), pdf2sheet_core::error::ConvertError> {
    let mode = super::parse_mode(mode)?;
    let pdf_bytes = std::fs::read(&input_file)?;
    let source = PdftotextSource::new();
    let extraction = pdf2sheet_core::extract_pdf(&pdf_bytes, &source, mode)?;

    match save {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&extraction)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} table(s), written to {}",
                extraction.result.tables.len(),
                path.display()
            );
            for warning in &extraction.trace.warnings {
                eprintln!("  warning: {}", warning.message);
            }
        }
        None => match output_format {
            "json" => output::json::print(&extraction)?,
            _ => output::table::print(&extraction),
        },
    }

    Ok(())
}
