use pdf2sheet_core::error::ConvertError;
use pdf2sheet_core::job::{self, JobConfig, OutputNaming};
use pdf2sheet_core::sink::xlsx::XlsxSink;
use pdf2sheet_core::source::pdftotext::PdftotextSource;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    mode: &str,
    out: Option<PathBuf>,
    fixed_name: bool,
    delete_source: bool,
) -> Result<(), ConvertError> {
    let mode = super::parse_mode(mode)?;

    let output = match (out, fixed_name) {
        (Some(path), _) => OutputNaming::Explicit(path),
        (None, true) => OutputNaming::Fixed("converted.xlsx".into()),
        (None, false) => OutputNaming::FromInput,
    };

    let config = JobConfig {
        mode,
        output,
        cleanup_source: delete_source,
    };

    let source = PdftotextSource::new();
    let sink = XlsxSink::new();
    let job_output = job::run_job(&input_file, &config, &source, &sink)?;

    for warning in &job_output.trace.warnings {
        eprintln!("  warning: {}", warning.message);
    }
    println!("{}", job_output.artifact.display());

    Ok(())
}
