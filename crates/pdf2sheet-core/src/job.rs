use crate::error::ConvertError;
use crate::model::{Document, ExtractionResult};
use crate::sink::SheetSink;
use crate::source::PageSource;
use crate::strategy::forms::FormStrategy;
use crate::strategy::headings::HeadingFieldStrategy;
use crate::strategy::tables::TableStrategy;
use crate::strategy::transactions::TransactionStrategy;
use crate::strategy::Strategy;
use crate::trace::Trace;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which strategies a job runs. Declared statically per job; the sheet
/// order of the result follows the strategy run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Raw tables only.
    Tables,
    /// Tables, page text, heading fields and form fields.
    Document,
    /// Bank statement lines only.
    Transactions,
}

impl ExtractionMode {
    pub fn from_str_loose(s: &str) -> Option<ExtractionMode> {
        match s.trim().to_lowercase().as_str() {
            "tables" | "table" => Some(ExtractionMode::Tables),
            "document" | "doc" | "full" => Some(ExtractionMode::Document),
            "transactions" | "statement" => Some(ExtractionMode::Transactions),
            _ => None,
        }
    }

    fn strategies(&self) -> Vec<Box<dyn Strategy>> {
        match self {
            ExtractionMode::Tables => vec![Box::new(TableStrategy)],
            ExtractionMode::Document => vec![
                Box::new(TableStrategy),
                Box::new(HeadingFieldStrategy),
                Box::new(FormStrategy),
            ],
            ExtractionMode::Transactions => vec![Box::new(TransactionStrategy)],
        }
    }
}

/// Run the declared strategies over a document and collect every
/// non-empty table in run order.
///
/// A strategy that does not apply yields empty tables; there is no
/// partial-failure signal distinct from emptiness. All tables empty means
/// the job has nothing to write and fails with NoDataFound.
pub fn run_extraction(
    document: &Document,
    mode: ExtractionMode,
    trace: &mut Trace,
) -> Result<ExtractionResult, ConvertError> {
    let mut tables = Vec::new();
    for strategy in mode.strategies() {
        for table in strategy.extract(document, trace) {
            if !table.is_empty() {
                tables.push(table);
            }
        }
    }

    if tables.is_empty() {
        return Err(ConvertError::NoDataFound);
    }

    Ok(ExtractionResult { tables })
}

/// How the artifact file name is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputNaming {
    /// `<input stem>.xlsx`, next to the input file.
    FromInput,
    /// A fixed file name, next to the input file.
    Fixed(String),
    /// An exact path.
    Explicit(PathBuf),
}

impl OutputNaming {
    pub fn resolve(&self, input: &Path) -> PathBuf {
        match self {
            OutputNaming::FromInput => input.with_extension("xlsx"),
            OutputNaming::Fixed(name) => match input.parent() {
                Some(dir) => dir.join(name),
                None => PathBuf::from(name),
            },
            OutputNaming::Explicit(path) => path.clone(),
        }
    }
}

/// Per-job configuration. Jobs own their configuration; nothing here is
/// process-wide.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub mode: ExtractionMode,
    pub output: OutputNaming,
    /// Delete the source document once the job finishes, whether it
    /// succeeded or not.
    pub cleanup_source: bool,
}

impl Default for JobConfig {
    fn default() -> Self {
        JobConfig {
            mode: ExtractionMode::Document,
            output: OutputNaming::FromInput,
            cleanup_source: false,
        }
    }
}

/// Outcome of a completed job: where the artifact landed, plus the trace.
#[derive(Debug)]
pub struct JobOutput {
    pub artifact: PathBuf,
    pub trace: Trace,
}

/// One-shot conversion job: read the input, extract, write the artifact.
pub fn run_job(
    input: &Path,
    config: &JobConfig,
    source: &dyn PageSource,
    sink: &dyn SheetSink,
) -> Result<JobOutput, ConvertError> {
    let outcome = run_job_inner(input, config, source, sink);
    if config.cleanup_source {
        let _ = std::fs::remove_file(input);
    }
    outcome
}

fn run_job_inner(
    input: &Path,
    config: &JobConfig,
    source: &dyn PageSource,
    sink: &dyn SheetSink,
) -> Result<JobOutput, ConvertError> {
    let bytes = std::fs::read(input)?;
    let extraction = crate::extract_pdf(&bytes, source, config.mode)?;

    let artifact = config.output.resolve(input);
    sink.write(&extraction.result, &artifact)?;

    Ok(JobOutput {
        artifact,
        trace: extraction.trace,
    })
}
