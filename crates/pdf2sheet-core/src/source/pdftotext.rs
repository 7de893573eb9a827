use crate::error::ConvertError;
use crate::model::{Page, RawTable};
use crate::source::PageSource;
use std::io::Write;
use std::process::Command;

/// Page source backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` to preserve whitespace alignment, which is what
/// the raw-table reconstruction below relies on.
pub struct PdftotextSource;

impl PdftotextSource {
    pub fn new() -> Self {
        PdftotextSource
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for PdftotextSource {
    fn load_pages(&self, bytes: &[u8]) -> Result<Vec<Page>, ConvertError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| ConvertError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| ConvertError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConvertError::PdftotextNotFound
                } else {
                    ConvertError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ConvertError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);

        // pdftotext uses form feed \x0c as page separator
        let pages: Vec<Page> = text
            .split('\x0c')
            .enumerate()
            .map(|(i, page_text)| build_page(i + 1, page_text))
            .filter(|p| p.raw_text.is_some() || !p.raw_tables.is_empty() || p.number == 1)
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn build_page(number: usize, text: &str) -> Page {
    let lines: Vec<&str> = text.lines().collect();
    let raw_tables = detect_tables(&lines);
    let raw_text = if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    };
    Page {
        number,
        raw_text,
        raw_tables,
    }
}

/// Reconstruct raw tables from layout-preserved text.
///
/// A table region is a run of consecutive lines that each split into 2+
/// column segments on large whitespace gaps. The first region line becomes
/// the header; the rest become data rows (ragged rows are kept, strategies
/// decide their fate). An empty or unsegmented line ends the region, and a
/// region of a single line is not a table.
fn detect_tables(lines: &[&str]) -> Vec<RawTable> {
    let mut tables = Vec::new();
    let mut region: Vec<Vec<String>> = Vec::new();

    for line in lines {
        let segments = split_by_whitespace_gaps(line);
        if segments.len() >= 2 {
            region.push(segments.into_iter().map(|s| s.to_string()).collect());
        } else {
            flush_region(&mut region, &mut tables);
        }
    }
    flush_region(&mut region, &mut tables);

    tables
}

fn flush_region(region: &mut Vec<Vec<String>>, tables: &mut Vec<RawTable>) {
    if region.len() >= 2 {
        let mut rows = std::mem::take(region);
        let header = rows.remove(0);
        tables.push(RawTable::new(header, rows));
    } else {
        region.clear();
    }
}

/// Split a line by gaps of 2+ whitespace characters.
fn split_by_whitespace_gaps(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = None;
    let mut space_count = 0;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count == 2 {
                if let Some(s) = start {
                    let end = i - 1; // exclude the first space
                    segments.push(&line[s..end]);
                    start = None;
                }
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            space_count = 0;
        }
    }

    if let Some(s) = start {
        segments.push(&line[s..]);
    }

    segments
}
