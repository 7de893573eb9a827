use pdf2sheet_core::model::NamedTable;
use pdf2sheet_core::Extraction;

pub fn print(extraction: &Extraction) {
    for (i, table) in extraction.result.tables.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ({} row(s)) ===", table.name, table.records.len());
        print_table(table);
    }

    if !extraction.trace.warnings.is_empty() {
        eprintln!();
        for warning in &extraction.trace.warnings {
            eprintln!("  warning: {}", warning.message);
        }
    }
}

fn print_table(table: &NamedTable) {
    let columns = table.columns();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for record in &table.records {
        for (i, column) in columns.iter().enumerate() {
            let value = cell(record.get(column).unwrap_or(""));
            widths[i] = widths[i].max(value.chars().count());
        }
    }

    let header: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
        .collect();
    println!("  {}", header.join("  ").trim_end());

    for record in &table.records {
        let row: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    "{:<width$}",
                    cell(record.get(c).unwrap_or("")),
                    width = widths[i]
                )
            })
            .collect();
        println!("  {}", row.join("  ").trim_end());
    }
}

/// Flatten multi-line cell values (the Text sheet holds whole pages) so
/// column alignment survives.
fn cell(value: &str) -> String {
    if value.contains('\n') {
        value.split('\n').collect::<Vec<_>>().join(" ")
    } else {
        value.to_string()
    }
}
