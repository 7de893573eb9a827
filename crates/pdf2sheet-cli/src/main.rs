mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdf2sheet",
    version,
    about = "Convert semi-structured PDFs into multi-sheet spreadsheets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PDF into an XLSX workbook
    Convert {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Extraction mode: tables, document or transactions
        #[arg(short, long, default_value = "document")]
        mode: String,

        /// Write the workbook to this exact path
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Name the workbook converted.xlsx next to the input
        #[arg(long, conflicts_with = "out")]
        fixed_name: bool,

        /// Delete the source PDF once the job finishes, even on failure
        #[arg(long)]
        delete_source: bool,
    },
    /// Extract tables from a PDF and print them without writing a workbook
    Extract {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Extraction mode: tables, document or transactions
        #[arg(short, long, default_value = "document")]
        mode: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted tables to a JSON file
        #[arg(short = 'O', long = "save", value_name = "FILE")]
        save: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input_file,
            mode,
            out,
            fixed_name,
            delete_source,
        } => commands::convert::run(input_file, &mode, out, fixed_name, delete_source),
        Commands::Extract {
            input_file,
            mode,
            output,
            save,
        } => commands::extract::run(input_file, &mode, &output, save),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
