//! CLI for refnum - Renumber footnote-style citation markers in plain-text documents.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use refnum::renumber;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Renumber footnote-style citation markers into sequential references
#[derive(Parser)]
#[command(name = "refnum")]
#[command(version)]
#[command(after_help = "\
Examples:
  refnum draft.txt
  refnum -i draft.txt -o final.txt
  cat draft.txt | refnum
  refnum - -o final.txt

Citation syntax: [^key] in prose, '[^key]: ...' entries in a trailing
bibliography section opened by a blank line. A signature block starting at
a line of exactly '-- ' is left untouched.")]
struct Cli {
    /// Input file (use '-' for stdin; default: stdin)
    input: Option<PathBuf>,

    /// Read from FILE instead of the positional argument
    #[arg(short, long, value_name = "FILE", conflicts_with = "input")]
    infile: Option<PathBuf>,

    /// Write to FILE (default: the input file, or stdout when reading stdin)
    #[arg(short, long, value_name = "FILE")]
    outfile: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — input file not found / unreadable
    InputFile(String),
    /// Exit 11 — cannot write output
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::OutputFile(_) => 11,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let input = cli
        .infile
        .or(cli.input)
        .unwrap_or_else(|| PathBuf::from("-"));
    // No explicit output means rewriting the input file in place, or
    // stdout when the input came from stdin
    let output = cli.outfile.unwrap_or_else(|| input.clone());

    // 1. Read the document (support '-' for stdin)
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::InputFile(format!("failed to read from stdin: {}", e)))?;
        buf
    } else {
        fs::read_to_string(&input)
            .map_err(|e| AppError::InputFile(format!("'{}': {}", input.display(), e)))?
    };

    // 2. Renumber
    let result = renumber(&text);

    // 3. Report diagnostics; they never block output
    for diagnostic in &result.diagnostics {
        eprintln!("{}", diagnostic);
    }

    // 4. Write to file or stdout
    if output == Path::new("-") {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{}", result.text)
            .map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))?;
    } else {
        fs::write(&output, &result.text)
            .map_err(|e| AppError::OutputFile(format!("'{}': {}", output.display(), e)))?;
        eprintln!(
            "numbered {} reference(s), wrote {}",
            result.numbered,
            output.display()
        );
    }

    Ok(())
}
