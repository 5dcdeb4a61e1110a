//! CLI tool for nested-headers - flattens a JSON header forest into a colspan matrix
//!
//! Usage:
//!   nested_headers_cli <headers.json>              # Output JSON to stdout
//!   nested_headers_cli <headers.json> -o out.json  # Output JSON to file
//!
//! Set `RUST_LOG=debug` to see build statistics.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use nested_headers::{
    build_colspan_matrix, matrix_to_json, parse_header_roots, NestedHeadersError, Result,
};

struct Args {
    input: String,
    output: Option<String>,
}

impl Args {
    /// `<input> [-o <output>]`; anything else is a usage error.
    fn parse(mut args: impl Iterator<Item = String>) -> Option<Self> {
        let input = args.next()?;
        let output = match (args.next().as_deref(), args.next()) {
            (None, _) => None,
            (Some("-o"), Some(path)) => Some(path),
            _ => return None,
        };
        Some(Self { input, output })
    }
}

fn run(args: &Args) -> Result<()> {
    let input =
        fs::read_to_string(&args.input).map_err(|e| NestedHeadersError::io(&args.input, e))?;

    let roots = parse_header_roots(&input)?;
    let matrix = build_colspan_matrix(&roots);
    log::info!(
        "{} header levels, widest row {} cells",
        matrix.level_count(),
        matrix.max_row_width()
    );

    let json = matrix_to_json(&matrix, true)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &json).map_err(|e| NestedHeadersError::io(path, e))?;
            eprintln!("Written: {path}");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|e| NestedHeadersError::io("<stdout>", e))?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let Some(args) = Args::parse(env::args().skip(1)) else {
        eprintln!("Usage: nested_headers_cli <headers.json> [-o output.json]");
        std::process::exit(1);
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
