use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use log::{error, info};
use tyd::{format_error, options::DEFAULT_MAX_DEPTH, parse_with_options, Lexer, ParseOptions};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Rust debug view of the tree
    Debug,
    /// Pretty-printed JSON
    Json,
}

/// Parse a TyD file and print its tree.
#[derive(Parser, Debug)]
#[command(name = "tyd", version)]
struct Args {
    /// Path to the TyD file
    path: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Maximum table nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let file_contents = match read_to_string(&args.path) {
        Ok(contents) => contents,
        Err(e) => {
            error!("failed to read {}: {}", args.path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let options = ParseOptions::new().with_max_depth(args.max_depth);
    let root = match parse_with_options(Lexer::new(&file_contents), &options) {
        Ok(root) => root,
        Err(e) => {
            let name = args.path.to_string_lossy();
            eprint!("{}", format_error(&e, &file_contents, &name));
            return ExitCode::FAILURE;
        }
    };

    info!("Parsed in {:?}", start.elapsed());

    match args.format {
        Format::Debug => println!("{:#?}", root),
        Format::Json => match serde_json::to_string_pretty(&root) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("failed to serialize tree: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
