//! Prints a summary of one or more WSDL documents.
//!
//! Run with: `cargo run --bin wsdl-inspect -- [--check] [--max-size BYTES] FILE...`
//!
//! Logging is controlled through `RUST_LOG` (default `info`).

use clap::Parser;
use ironwsdl::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

/// Prints a summary of one or more WSDL documents.
#[derive(Debug, Parser)]
#[command(name = "wsdl-inspect", version, about)]
struct Options {
    /// Also check that operations refer to defined messages
    #[arg(long)]
    check: bool,

    /// Maximum accepted document size in bytes
    #[arg(long, value_name = "BYTES")]
    max_size: Option<usize>,

    /// WSDL files to inspect
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();

    let mut loader = WsdlLoader::new();
    if let Some(bytes) = options.max_size {
        loader = loader.max_size(bytes);
    }

    let mut failed = false;
    for path in &options.files {
        let definition = match loader.load(path) {
            Ok(definition) => definition,
            Err(e) => {
                tracing::error!("{}: {}", path.display(), e);
                failed = true;
                continue;
            }
        };

        println!("== {}", path.display());
        print!("{}", summarize(&definition));

        if options.check {
            let problems = collect_reference_errors(&definition);
            for problem in &problems {
                tracing::warn!("{}: {}", path.display(), problem);
            }
            if !problems.is_empty() {
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let options = Options::try_parse_from([
            "wsdl-inspect",
            "--check",
            "--max-size",
            "1024",
            "a.wsdl",
            "b.wsdl",
        ])
        .expect("Failed to parse args");

        assert!(options.check);
        assert_eq!(options.max_size, Some(1024));
        assert_eq!(
            options.files,
            [PathBuf::from("a.wsdl"), PathBuf::from("b.wsdl")]
        );
    }

    #[test]
    fn test_parse_args_defaults() {
        let options =
            Options::try_parse_from(["wsdl-inspect", "a.wsdl"]).expect("Failed to parse args");

        assert!(!options.check);
        assert_eq!(options.max_size, None);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(Options::try_parse_from(["wsdl-inspect"]).is_err());
        assert!(Options::try_parse_from(["wsdl-inspect", "--max-size"]).is_err());
        assert!(
            Options::try_parse_from(["wsdl-inspect", "--max-size", "lots", "a.wsdl"]).is_err()
        );
        assert!(Options::try_parse_from(["wsdl-inspect", "--verbose", "a.wsdl"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }
}
