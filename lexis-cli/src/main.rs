mod demo_lexer;
mod printer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lexis_foundation::source::InMemorySourceMap;
use tracing::{debug, metadata::LevelFilter};
use tracing_subscriber::{prelude::*, EnvFilter};
use walkdir::WalkDir;

/// Scans source files with the bundled demo lexer and prints the resulting tokens and
/// diagnostics.
#[derive(Debug, Parser)]
pub struct Args {
    /// Files or directories to scan. Directories are walked recursively for `.demo` files.
    paths: Vec<PathBuf>,

    /// Print the scanned tokens in addition to any diagnostics.
    #[clap(long)]
    dump_tokens: bool,
}

pub fn fallible_main(args: Args) -> Result<()> {
    let files = collect_files(&args.paths)?;
    debug!("{} source files found", files.len());

    let mut sources = InMemorySourceMap::new();
    let mut had_errors = false;

    for path in files {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read source file at {path:?}"))?;
        let source_id = sources.add(path.clone(), contents);
        let text = &sources.get(source_id).expect("just inserted").contents;

        let lexer = demo_lexer::build();
        let outcome = lexer.scan(source_id, text);

        if args.dump_tokens {
            printer::dump_tokens(&outcome.tokens, &sources);
        }
        had_errors |= outcome.has_errors();
        printer::emit_diagnostics(&outcome.diagnostics, &sources);
    }

    if had_errors {
        anyhow::bail!("scanning produced errors");
    }
    Ok(())
}

fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path) {
                let entry = entry?;
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn main() {
    let subscriber = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        );
    tracing::subscriber::set_global_default(subscriber)
        .expect("cannot set default tracing subscriber");

    let args = Args::parse();
    if let Err(error) = fallible_main(args) {
        tracing::error!("{error:?}");
        std::process::exit(1);
    }
}
