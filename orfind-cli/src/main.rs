use clap::Parser;
use colored::*;
use orfind_core::{find_first_orf, translate_sequence, OrfError};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands, OrfArgs};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then the -v count, then ORFIND_LOG
    let log_level = match cli.verbose {
        0 => std::env::var("ORFIND_LOG").unwrap_or_else(|_| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<OrfError>() {
            Some(err) if err.is_validation() => 2,
            Some(
                OrfError::PathNotFound { .. }
                | OrfError::PathIsDirectory { .. }
                | OrfError::Io { .. },
            ) => 3,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Find(args) => {
            let orf = first_orf(&args)?;
            println!("{orf}");
        }
        Commands::Translate(args) => {
            let orf = first_orf(&args)?;
            let protein = translate_sequence(&orf)?;
            info!(residues = protein.len(), "translated ORF");
            println!("{protein}");
        }
    }
    Ok(())
}

fn first_orf(args: &OrfArgs) -> anyhow::Result<String> {
    let sequence = args.load_sequence()?;
    info!(
        len = sequence.len(),
        starts = ?args.start_codons,
        stops = ?args.stop_codons,
        "searching for first ORF"
    );
    let orf = find_first_orf(&sequence, &args.start_codons, &args.stop_codons)?;
    if orf.is_empty() {
        info!("no open reading frame found");
    }
    Ok(orf)
}
