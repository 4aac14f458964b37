use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use orfind_core::read_sequence_from_path;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "orfind",
    version,
    about = "Find the first open reading frame in a DNA or RNA sequence",
    long_about = "orfind scans a DNA or RNA sequence for the first open reading frame: a start \
                  codon, any number of whole codons, then an in-frame stop codon. DNA input is \
                  reported in RNA form (T read as U)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the first open reading frame
    Find(OrfArgs),

    /// Print the amino-acid translation of the first open reading frame
    Translate(OrfArgs),
}

#[derive(Args, Debug)]
pub struct OrfArgs {
    /// The sequence to search for an open reading frame. With --path, a
    /// path to a file containing the sequence instead.
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// Treat SEQUENCE as a path to a file containing the sequence to search
    #[arg(short, long)]
    pub path: bool,

    /// One or more possible start codons
    #[arg(
        short = 's',
        long,
        num_args = 1..,
        value_delimiter = ',',
        env = "ORFIND_START_CODONS",
        default_values = ["AUG"]
    )]
    pub start_codons: Vec<String>,

    /// One or more possible stop codons
    #[arg(
        short = 'x',
        long,
        num_args = 1..,
        value_delimiter = ',',
        env = "ORFIND_STOP_CODONS",
        default_values = ["UAA", "UAG", "UGA"]
    )]
    pub stop_codons: Vec<String>,
}

impl OrfArgs {
    /// The raw sequence text, read from disk when `--path` is set.
    pub fn load_sequence(&self) -> Result<String> {
        if self.path {
            info!(path = %self.sequence, "reading sequence from file");
            Ok(read_sequence_from_path(&self.sequence)?)
        } else {
            Ok(self.sequence.clone())
        }
    }
}
