use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrfError {
    #[error("invalid sequence {seq:?}: {reason}")]
    InvalidSequence { seq: String, reason: SequenceFault },

    #[error("invalid codon {codon:?} (expected 3 letters from A, U, G, C)")]
    InvalidCodon { codon: String },

    #[error("empty {kind} codon set")]
    InvalidCodonSet { kind: CodonKind },

    #[error("could not compile ORF pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("couldn't find path {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("path {} appears to be a directory", path.display())]
    PathIsDirectory { path: PathBuf },

    #[error("something went wrong reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OrfError {
    /// True for failures caused by the sequence or codon inputs themselves.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            OrfError::InvalidSequence { .. }
                | OrfError::InvalidCodon { .. }
                | OrfError::InvalidCodonSet { .. }
        )
    }
}

/// Why a sequence was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceFault {
    InvalidChar { ch: char, pos: usize },
    MixedTU,
}

impl std::fmt::Display for SequenceFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceFault::InvalidChar { ch, pos } => {
                write!(f, "invalid character '{ch}' at position {pos}")
            }
            SequenceFault::MixedTU => f.write_str("contains both T and U"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodonKind {
    Start,
    Stop,
}

impl std::fmt::Display for CodonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodonKind::Start => f.write_str("start"),
            CodonKind::Stop => f.write_str("stop"),
        }
    }
}

pub type OrfResult<T> = Result<T, OrfError>;
