#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod io;
pub mod orf;
pub mod translate;
pub mod validate;

pub use error::{CodonKind, OrfError, OrfResult, SequenceFault};
pub use io::read_sequence_from_path;
pub use orf::{
    find_first_orf, find_first_orf_default, find_first_orfs, CodonSet, OrfFinder, OrfMatch,
    DEFAULT_START_CODONS, DEFAULT_STOP_CODONS,
};
pub use translate::{translate_first_orf, translate_sequence};
pub use validate::{validate_codon, validate_codon_set, validate_sequence};
