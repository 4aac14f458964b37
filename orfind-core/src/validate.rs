//! Alphabet and codon checks that gate the ORF search.
//!
//! A sequence is accepted when it is entirely RNA (`ACGU`) or entirely DNA
//! (`ACGT`), case-insensitive. The two alphabets are checked independently,
//! so a sequence of only `A`, `C`, `G` passes both. Codons are always
//! written in RNA form: a codon containing `T` is rejected.

use crate::alphabets::{dna, rna};
use crate::error::{CodonKind, OrfError, OrfResult, SequenceFault};
use tracing::trace;

pub fn validate_sequence(sequence: &str) -> OrfResult<()> {
    let bytes = sequence.as_bytes();
    let rna = rna::alphabet();
    if rna.is_word(bytes) {
        trace!(len = bytes.len(), "sequence accepted as RNA");
        return Ok(());
    }
    let dna = dna::alphabet();
    if dna.is_word(bytes) {
        trace!(len = bytes.len(), "sequence accepted as DNA");
        return Ok(());
    }

    let reason = match rna.union(&dna).first_foreign(bytes) {
        Some((pos, b)) => SequenceFault::InvalidChar {
            // report the full character, not a stray UTF-8 byte
            ch: sequence[pos..].chars().next().unwrap_or(b as char),
            pos,
        },
        None => SequenceFault::MixedTU,
    };
    Err(OrfError::InvalidSequence {
        seq: sequence.to_owned(),
        reason,
    })
}

pub fn validate_codon(codon: &str) -> OrfResult<()> {
    let bytes = codon.as_bytes();
    if bytes.len() == rna::CODON_LEN && rna::alphabet().is_word(bytes) {
        return Ok(());
    }
    Err(OrfError::InvalidCodon {
        codon: codon.to_owned(),
    })
}

/// Reject an empty set, then validate each codon in the order given.
pub fn validate_codon_set<S: AsRef<str>>(kind: CodonKind, codons: &[S]) -> OrfResult<()> {
    if codons.is_empty() {
        return Err(OrfError::InvalidCodonSet { kind });
    }
    for codon in codons {
        validate_codon(codon.as_ref())?;
    }
    trace!(%kind, n = codons.len(), "codon set accepted");
    Ok(())
}
