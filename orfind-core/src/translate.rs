use crate::alphabets::{dna, rna::CODON_LEN};
use crate::error::OrfResult;
use crate::orf::OrfFinder;
use crate::validate::validate_sequence;
use std::sync::LazyLock;

/// Translate from the first base until the first stop codon or the end.
///
/// The stop codon itself is not emitted and a trailing partial codon is
/// ignored, so input shorter than one codon or opening with a stop codon
/// gives an empty protein. DNA input is read as its RNA transcript.
pub fn translate_sequence(sequence: &str) -> OrfResult<String> {
    validate_sequence(sequence)?;
    let rna = dna::transcribe(sequence);
    Ok(rna
        .as_bytes()
        .chunks_exact(CODON_LEN)
        .map(amino_acid)
        .take_while(|&aa| aa != b'*')
        .map(char::from)
        .collect())
}

/// Locate the first ORF with `finder` and translate it.
pub fn translate_first_orf(finder: &OrfFinder, sequence: &str) -> OrfResult<String> {
    let orf = finder.find_first(sequence)?;
    translate_sequence(&orf)
}

/// Amino acid for one RNA codon under the standard code; `*` marks a stop.
pub fn codon_to_amino_acid(codon: &str) -> Option<char> {
    let bytes = codon.as_bytes();
    if bytes.len() != CODON_LEN {
        return None;
    }
    match amino_acid(bytes) {
        b'X' => None,
        aa => Some(aa as char),
    }
}

fn amino_acid(codon: &[u8]) -> u8 {
    let i1 = BASE_INDEX[codon[0] as usize];
    let i2 = BASE_INDEX[codon[1] as usize];
    let i3 = BASE_INDEX[codon[2] as usize];
    if i1 < 4 && i2 < 4 && i3 < 4 {
        let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
        CODON_TABLE[idx]
    } else {
        b'X'
    }
}

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    map[b'A' as usize] = 0;
    map[b'C' as usize] = 1;
    map[b'G' as usize] = 2;
    map[b'U' as usize] = 3;
    map[b'a' as usize] = 0;
    map[b'c' as usize] = 1;
    map[b'g' as usize] = 2;
    map[b'u' as usize] = 3;
    map
});

// indexed by base rank A=0 C=1 G=2 U=3, first base most significant
const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";
