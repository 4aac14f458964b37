//! First open reading frame search.
//!
//! The search compiles `(start_1|...)([ACGU]{3})*(stop_1|...)` and takes the
//! leftmost match in the RNA-normalised sequence. The middle group is
//! greedy, so when several in-frame stop codons follow a start codon the
//! match runs to the last of them rather than the first.

use crate::alphabets::dna;
use crate::error::{CodonKind, OrfResult};
use crate::validate::{validate_codon_set, validate_sequence};
use regex::Regex;
use tracing::debug;

pub const DEFAULT_START_CODONS: &[&str] = &["AUG"];
pub const DEFAULT_STOP_CODONS: &[&str] = &["UAA", "UAG", "UGA"];

/// A validated, non-empty, uppercase list of codons in caller order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodonSet {
    kind: CodonKind,
    codons: Vec<String>,
}

impl CodonSet {
    pub fn new<S: AsRef<str>>(kind: CodonKind, codons: &[S]) -> OrfResult<Self> {
        validate_codon_set(kind, codons)?;
        let codons = codons
            .iter()
            .map(|c| c.as_ref().to_ascii_uppercase())
            .collect();
        Ok(Self { kind, codons })
    }

    pub fn default_starts() -> Self {
        Self::from_static(CodonKind::Start, DEFAULT_START_CODONS)
    }

    pub fn default_stops() -> Self {
        Self::from_static(CodonKind::Stop, DEFAULT_STOP_CODONS)
    }

    fn from_static(kind: CodonKind, codons: &[&str]) -> Self {
        Self {
            kind,
            codons: codons.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    pub fn kind(&self) -> CodonKind {
        self.kind
    }

    pub fn codons(&self) -> &[String] {
        &self.codons
    }

    pub fn contains(&self, codon: &str) -> bool {
        self.codons.iter().any(|c| c.eq_ignore_ascii_case(codon))
    }

    fn alternation(&self) -> String {
        self.codons
            .iter()
            .map(|c| regex::escape(c))
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Location of an ORF within the searched sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrfMatch {
    /// Byte offset of the first base of the start codon.
    pub start: usize,
    /// Offset one past the last base of the stop codon.
    pub end: usize,
    /// The ORF in uppercase RNA form.
    pub orf: String,
}

impl OrfMatch {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Clone, Debug)]
pub struct OrfFinder {
    starts: CodonSet,
    stops: CodonSet,
    pattern: Regex,
}

impl OrfFinder {
    pub fn new(starts: CodonSet, stops: CodonSet) -> OrfResult<Self> {
        let pattern = format!(
            "({})([ACGU]{{3}})*({})",
            starts.alternation(),
            stops.alternation()
        );
        debug!(%pattern, "compiled ORF pattern");
        let pattern = Regex::new(&pattern)?;
        Ok(Self {
            starts,
            stops,
            pattern,
        })
    }

    /// Finder for `AUG` starts and `UAA`/`UAG`/`UGA` stops.
    pub fn with_default_codons() -> OrfResult<Self> {
        Self::new(CodonSet::default_starts(), CodonSet::default_stops())
    }

    pub fn starts(&self) -> &CodonSet {
        &self.starts
    }

    pub fn stops(&self) -> &CodonSet {
        &self.stops
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Validate `sequence` and return its first ORF, or `""` when none exists.
    pub fn find_first(&self, sequence: &str) -> OrfResult<String> {
        Ok(self
            .find_first_match(sequence)?
            .map(|m| m.orf)
            .unwrap_or_default())
    }

    pub fn find_first_match(&self, sequence: &str) -> OrfResult<Option<OrfMatch>> {
        validate_sequence(sequence)?;
        Ok(self.search(sequence))
    }

    fn search(&self, sequence: &str) -> Option<OrfMatch> {
        let rna = dna::transcribe(sequence);
        let found = self.pattern.find(&rna);
        match &found {
            Some(m) => debug!(start = m.start(), end = m.end(), "found ORF"),
            None => debug!(len = rna.len(), "no ORF in sequence"),
        }
        found.map(|m| OrfMatch {
            start: m.start(),
            end: m.end(),
            orf: m.as_str().to_owned(),
        })
    }
}

/// Return the first ORF in `sequence`, or `""` if there is none.
///
/// The sequence is validated first, then the start codons, then the stop
/// codons, all before any pattern is built. Either codon list being empty
/// is an error rather than an empty result.
pub fn find_first_orf<A, B>(
    sequence: &str,
    start_codons: &[A],
    stop_codons: &[B],
) -> OrfResult<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    validate_sequence(sequence)?;
    let starts = CodonSet::new(CodonKind::Start, start_codons)?;
    let stops = CodonSet::new(CodonKind::Stop, stop_codons)?;
    let finder = OrfFinder::new(starts, stops)?;
    Ok(finder.search(sequence).map(|m| m.orf).unwrap_or_default())
}

pub fn find_first_orf_default(sequence: &str) -> OrfResult<String> {
    find_first_orf(sequence, DEFAULT_START_CODONS, DEFAULT_STOP_CODONS)
}

/// Run one finder over many sequences; results keep the input order.
pub fn find_first_orfs<S>(finder: &OrfFinder, sequences: &[S]) -> Vec<OrfResult<String>>
where
    S: AsRef<str> + Sync,
{
    par_map!(sequences, |s: &S| finder.find_first(s.as_ref()))
}
