#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::to_py_err;
use orfind_core::{
    orf, translate, validate, CodonKind, CodonSet, OrfFinder, DEFAULT_START_CODONS,
    DEFAULT_STOP_CODONS,
};

fn codons_or_default(codons: Option<Vec<String>>, default: &[&str]) -> Vec<String> {
    codons.unwrap_or_else(|| default.iter().map(|c| (*c).to_owned()).collect())
}

#[pyfunction]
fn vet_nucleotide_sequence(sequence: &str) -> PyResult<()> {
    validate::validate_sequence(sequence).map_err(to_py_err)
}

#[pyfunction]
fn vet_codon(codon: &str) -> PyResult<()> {
    validate::validate_codon(codon).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (sequence, start_codons=None, stop_codons=None))]
fn find_first_orf(
    sequence: &str,
    start_codons: Option<Vec<String>>,
    stop_codons: Option<Vec<String>>,
) -> PyResult<String> {
    let starts = codons_or_default(start_codons, DEFAULT_START_CODONS);
    let stops = codons_or_default(stop_codons, DEFAULT_STOP_CODONS);
    orf::find_first_orf(sequence, &starts, &stops).map_err(to_py_err)
}

/// Search many sequences with one compiled pattern, releasing the GIL.
#[pyfunction]
#[pyo3(signature = (sequences, start_codons=None, stop_codons=None))]
fn find_first_orfs(
    py: Python<'_>,
    sequences: Vec<String>,
    start_codons: Option<Vec<String>>,
    stop_codons: Option<Vec<String>>,
) -> PyResult<Vec<String>> {
    let starts = codons_or_default(start_codons, DEFAULT_START_CODONS);
    let stops = codons_or_default(stop_codons, DEFAULT_STOP_CODONS);
    let starts = CodonSet::new(CodonKind::Start, &starts).map_err(to_py_err)?;
    let stops = CodonSet::new(CodonKind::Stop, &stops).map_err(to_py_err)?;
    let finder = OrfFinder::new(starts, stops).map_err(to_py_err)?;

    let results = py.allow_threads(|| orf::find_first_orfs(&finder, &sequences));
    results
        .into_iter()
        .map(|r| r.map_err(to_py_err))
        .collect()
}

#[pyfunction]
fn translate_sequence(sequence: &str) -> PyResult<String> {
    translate::translate_sequence(sequence).map_err(to_py_err)
}

#[pyfunction]
fn parse_sequence_from_path(path: &str) -> PyResult<String> {
    orfind_core::read_sequence_from_path(path).map_err(to_py_err)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(vet_nucleotide_sequence, m)?)?;
    m.add_function(wrap_pyfunction!(vet_codon, m)?)?;
    m.add_function(wrap_pyfunction!(find_first_orf, m)?)?;
    m.add_function(wrap_pyfunction!(find_first_orfs, m)?)?;
    m.add_function(wrap_pyfunction!(translate_sequence, m)?)?;
    m.add_function(wrap_pyfunction!(parse_sequence_from_path, m)?)?;
    Ok(())
}
