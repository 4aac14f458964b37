use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn orfind_cmd() -> Command {
    let mut cmd = Command::cargo_bin("orfind").unwrap();
    cmd.env_remove("ORFIND_START_CODONS")
        .env_remove("ORFIND_STOP_CODONS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help_command() {
    orfind_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("translate"));
}

#[test]
fn test_find_default_codons() {
    orfind_cmd()
        .args(["find", "CCCAUGUAACCC"])
        .assert()
        .success()
        .stdout("AUGUAA\n");
}

#[test]
fn test_find_dna_reports_rna() {
    orfind_cmd()
        .args(["find", "ATGTAA"])
        .assert()
        .success()
        .stdout("AUGUAA\n");
}

#[test]
fn test_find_no_orf_prints_empty_line() {
    orfind_cmd()
        .args(["find", "CCCGGG"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_find_custom_codons() {
    orfind_cmd()
        .args(["find", "CGUGAAAUGA", "-s", "GUG", "AUG", "-x", "UGA"])
        .assert()
        .success()
        .stdout("GUGAAAUGA\n");
}

#[test]
fn test_codons_from_environment() {
    orfind_cmd()
        .args(["find", "AUGUUUUAA"])
        .env("ORFIND_STOP_CODONS", "UAG,UGA")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_find_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seq.txt");
    fs::write(&path, "CCCATG\nAAA\nTGACC\n").unwrap();

    orfind_cmd()
        .args(["find", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout("AUGAAAUGA\n");
}

#[test]
fn test_translate() {
    orfind_cmd()
        .args(["translate", "CCATGAAACCCTGAGG"])
        .assert()
        .success()
        .stdout("MKP\n");
}

#[test]
fn test_invalid_sequence_exit_code() {
    orfind_cmd()
        .args(["find", "AUGTAA"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("both T and U"));
}

#[test]
fn test_invalid_codon_exit_code() {
    orfind_cmd()
        .args(["find", "AUGUAA", "-s", "ATG"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid codon"));
}

#[test]
fn test_missing_path_exit_code() {
    let dir = TempDir::new().unwrap();
    orfind_cmd()
        .args(["find", "-p"])
        .arg(dir.path().join("missing.txt"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("couldn't find path"));
}

#[test]
fn test_directory_path_exit_code() {
    let dir = TempDir::new().unwrap();
    orfind_cmd()
        .args(["find", "-p"])
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("directory"));
}

#[test]
fn test_verbose_flag_overrides_orfind_log() {
    orfind_cmd()
        .args(["-v", "find", "AUGUAA"])
        .env("ORFIND_LOG", "error")
        .assert()
        .success()
        .stdout("AUGUAA\n")
        .stderr(predicate::str::contains("searching for first ORF"));
}

#[test]
fn test_orfind_log_used_without_verbose_flag() {
    orfind_cmd()
        .args(["find", "AUGUAA"])
        .env("ORFIND_LOG", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("searching for first ORF"));

    orfind_cmd()
        .args(["find", "AUGUAA"])
        .env("ORFIND_LOG", "error")
        .assert()
        .success()
        .stderr(predicate::str::contains("searching for first ORF").not());
}
