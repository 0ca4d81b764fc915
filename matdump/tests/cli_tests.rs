//! Integration tests for matdump CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the matdump command, with colors off.
fn matdump() -> Command {
    let mut cmd = Command::cargo_bin("matdump").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Fixture generation
// ============================================================================

/// A tagged data element, padded to 8 bytes.
fn element(data_type: u32, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend(data_type.to_le_bytes());
    out.extend((data.len() as u32).to_le_bytes());
    out.extend_from_slice(data);
    while out.len() % 8 != 0 {
        out.push(0);
    }
    out
}

/// An uncompressed numeric miMATRIX element.
fn array(name: &str, class: u8, dims: &[i32], data_type: u32, real: &[u8]) -> Vec<u8> {
    let mut flags = Vec::new();
    flags.extend(u32::from(class).to_le_bytes());
    flags.extend(0u32.to_le_bytes());
    let dim_bytes: Vec<u8> = dims.iter().flat_map(|d| d.to_le_bytes()).collect();

    let mut body = element(6, &flags);
    body.extend(element(5, &dim_bytes));
    body.extend(element(1, name.as_bytes()));
    body.extend(element(data_type, real));

    let mut out = Vec::new();
    out.extend(14u32.to_le_bytes());
    out.extend((body.len() as u32).to_le_bytes());
    out.extend(body);
    out
}

/// Write a MAT file holding `A` (2x3 double) and `counts` (1x4 int16).
fn write_fixture(dir: &Path) -> PathBuf {
    let mut bytes = b"MATLAB 5.0 MAT-file, Platform: test".to_vec();
    bytes.resize(116, b' ');
    bytes.extend_from_slice(&[0u8; 8]);
    bytes.extend(0x0100u16.to_le_bytes());
    bytes.extend_from_slice(b"IM");

    let doubles: Vec<u8> = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.5]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    bytes.extend(array("A", 6, &[2, 3], 9, &doubles));

    let ints: Vec<u8> = [-2i16, 0, 7, 9].iter().flat_map(|v| v.to_le_bytes()).collect();
    bytes.extend(array("counts", 10, &[1, 4], 3, &ints));

    let path = dir.join("fixture.mat");
    fs::write(&path, bytes).unwrap();
    path
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help() {
    matdump()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspect the variables"))
        .stdout(predicate::str::contains("--list"))
        .stdout(predicate::str::contains("--var"))
        .stdout(predicate::str::contains("EXAMPLES"));
}

#[test]
fn test_version() {
    matdump()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("matdump"));
}

#[test]
fn test_missing_input() {
    matdump()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_nonexistent_input() {
    matdump()
        .arg("/nonexistent/file.mat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let temp = TempDir::new().unwrap();
    let input = write_fixture(temp.path());

    matdump()
        .arg(&input)
        .arg("--quiet")
        .arg("--verbose")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--quiet and --verbose"));
}

#[test]
fn test_invalid_mat_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("dummy.mat");
    fs::write(&input, "dummy").unwrap();

    matdump()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open MAT file"))
        .stderr(predicate::str::contains("caused by"));
}

// ============================================================================
// List Mode Tests
// ============================================================================

#[test]
fn test_list_variables() {
    let temp = TempDir::new().unwrap();
    let input = write_fixture(temp.path());

    matdump()
        .arg(&input)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Variables in"))
        .stdout(predicate::str::is_match(r"A\s+2x3\s+double").unwrap())
        .stdout(predicate::str::is_match(r"counts\s+1x4\s+int16").unwrap())
        .stdout(predicate::str::contains("2 variables found"));
}

#[test]
fn test_list_quiet_omits_header_and_summary() {
    let temp = TempDir::new().unwrap();
    let input = write_fixture(temp.path());

    matdump()
        .arg(&input)
        .arg("--list")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"A\s+2x3\s+double").unwrap())
        .stdout(predicate::str::contains("Variables in").not())
        .stdout(predicate::str::contains("variables found").not());
}

// ============================================================================
// Show Mode Tests
// ============================================================================

#[test]
fn test_show_all_variables() {
    let temp = TempDir::new().unwrap();
    let input = write_fixture(temp.path());

    matdump()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("A: 2x3 double"))
        .stdout(predicate::str::contains("[1, 2, 3, 4, 5, 6.5]"))
        .stdout(predicate::str::contains("counts: 1x4 int16"))
        .stdout(predicate::str::contains("[-2, 0, 7, 9]"));
}

#[test]
fn test_show_selected_variable_truncated() {
    let temp = TempDir::new().unwrap();
    let input = write_fixture(temp.path());

    matdump()
        .arg(&input)
        .arg("--var")
        .arg("A")
        .arg("--max-values")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1, 2, … (4 more)]"))
        .stdout(predicate::str::contains("counts").not());
}

#[test]
fn test_show_missing_variable() {
    let temp = TempDir::new().unwrap();
    let input = write_fixture(temp.path());

    matdump()
        .arg(&input)
        .arg("--var")
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variable 'nope' not found"));
}

#[test]
fn test_show_prints_file_summary() {
    let temp = TempDir::new().unwrap();
    let input = write_fixture(temp.path());

    matdump()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("File: "))
        .stdout(predicate::str::contains("Variables: 2"));

    matdump()
        .arg(&input)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Variables: 2").not())
        .stdout(predicate::str::contains("A: 2x3 double"));
}
