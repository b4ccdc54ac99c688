//! End-to-end tests driving the compiled `masc` binary through
//! `assert_cmd` against temp-file fixtures.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_source(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(source.as_bytes())
        .expect("failed to write source");
    file
}

/// A clean program compiles with no diagnostics.
#[test]
fn clean_program_exits_zero_with_no_output() {
    let file = write_source("func main():int { var x:int = 2+3*4; return x; }");

    Command::cargo_bin("masc")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

/// An `if` condition that isn't boolean is a semantic error: reported with
/// a non-zero exit, but the process doesn't panic.
#[test]
fn non_boolean_condition_is_a_reported_error() {
    let file = write_source(
        "func main():int { var x:int = 1; if (x) { return 1; } return 0; }",
    );

    Command::cargo_bin("masc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("must be boolean"));
}

/// A lone `'` at end of input is a scan-time fatal error, not a semantic
/// one. The diagnostic should still be printed and the binary should exit
/// non-zero rather than panicking.
#[test]
fn unterminated_char_literal_is_a_scan_error() {
    let file = write_source("func main():int { var x:char = '");

    Command::cargo_bin("masc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("char literal"));
}

/// A missing input file is an I/O error, distinct from a compilation
/// error, but still a non-zero exit.
#[test]
fn missing_file_exits_non_zero_with_an_io_message() {
    Command::cargo_bin("masc")
        .unwrap()
        .arg("/nonexistent/path/does-not-exist.test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// A function may call another function declared later in the same file
/// without error.
#[test]
fn forward_reference_between_functions_is_accepted() {
    let file = write_source(
        "func main():int { return helper(); } func helper():int { return 1; }",
    );

    Command::cargo_bin("masc")
        .unwrap()
        .arg(file.path())
        .assert()
        .success();
}

/// Duplicate function declarations are diagnosed, but compilation still
/// runs to completion rather than halting early, since this is an
/// accumulated semantic diagnostic, not a fatal syntax error.
#[test]
fn duplicate_function_declaration_is_reported() {
    let file = write_source(
        "func f():int { return 1; } func f():int { return 2; } func main():int { return f(); }",
    );

    Command::cargo_bin("masc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate function"));
}
