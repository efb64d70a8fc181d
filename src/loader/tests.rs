//! Unit tests for source loading.

use std::{env::temp_dir, fs, process};

use rstest::rstest;

use super::loader::{load_file, normalize, parse_file, parse_source};
use crate::errors::errors::ErrorImpl;

#[rstest]
#[case("a = 1", "a = 1")]
#[case("    a = 1", "\ta = 1")]
#[case("        a = 1", "\t\ta = 1")]
#[case("      a = 1", "\t  a = 1")]
#[case("if x:\n    y = 1\n", "if x:\n\ty = 1\n")]
#[case("s = \"a    b\"", "s = \"a    b\"")]
#[case("\ta = 1", "\ta = 1")]
fn test_normalize(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(normalize(source), expected);
}

#[test]
fn test_space_and_tab_indentation_parse_alike() {
    let (spaces, space_errors) = parse_source("if x:\n    y = 1\nz = 2\n");
    let (tabs, tab_errors) = parse_source("if x:\n\ty = 1\nz = 2\n");

    assert!(space_errors.is_empty());
    assert!(tab_errors.is_empty());
    assert_eq!(spaces, tabs);
}

#[test]
fn test_parse_source_collects_diagnostics() {
    let (program, errors) = parse_source("a = 1\nif a\nb = 2\n");

    assert_eq!(program.len(), 2);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnexpectedToken");
}

#[test]
fn test_load_and_parse_file() {
    let path = temp_dir().join(format!("minipy-loader-{}.py", process::id()));
    fs::write(&path, "total = 0\nwhile total < 3:\n    total += 1\n").unwrap();

    let source = load_file(&path).unwrap();
    assert_eq!(source, "total = 0\nwhile total < 3:\n\ttotal += 1\n");

    let (_, program, errors) = parse_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(errors.is_empty());
    assert_eq!(program.len(), 2);
}

#[test]
fn test_missing_file() {
    let path = temp_dir().join("minipy-does-not-exist.py");
    let error = load_file(&path).unwrap_err();

    match error.get_internal_error() {
        ErrorImpl::FileRead { path: reported, .. } => {
            assert_eq!(reported, &path.display().to_string())
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(parse_file(&path).is_err());
}
