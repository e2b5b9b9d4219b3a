//! Tests for error context helpers

use cine_domain::Error;
use cine_infrastructure::error_ext::ErrorContext;
use std::io;

fn failing_io() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing file"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = failing_io().context("Loading movies").unwrap_err();
    match err {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Loading movies: missing file");
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_io_context() {
    let err = failing_io().io_context("Reading config").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_config_context() {
    let err = failing_io().config_context("Parsing config").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(!err.is_backend_failure());
}
