use lockscan_util::errors::LockscanError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = LockscanError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_lockfile_error_display() {
    let err = LockscanError::Lockfile {
        message: "no composer.lock found".to_string(),
    };
    assert_eq!(err.to_string(), "Lock file error: no composer.lock found");
}

#[test]
fn test_generic_error_display() {
    let err = LockscanError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: LockscanError = io_err.into();
    matches!(err, LockscanError::Io(_));
}
