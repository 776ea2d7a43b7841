use super::*;

#[test]
fn can_compare_errors_by_message() {
    assert_eq!(GenericError::from("same"), GenericError::from("same".to_string()));
    assert_ne!(GenericError::from("same"), GenericError::from("other"));
}

#[test]
fn can_convert_io_error() {
    let err = GenericError::from(std::io::Error::other("disk is gone"));

    assert_eq!(err.message(), "io error: disk is gone");
    assert_eq!(err.to_string(), "io error: disk is gone");
}
