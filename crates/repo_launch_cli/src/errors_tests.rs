use super::*;

#[test]
fn test_config_error_display() {
    let error = Error::Config("Missing field 'api_url'".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: Missing field 'api_url'"
    );
}

#[test]
fn test_error_debug_format() {
    let error = Error::Config("test".to_string());
    let debug_output = format!("{:?}", error);
    assert!(debug_output.contains("Config"));
    assert!(debug_output.contains("test"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

#[test]
fn test_read_input_error_display() {
    let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
    let error = Error::ReadInput(io_error);
    assert_eq!(error.to_string(), "Failed to read from standard input.");
}

#[test]
fn test_std_out_flush_failed_display() {
    let error = Error::StdOutFlushFailed;
    assert_eq!(error.to_string(), "Failed to flush the std out buffer.");
}
