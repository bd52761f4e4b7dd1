use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Logger initialization failed: {message}")]
    LoggerError { message: String },
}

pub type Result<T> = std::result::Result<T, GreeterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_converts_and_displays() {
        let err: GreeterError = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed").into();
        assert!(matches!(err, GreeterError::IoError(_)));
        assert_eq!(err.to_string(), "IO error: stdout closed");
    }

    #[test]
    fn test_logger_error_display() {
        let err = GreeterError::LoggerError {
            message: "already set".to_string(),
        };
        assert_eq!(err.to_string(), "Logger initialization failed: already set");
    }
}
