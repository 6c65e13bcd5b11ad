use std::error::Error;
use std::fmt;

/// Unified error type for the motion-analysis system
#[derive(Debug)]
pub enum MotionError {
    /// Sample source / sink adapter errors
    Device(Box<dyn Error + Send + Sync>),
    /// Configuration-related errors
    Configuration(String),
    /// Signal processing errors
    Processing(String),
    /// Invalid input data
    InvalidData(String),
    /// I/O errors from config loading or sink output
    Io(std::io::Error),
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::Device(e) => write!(f, "Device error: {}", e),
            MotionError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            MotionError::Processing(msg) => write!(f, "Processing error: {}", msg),
            MotionError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            MotionError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for MotionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MotionError::Device(e) => Some(e.as_ref()),
            MotionError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::hal::simulator::SimulatorError> for MotionError {
    fn from(err: crate::hal::simulator::SimulatorError) -> Self {
        MotionError::Device(Box::new(err))
    }
}

impl From<std::io::Error> for MotionError {
    fn from(err: std::io::Error) -> Self {
        MotionError::Io(err)
    }
}

impl From<toml::de::Error> for MotionError {
    fn from(err: toml::de::Error) -> Self {
        MotionError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = MotionError::Configuration("window too short".to_string());
        assert!(format!("{}", err).contains("window too short"));

        let err = MotionError::Processing("empty band".to_string());
        assert!(format!("{}", err).starts_with("Processing error"));
    }

    #[test]
    fn test_io_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = MotionError::from(io);
        assert!(err.source().is_some());
    }
}
