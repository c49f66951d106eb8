//! Error types for PLA format parsing and validation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to PLA format parsing and validation
///
/// Every variant that refers to a term line carries its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PLAError {
    /// PLA file is missing the .i (inputs) directive
    MissingInputDirective,
    /// PLA file is missing the .o (outputs) directive
    MissingOutputDirective,
    /// Invalid value in .i directive
    InvalidInputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Invalid value in .o directive
    InvalidOutputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Invalid value in .p directive
    InvalidTermCountDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// More inputs than a minterm can address
    TooManyInputs {
        /// Declared number of inputs
        declared: usize,
        /// Largest supported number of inputs
        max: usize,
    },
    /// A term line that does not have exactly two fields
    MalformedTerm {
        /// Line number in the input
        line: usize,
        /// The offending line, trimmed
        text: Arc<str>,
    },
    /// Invalid character in input portion of a term
    InvalidInputCharacter {
        /// Line number in the input
        line: usize,
        /// The invalid character
        character: char,
        /// Position in the input string
        position: usize,
    },
    /// Invalid character in output portion of a term
    InvalidOutputCharacter {
        /// Line number in the input
        line: usize,
        /// The invalid character
        character: char,
        /// Position in the output string
        position: usize,
    },
    /// Term dimensions don't match declared dimensions
    TermDimensionMismatch {
        /// Line number in the input
        line: usize,
        /// Expected number of inputs
        expected_inputs: usize,
        /// Actual number of inputs in the term
        actual_inputs: usize,
        /// Expected number of outputs
        expected_outputs: usize,
        /// Actual number of outputs in the term
        actual_outputs: usize,
    },
    /// Label count doesn't match dimension count
    LabelCountMismatch {
        /// Type of label ("input" or "output")
        label_type: Arc<str>,
        /// Expected number of labels
        expected: usize,
        /// Actual number of labels provided
        actual: usize,
    },
}

impl fmt::Display for PLAError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAError::MissingInputDirective => {
                write!(f, "PLA file missing .i directive and no terms to infer from")
            }
            PLAError::MissingOutputDirective => {
                write!(f, "PLA file missing .o directive and no terms to infer from")
            }
            PLAError::InvalidInputDirective { value } => {
                write!(f, "Invalid .i directive value: '{}'", value)
            }
            PLAError::InvalidOutputDirective { value } => {
                write!(f, "Invalid .o directive value: '{}'", value)
            }
            PLAError::InvalidTermCountDirective { value } => {
                write!(f, "Invalid .p directive value: '{}'", value)
            }
            PLAError::TooManyInputs { declared, max } => write!(
                f,
                "PLA declares {} inputs but at most {} are supported",
                declared, max
            ),
            PLAError::MalformedTerm { line, text } => write!(
                f,
                "Invalid term format on line {}: '{}' (expected '<inputs> <outputs>')",
                line, text
            ),
            PLAError::InvalidInputCharacter {
                line,
                character,
                position,
            } => write!(
                f,
                "Invalid input character '{}' at position {} on line {}",
                character, position, line
            ),
            PLAError::InvalidOutputCharacter {
                line,
                character,
                position,
            } => write!(
                f,
                "Invalid output character '{}' at position {} on line {}",
                character, position, line
            ),
            PLAError::TermDimensionMismatch {
                line,
                expected_inputs,
                actual_inputs,
                expected_outputs,
                actual_outputs,
            } => write!(
                f,
                "Term dimensions on line {} (inputs: {}, outputs: {}) don't match declared dimensions (inputs: {}, outputs: {})",
                line, actual_inputs, actual_outputs, expected_inputs, expected_outputs
            ),
            PLAError::LabelCountMismatch {
                label_type,
                expected,
                actual,
            } => write!(
                f,
                "{} label count ({}) doesn't match {} count ({})",
                label_type, actual, label_type, expected
            ),
        }
    }
}

impl std::error::Error for PLAError {}

impl From<PLAError> for io::Error {
    fn from(err: PLAError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading PLA format data
///
/// This error type is returned by the `PLAReader` methods.
#[derive(Debug)]
pub enum PLAReadError {
    /// PLA format error
    PLA(PLAError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for PLAReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAReadError::PLA(e) => write!(f, "PLA format error: {}", e),
            PLAReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAReadError::PLA(e) => Some(e),
            PLAReadError::Io(e) => Some(e),
        }
    }
}

impl From<PLAError> for PLAReadError {
    fn from(err: PLAError) -> Self {
        PLAReadError::PLA(err)
    }
}

impl From<io::Error> for PLAReadError {
    fn from(err: io::Error) -> Self {
        PLAReadError::Io(err)
    }
}

impl From<PLAReadError> for io::Error {
    fn from(err: PLAReadError) -> Self {
        match err {
            PLAReadError::Io(e) => e,
            PLAReadError::PLA(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

/// Errors that can occur when writing PLA format data
///
/// This error type is returned by the `PLAWriter` methods.
#[derive(Debug)]
pub enum PLAWriteError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for PLAWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAWriteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAWriteError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PLAWriteError {
    fn from(err: io::Error) -> Self {
        PLAWriteError::Io(err)
    }
}

impl From<PLAWriteError> for io::Error {
    fn from(err: PLAWriteError) -> Self {
        match err {
            PLAWriteError::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_term_display() {
        let err = PLAError::MalformedTerm {
            line: 4,
            text: Arc::from("01 1 1"),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("'01 1 1'"));
    }

    #[test]
    fn test_invalid_input_character_display() {
        let err = PLAError::InvalidInputCharacter {
            line: 7,
            character: 'q',
            position: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'q'"));
        assert!(msg.contains("position 3"));
        assert!(msg.contains("line 7"));
    }

    #[test]
    fn test_term_dimension_mismatch_display() {
        let err = PLAError::TermDimensionMismatch {
            line: 5,
            expected_inputs: 3,
            actual_inputs: 2,
            expected_outputs: 1,
            actual_outputs: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("inputs: 2"));
        assert!(msg.contains("inputs: 3"));
    }

    #[test]
    fn test_read_error_conversions() {
        let read_err: PLAReadError = PLAError::MissingInputDirective.into();
        assert!(matches!(read_err, PLAReadError::PLA(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let read_err: PLAReadError = io_err.into();
        assert!(matches!(read_err, PLAReadError::Io(_)));
    }

    #[test]
    fn test_read_error_to_io_error_preserves_kind() {
        let read_err = PLAReadError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let io_err: io::Error = read_err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

        let read_err = PLAReadError::PLA(PLAError::MissingOutputDirective);
        let io_err: io::Error = read_err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_write_error_to_io_error() {
        let original = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let io_err: io::Error = PLAWriteError::Io(original).into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(io_err.to_string(), "permission denied");
    }
}
