use std::error::Error;
use std::fmt;

/// Custom error type for statistics-fitting failures
#[derive(Debug)]
pub enum ScaleError {
    EmptyInput,
    NonFinite(usize), // Number of non-finite values found
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScaleError::EmptyInput => write!(f, "Cannot estimate statistics from an empty slice"),
            ScaleError::NonFinite(count) => {
                write!(f, "Found {} non-finite values in target slice", count)
            }
        }
    }
}

impl Error for ScaleError {}
