
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum SequenceError {
    InvalidChar(char),          // not one of a, c, g, t (any case)
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidChar(c) => {
                write!(f, "Unsupported nucleotide: '{}'", c)
            }
        }
    }
}

impl std::error::Error for SequenceError {}

