use std::fmt;

use clap::Args;
use clap::ArgAction;
use colored::*;
use log::warn;

#[derive(Debug, PartialEq, Eq)]
pub enum LengthError {
    NotAnInteger(String),   // raw argument text
    TooLarge(String),       // parses as i64, but exceeds usize (32-bit targets only)
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthError::NotAnInteger(s) => {
                write!(f, "Invalid sequence length '{}': not an integer", s)
            }
            LengthError::TooLarge(s) => {
                write!(f, "Invalid sequence length '{}': too large for this platform", s)
            }
        }
    }
}

impl std::error::Error for LengthError {}


/// Sequence generation parameters.
#[derive(Debug, Args)]
pub struct GenerateArguments {
    /// Length of the generated sequence (copied verbatim into the header)
    // Hyphen-led values such as "-3 " must reach LengthArgument::parse;
    // known short flags (-v, -h, -V) are still matched as flags.
    #[arg(value_name = "LENGTH", allow_hyphen_values = true)]
    pub length: String,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}


/// The length argument, kept both as given and as a loop bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthArgument {
    raw: String,
    count: usize,
}

impl LengthArgument {
    /// Interpret `raw` as a signed integer, ignoring surrounding whitespace.
    ///
    /// A negative value is not an error: it yields a count of zero, so the
    /// generated sequence is empty.
    pub fn parse(raw: &str) -> Result<Self, LengthError> {
        let value: i64 = raw.trim().parse()
            .map_err(|_| LengthError::NotAnInteger(raw.to_string()))?;

        let count = if value < 0 {
            warn!("{} negative length {} -> generating an empty sequence", "WARNING:".red(), value);
            0
        } else {
            usize::try_from(value).map_err(|_| LengthError::TooLarge(raw.to_string()))?
        };

        Ok(LengthArgument { raw: raw.to_string(), count })
    }

    /// The argument text exactly as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Header text (without the leading '>').
    pub fn header(&self) -> String {
        format!("sequence {}", self.raw)
    }
}

impl TryFrom<&str> for LengthArgument {
    type Error = LengthError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        LengthArgument::parse(s)
    }
}
