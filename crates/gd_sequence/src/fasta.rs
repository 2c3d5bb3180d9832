use std::fmt;
use std::io;
use std::io::Write;

use crate::DnaSequence;

/// A single FASTA-like record: a `>` header line and one sequence line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FastaRecord {
    header: String,
    sequence: DnaSequence,
}

impl FastaRecord {
    /// `header` is the text after the leading `>`.
    pub fn new(header: impl Into<String>, sequence: DnaSequence) -> Self {
        FastaRecord { header: header.into(), sequence }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn sequence(&self) -> &DnaSequence {
        &self.sequence
    }

    pub fn into_sequence(self) -> DnaSequence {
        self.sequence
    }

    /// Write both lines, each terminated by `\n`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for FastaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.header, self.sequence)
    }
}
