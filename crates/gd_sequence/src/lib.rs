
mod error;

/// Base, DnaSequence, and uniform sampling of bases.
mod nucleotides;

/// Random sequence generation from an injected RNG.
mod generate;

/// Per-base tallies.
mod composition;

/// The two-line FASTA-like output record.
mod fasta;

pub use error::*;
pub use nucleotides::*;
pub use generate::*;
pub use composition::*;
pub use fasta::*;

