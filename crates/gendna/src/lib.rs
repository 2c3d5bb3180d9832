//! # gendna
//!
//! Generate a random nucleotide sequence and print it as a two-line,
//! FASTA-like record:
//!
//! ```text
//! >sequence <length-as-given>
//! <generated-sequence>
//! ```
//!
//! The sequence types and generators live in `gd_sequence`, re-exported
//! here as [`sequence`].

use std::io::Write;

use anyhow::Result;
use log::debug;
use log::info;
use rand::Rng;

use gd_sequence::generate;
use gd_sequence::BaseCounts;
use gd_sequence::DnaSequence;
use gd_sequence::FastaRecord;

pub mod input_parsers;

use input_parsers::LengthArgument;

pub mod sequence {
    pub use ::gd_sequence::*;
}

/// Generate `length.count()` random bases with `rng`, write the record to
/// `out`, and return the generated sequence.
pub fn run<R: Rng + ?Sized, W: Write>(
    length: &LengthArgument,
    rng: &mut R,
    out: &mut W,
) -> Result<DnaSequence> {
    debug!("Generating {} bases (argument: {:?})", length.count(), length.raw());
    let sequence = generate(length.count(), rng);
    info!("Composition: {}", BaseCounts::from(&sequence[..]));

    let record = FastaRecord::new(length.header(), sequence);
    record.write_to(out)?;
    out.flush()?;
    Ok(record.into_sequence())
}
