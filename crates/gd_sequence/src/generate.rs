use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

use crate::Base;
use crate::DnaSequence;

/// Draw a single base uniformly at random.
pub fn random_base<R: Rng + ?Sized>(rng: &mut R) -> Base {
    StandardUniform.sample(rng)
}

/// Generate a sequence of `length` independent, uniformly drawn bases.
///
/// The randomness source is supplied by the caller: pass `rand::rng()` for
/// an OS-seeded generator, or a seeded `StdRng` for reproducible output.
pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> DnaSequence {
    (0..length).map(|_| random_base(rng)).collect()
}
