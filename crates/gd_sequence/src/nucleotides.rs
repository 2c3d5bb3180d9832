
use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

use crate::SequenceError;


#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { A, C, G, T }
pub const BCOUNT: usize = 4; // 4 Base variants for tables.

impl Base {
    pub const ALL: [Base; BCOUNT] = [Base::A, Base::C, Base::G, Base::T];

    /// The lowercase output symbol.
    pub fn symbol(&self) -> char {
        match self {
            Base::A => 'a',
            Base::C => 'c',
            Base::G => 'g',
            Base::T => 't',
        }
    }
}

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'a' => Ok(Base::A),
            'c' => Ok(Base::C),
            'g' => Ok(Base::G),
            't' => Ok(Base::T),
            _ => Err(SequenceError::InvalidChar(c)),
        }
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        b.symbol()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Each base with probability 1/4.
impl Distribution<Base> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Base {
        Base::ALL[rng.random_range(0..BCOUNT)]
    }
}


/// An ordered, immutable chain of bases.
#[derive(Clone, Hash, Debug, Default, Eq, PartialEq)]
pub struct DnaSequence(Vec<Base>);

impl Deref for DnaSequence {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<[Base]> for DnaSequence {
    fn borrow(&self) -> &[Base] {
        &self.0
    }
}

impl From<Vec<Base>> for DnaSequence {
    fn from(vec: Vec<Base>) -> Self {
        DnaSequence(vec)
    }
}

impl FromIterator<Base> for DnaSequence {
    fn from_iter<I: IntoIterator<Item = Base>>(iter: I) -> Self {
        DnaSequence(iter.into_iter().collect())
    }
}

impl TryFrom<&str> for DnaSequence {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for c in s.chars() {
            vec.push(Base::try_from(c)?);
        }
        Ok(DnaSequence(vec))
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}
