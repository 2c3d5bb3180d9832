use std::fmt;

use crate::Base;
use crate::BCOUNT;

/// Occurrences of each base in a sequence, indexed by `Base as usize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaseCounts([usize; BCOUNT]);

impl From<&[Base]> for BaseCounts {
    fn from(seq: &[Base]) -> Self {
        let mut counts = [0; BCOUNT];
        for &b in seq {
            counts[b as usize] += 1;
        }
        BaseCounts(counts)
    }
}

impl BaseCounts {
    pub fn count(&self, base: Base) -> usize {
        self.0[base as usize]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Relative frequency of `base`; 0.0 for an empty sequence.
    pub fn frequency(&self, base: Base) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(base) as f64 / total as f64
    }
}

impl fmt::Display for BaseCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in Base::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", b, self.count(*b))?;
        }
        Ok(())
    }
}
