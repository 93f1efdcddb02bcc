//! Solver options.

use crate::constants::DEFAULT_STRASSEN_CUTOFF;

/// Options for an all-pairs shortest-path solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Operand size at or below which multiplication switches from Strassen
    /// recursion to the naive product (0 = default).
    pub strassen_cutoff: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strassen_cutoff: DEFAULT_STRASSEN_CUTOFF,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.strassen_cutoff == 0 {
            self.strassen_cutoff = DEFAULT_STRASSEN_CUTOFF;
        }
        self
    }

    /// Builder-style setter for the Strassen cutoff.
    #[must_use]
    pub fn with_strassen_cutoff(mut self, cutoff: usize) -> Self {
        self.strassen_cutoff = cutoff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.strassen_cutoff, DEFAULT_STRASSEN_CUTOFF);
    }

    #[test]
    fn normalize_zero_cutoff() {
        let opts = Options { strassen_cutoff: 0 }.normalize();
        assert_eq!(opts.strassen_cutoff, DEFAULT_STRASSEN_CUTOFF);
    }

    #[test]
    fn normalize_keeps_explicit_cutoff() {
        let opts = Options::default().with_strassen_cutoff(16).normalize();
        assert_eq!(opts.strassen_cutoff, 16);
    }
}
