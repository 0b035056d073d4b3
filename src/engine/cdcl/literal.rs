//! Literals of the reference engine.
//!
//! Internally atoms are indexed from zero, and a literal is the index of its atom doubled, plus one if the literal is negative.
//! So, the DIMACS literal `-3` is the internal literal `5`, and a literal and its negation differ only in the lowest bit.

/// A literal, as an index into structures with an entry per polarity of each atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit(u32);

impl Lit {
    /// The literal of the given (internal) atom with the given polarity.
    pub fn new(var: usize, positive: bool) -> Self {
        Lit(((var as u32) << 1) | (!positive as u32))
    }

    /// The literal for a non-zero DIMACS literal.
    pub fn from_dimacs(lit: i32) -> Self {
        debug_assert_ne!(lit, 0);
        Lit::new((lit.unsigned_abs() - 1) as usize, lit > 0)
    }

    /// The DIMACS representation of the literal.
    pub fn to_dimacs(self) -> i32 {
        let atom = self.var() as i32 + 1;
        match self.is_positive() {
            true => atom,
            false => -atom,
        }
    }

    /// The (internal) atom of the literal.
    pub fn var(self) -> usize {
        (self.0 >> 1) as usize
    }

    /// Index of the literal, for structures with an entry per literal.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_positive(self) -> bool {
        self.0 & 1 == 0
    }
}

impl std::ops::Not for Lit {
    type Output = Lit;

    fn not(self) -> Lit {
        Lit(self.0 ^ 1)
    }
}

impl std::fmt::Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}
