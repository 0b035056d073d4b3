/*!
The trail of the reference engine, together with the current (partial) valuation.

Each assignment records the level it was made at and the key of the clause which asserted it, if any.
Decisions and assumptions have no reason, and so the literals without a reason on the trail are exactly the literals of the decisions made, together with any units at level zero.

Levels are delimited by the length of the trail when the level was opened.
On a backjump all assignments above the target level are undone, and the polarity of each unassigned atom is saved for use as a later phase.
*/

use crate::engine::cdcl::literal::Lit;

#[derive(Default)]
pub struct Trail {
    /// The value of each atom, if any.
    values: Vec<Option<bool>>,

    /// The level of the assignment of each atom, meaningful only when the atom has a value.
    levels: Vec<u32>,

    /// The key of the clause which asserted the assignment of each atom, if any.
    reasons: Vec<Option<usize>>,

    /// The last value of each atom, kept through backjumps.
    saved: Vec<Option<bool>>,

    /// Assignments, in order.
    pub literals: Vec<Lit>,

    /// The length of the trail as each level was opened.
    limits: Vec<usize>,

    /// Index of the next literal on the trail to propagate.
    pub q_head: usize,
}

impl Trail {
    /// Extends the valuation to include the given atom.
    pub fn ensure_var(&mut self, var: usize) {
        if var >= self.values.len() {
            let count = var + 1;
            self.values.resize(count, None);
            self.levels.resize(count, 0);
            self.reasons.resize(count, None);
            self.saved.resize(count, None);
        }
    }

    pub fn var_count(&self) -> usize {
        self.values.len()
    }

    pub fn value(&self, var: usize) -> Option<bool> {
        self.values[var]
    }

    /// The value of a literal, given the value of its atom.
    pub fn value_lit(&self, lit: Lit) -> Option<bool> {
        self.values[lit.var()].map(|value| value == lit.is_positive())
    }

    pub fn level_of(&self, var: usize) -> u32 {
        self.levels[var]
    }

    pub fn reason_of(&self, var: usize) -> Option<usize> {
        self.reasons[var]
    }

    pub fn saved_phase(&self, var: usize) -> Option<bool> {
        self.saved[var]
    }

    /// The current level.
    pub fn level(&self) -> u32 {
        self.limits.len() as u32
    }

    /// The index on the trail of the first assignment made at a level above zero, if any such level is open.
    pub fn first_decision_index(&self) -> Option<usize> {
        self.limits.first().copied()
    }

    pub fn new_level(&mut self) {
        self.limits.push(self.literals.len());
    }

    /// Assigns the literal true at the current level.
    pub fn assign(&mut self, lit: Lit, reason: Option<usize>) {
        let var = lit.var();
        debug_assert!(self.values[var].is_none());
        self.values[var] = Some(lit.is_positive());
        self.levels[var] = self.level();
        self.reasons[var] = reason;
        self.literals.push(lit);
    }

    /// Undoes all assignments made above the given level.
    pub fn backjump(&mut self, to: u32) {
        if self.level() <= to {
            return;
        }
        let keep = self.limits[to as usize];
        for lit in self.literals.drain(keep..) {
            let var = lit.var();
            self.saved[var] = Some(lit.is_positive());
            self.values[var] = None;
            self.reasons[var] = None;
        }
        self.limits.truncate(to as usize);
        self.q_head = std::cmp::min(self.q_head, self.literals.len());
    }

    /// Whether every atom has a value.
    pub fn is_complete(&self) -> bool {
        self.literals.len() == self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backjump_saves_phases() {
        let mut trail = Trail::default();
        trail.ensure_var(2);
        trail.assign(Lit::from_dimacs(1), None);
        trail.new_level();
        trail.assign(Lit::from_dimacs(-2), None);
        trail.assign(Lit::from_dimacs(3), Some(0));
        trail.q_head = 3;

        assert_eq!(trail.level(), 1);
        assert_eq!(trail.value_lit(Lit::from_dimacs(2)), Some(false));
        assert_eq!(trail.level_of(2), 1);

        trail.backjump(0);
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.literals.len(), 1);
        assert_eq!(trail.q_head, 1);
        assert_eq!(trail.value(1), None);
        assert_eq!(trail.saved_phase(1), Some(false));
        assert_eq!(trail.saved_phase(2), Some(true));
        assert_eq!(trail.value(0), Some(true));
    }
}
