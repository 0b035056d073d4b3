/*!
Conflict analysis for the reference engine.

# Overview

[analyze](GenericCdcl::analyze) resolves a conflicting clause against the reasons of literals assigned at the current level, walking the trail backwards, until a single literal of the current level remains.
The result is the first unique implication point clause, with the negation of the remaining literal at index `0`.

Of the other literals, one assigned at the highest level is placed at index `1`, and this level is the level to backjump to.
So, after the backjump the clause asserts the literal at index `0` and watches the literals at indices `0` and `1` as required by [propagate](crate::engine::cdcl::clause_db::propagate).

[analyze_final](GenericCdcl::analyze_final) is a variant for assumptions.
Given an assumption found false, the assumptions responsible are recovered by walking the trail backwards and collecting each literal without a reason which was used to derive the negation of the assumption.
As assumptions occupy the first levels, such literals are exactly the responsible assumptions.
*/

use rand::{Rng, SeedableRng};

use crate::{
    engine::cdcl::{literal::Lit, GenericCdcl},
    misc::log::targets,
};

impl<R: Rng + SeedableRng> GenericCdcl<R> {
    /// For documentation see [analysis](crate::engine::cdcl::analysis).
    ///
    /// Returns the learnt clause together with the level to backjump to.
    pub(super) fn analyze(&mut self, conflict: usize) -> (Vec<Lit>, u32) {
        let level = self.trail.level();
        let mut learnt = Vec::default();
        let mut pending = 0_usize;
        let mut key = conflict;
        let mut resolved: Option<usize> = None;
        let mut index = self.trail.literals.len();

        let uip = loop {
            for &literal in &self.clause_db.get(key).literals {
                let var = literal.var();
                if Some(var) == resolved || self.seen[var] || self.trail.level_of(var) == 0 {
                    continue;
                }
                self.seen[var] = true;
                self.activity.bump(var);
                match self.trail.level_of(var) >= level {
                    true => pending += 1,
                    false => learnt.push(literal),
                }
            }

            let literal = loop {
                index -= 1;
                let literal = self.trail.literals[index];
                if self.seen[literal.var()] {
                    break literal;
                }
            };
            self.seen[literal.var()] = false;
            pending -= 1;

            if pending == 0 {
                break literal;
            }
            match self.trail.reason_of(literal.var()) {
                Some(reason) => {
                    key = reason;
                    resolved = Some(literal.var());
                }
                None => break literal,
            }
        };

        for literal in &learnt {
            self.seen[literal.var()] = false;
        }
        learnt.insert(0, !uip);

        let mut backjump_level = 0;
        if learnt.len() > 1 {
            let mut highest = 1;
            for position in 2..learnt.len() {
                if self.trail.level_of(learnt[position].var()) > self.trail.level_of(learnt[highest].var()) {
                    highest = position;
                }
            }
            learnt.swap(1, highest);
            backjump_level = self.trail.level_of(learnt[1].var());
        }

        log::trace!(target: targets::ANALYSIS, "Learnt clause of length {} asserting {}", learnt.len(), learnt[0]);
        (learnt, backjump_level)
    }

    /// For documentation see [analysis](crate::engine::cdcl::analysis).
    ///
    /// Stores the assumptions responsible for the given (false) assumption as the failed assumptions.
    pub(super) fn analyze_final(&mut self, assumption: Lit) {
        self.failed.clear();
        self.failed.push(assumption);

        let Some(start) = self.trail.first_decision_index() else {
            return;
        };
        if self.trail.level_of(assumption.var()) == 0 {
            return;
        }

        self.seen[assumption.var()] = true;
        for index in (start..self.trail.literals.len()).rev() {
            let literal = self.trail.literals[index];
            let var = literal.var();
            if !self.seen[var] {
                continue;
            }
            match self.trail.reason_of(var) {
                None => self.failed.push(literal),
                Some(reason) => {
                    for other in &self.clause_db.get(reason).literals {
                        if other.var() != var && self.trail.level_of(other.var()) > 0 {
                            self.seen[other.var()] = true;
                        }
                    }
                }
            }
            self.seen[var] = false;
        }

        log::trace!(target: targets::ANALYSIS, "Failed assumptions: {}", self.failed.len());
    }
}
