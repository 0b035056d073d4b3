/*!
The search procedure of the reference engine.

Roughly, each iteration of the search loop:

- Polls the terminate callback, if set.
- Propagates all pending assignments.
  + On a conflict at level zero the formula is unsatisfiable, and otherwise a clause is learnt, passed to the learn callback if short enough, and asserted after a backjump.
- Opens a level for the next assumption, if any assumption has not been given a level.
  + An assumption which is already true is given an empty level, and an assumption which is false ends the solve with the failed assumptions recovered through [analyze_final](GenericCdcl::analyze_final).
- Otherwise, makes a decision, or reports the formula satisfiable if every atom has a value.

Limits on decisions and conflicts are counted from the start of each solve.
A solve stops with [Verdict::Unknown] just before a decision or conflict would exceed a limit, and so a limit of `0` permits no decision (or conflict) at all.
Assumptions are not counted as decisions.

Restarts are scheduled by the luby sequence, scaled by `restartint`, and backjump to level zero.
Whatever the verdict, the engine is at level zero once a solve returns.
*/

use rand::{Rng, SeedableRng};

use crate::{
    engine::{
        cdcl::{clause_db::propagate, literal::Lit, GenericCdcl},
        Verdict,
    },
    misc::log::targets,
};

impl<R: Rng + SeedableRng> GenericCdcl<R> {
    /// For documentation see [solve](crate::engine::cdcl::solve).
    pub(super) fn search(&mut self, assumptions: &[Lit]) -> Verdict {
        if !self.ok {
            return Verdict::Unsatisfiable;
        }

        'search_loop: loop {
            if let Some(terminate) = self.terminate.as_mut() {
                if terminate() {
                    log::info!(target: targets::DECISION, "Terminated by callback");
                    return Verdict::Unknown;
                }
            }

            if let Some(conflict) = propagate(&mut self.trail, &mut self.clause_db) {
                if self.trail.level() == 0 {
                    self.ok = false;
                    return Verdict::Unsatisfiable;
                }

                if self.limits.conflicts.is_some_and(|limit| self.counters.conflicts >= limit) {
                    log::info!(target: targets::ANALYSIS, "Conflict limit reached");
                    return Verdict::Unknown;
                }
                self.counters.conflicts += 1;
                self.counters.total_conflicts += 1;

                let (learnt, backjump_level) = self.analyze(conflict);
                self.export(&learnt);

                self.trail.backjump(backjump_level);
                let asserted = learnt[0];
                match learnt.len() {
                    1 => self.trail.assign(asserted, None),
                    _ => {
                        let key = self.clause_db.attach(learnt, true);
                        self.trail.assign(asserted, Some(key));
                    }
                }
                self.activity.decay(self.config.decay.value);

                self.counters.fresh_conflicts += 1;
                if self.restart_due() {
                    self.counters.luby.next();
                    self.counters.fresh_conflicts = 0;
                    self.counters.restarts += 1;
                    log::trace!(target: targets::DECISION, "Restart {}", self.counters.restarts);
                    self.trail.backjump(0);
                }
                continue 'search_loop;
            }

            while (self.trail.level() as usize) < assumptions.len() {
                let assumption = assumptions[self.trail.level() as usize];
                match self.trail.value_lit(assumption) {
                    Some(true) => self.trail.new_level(),

                    Some(false) => {
                        self.analyze_final(assumption);
                        return Verdict::Unsatisfiable;
                    }

                    None => {
                        self.trail.new_level();
                        self.trail.assign(assumption, None);
                        continue 'search_loop;
                    }
                }
            }

            let Some(decision) = self.decision_candidate() else {
                self.record_model();
                return Verdict::Satisfiable;
            };

            if self.limits.decisions.is_some_and(|limit| self.counters.decisions >= limit) {
                log::info!(target: targets::DECISION, "Decision limit reached");
                return Verdict::Unknown;
            }
            self.counters.decisions += 1;
            self.counters.total_decisions += 1;

            log::trace!(target: targets::DECISION, "Decision {decision}");
            self.trail.new_level();
            self.trail.assign(decision, None);
        }
    }

    fn restart_due(&self) -> bool {
        self.config.restart.value != 0
            && self.counters.fresh_conflicts
                >= u64::from(self.counters.luby.current()) * self.config.restart_interval.value as u64
    }

    /// Passes a learnt clause to the learn callback, if set and the clause is within the length bound.
    fn export(&mut self, learnt: &[Lit]) {
        if let Some((max_length, callback)) = self.learn.as_mut() {
            if learnt.len() <= *max_length {
                let clause = learnt.iter().map(|literal| literal.to_dimacs()).collect::<Vec<_>>();
                callback(&clause);
            }
        }
    }

    fn record_model(&mut self) {
        self.model = (0..self.trail.var_count())
            .map(|var| self.trail.value(var))
            .collect();

        if self.config.check.value != 0 {
            let unsatisfied = self.clause_db.iter().filter(|clause| !clause.learnt).any(|clause| {
                !clause
                    .literals
                    .iter()
                    .any(|literal| self.model[literal.var()] == Some(literal.is_positive()))
            });
            match unsatisfied {
                true => log::error!(target: targets::DECISION, "Valuation fails to satisfy some clause"),
                false => log::info!(target: targets::DECISION, "Valuation checked"),
            }
        }
    }
}
