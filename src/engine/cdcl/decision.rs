/*!
Decisions of the reference engine.

An atom is chosen by activity, with each atom bumped when used in conflict analysis and all activity decaying after each conflict.
Decay is implemented by increasing the size of a bump, and all activity is rescaled if some activity grows too large.

With `randomfreq` set above zero, the engine will, with the given chance per thousand, instead decide on a random atom without a value.

The polarity of a decision is the saved phase of the atom when phase saving is enabled and the atom has been assigned before, and otherwise is given by the `phase` option.
*/

use rand::{Rng, SeedableRng};

use crate::{
    engine::cdcl::{literal::Lit, GenericCdcl},
    misc::log::targets,
};

const RESCALE_LIMIT: f64 = 1e100;

/// Activity of each atom.
pub struct Activity {
    scores: Vec<f64>,
    increment: f64,
}

impl Default for Activity {
    fn default() -> Self {
        Activity {
            scores: Vec::default(),
            increment: 1.0,
        }
    }
}

impl Activity {
    pub fn ensure_var(&mut self, var: usize) {
        if var >= self.scores.len() {
            self.scores.resize(var + 1, 0.0);
        }
    }

    pub fn score(&self, var: usize) -> f64 {
        self.scores[var]
    }

    pub fn bump(&mut self, var: usize) {
        self.scores[var] += self.increment;
        if self.scores[var] > RESCALE_LIMIT {
            self.scores.iter_mut().for_each(|score| *score /= RESCALE_LIMIT);
            self.increment /= RESCALE_LIMIT;
        }
    }

    /// Decays all activity by the given factor, per thousand.
    pub fn decay(&mut self, per_mille: i64) {
        self.increment *= 1000.0 / per_mille as f64;
    }
}

impl<R: Rng + SeedableRng> GenericCdcl<R> {
    /// A literal to decide on, or `None` if every atom has a value.
    pub(super) fn decision_candidate(&mut self) -> Option<Lit> {
        let count = self.trail.var_count();
        if self.trail.is_complete() {
            return None;
        }

        let random_frequency = self.config.random_frequency.value;
        if random_frequency > 0 && self.rng.random_range(0..1000) < random_frequency {
            let start = self.rng.random_range(0..count);
            if let Some(var) = (start..count)
                .chain(0..start)
                .find(|&var| self.trail.value(var).is_none())
            {
                log::trace!(target: targets::DECISION, "Random decision on atom {}", var + 1);
                return Some(self.polarity(var));
            }
        }

        let mut best: Option<usize> = None;
        for var in 0..count {
            if self.trail.value(var).is_some() {
                continue;
            }
            match best {
                Some(current) if self.activity.score(current) >= self.activity.score(var) => {}
                _ => best = Some(var),
            }
        }
        best.map(|var| self.polarity(var))
    }

    fn polarity(&self, var: usize) -> Lit {
        let saved = match self.config.phase_saving.value {
            0 => None,
            _ => self.trail.saved_phase(var),
        };
        Lit::new(var, saved.unwrap_or(self.config.phase.value == 1))
    }
}
