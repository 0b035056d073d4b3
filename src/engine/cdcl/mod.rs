/*!
A compact conflict-driven clause-learning engine.

The engine is generic over a source of randomness, with [CdclEngine] fixing the source to [MinimalPCG32].

Structures are split by concern, so procedures may borrow one while mutating another:

- The [trail](trail) holds the current valuation together with the level and reason of each assignment.
- The [clause database](clause_db) holds each stored clause along with watch lists for propagation.
- [Activity](decision::Activity) guides decisions.

And, the procedures of the engine are grouped as:

- [propagate](clause_db::propagate), over two watched literals.
- [analysis], for learnt clauses and failed assumptions.
- [decision], for choosing the next atom and its polarity.
- [solve], the search loop.

Clauses may only be added at level zero, and each solve ends at level zero, so clause addition always begins by simplifying against the assignments of level zero.
*/

pub mod analysis;
pub mod clause_db;
pub mod decision;
pub mod literal;
pub mod solve;
pub mod trail;

use rand::{Rng, SeedableRng};

use crate::{
    engine::{
        config::{EngineConfig, NATIVE_OPTIONS},
        Engine, LearnFn, NativeOption, TerminateFn, Verdict,
    },
    generic::{luby::Luby, MinimalPCG32},
    misc::log::targets,
    types::err::EngineError,
};

use clause_db::ClauseDB;
use decision::Activity;
use literal::Lit;
use trail::Trail;

/// The signature of the reference engine.
pub const SIGNATURE: &str = concat!("ipasir2_adapter-cdcl-", env!("CARGO_PKG_VERSION"));

/// The reference engine with the default source of randomness.
pub type CdclEngine = GenericCdcl<MinimalPCG32>;

/// Counts of search events.
#[derive(Default)]
pub struct Counters {
    /// Decisions made during the current (or most recent) solve.
    pub decisions: u64,

    /// Conflicts found during the current (or most recent) solve.
    pub conflicts: u64,

    pub total_decisions: u64,
    pub total_conflicts: u64,

    /// Conflicts since the last restart.
    pub fresh_conflicts: u64,

    pub restarts: u64,
    pub solves: u64,

    /// Schedule of restarts.
    pub luby: Luby,
}

/// Limits on a solve, with `None` for no limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Limits {
    pub decisions: Option<u64>,
    pub conflicts: Option<u64>,
}

pub struct GenericCdcl<R: Rng + SeedableRng> {
    pub config: EngineConfig,
    pub counters: Counters,
    pub limits: Limits,

    trail: Trail,
    clause_db: ClauseDB,
    activity: Activity,

    /// Scratch marks for analysis, one per atom.
    seen: Vec<bool>,

    /// False once the empty clause has been derived.
    ok: bool,

    /// Literals of the clause being added.
    clause_buffer: Vec<Lit>,

    /// Assumptions for the next solve.
    assumptions: Vec<Lit>,

    /// The valuation found by the last satisfiable solve.
    model: Vec<Option<bool>>,

    /// The failed assumptions of the last unsatisfiable solve.
    failed: Vec<Lit>,

    terminate: Option<Box<TerminateFn>>,
    learn: Option<(usize, Box<LearnFn>)>,

    rng: R,
}

impl<R: Rng + SeedableRng> Default for GenericCdcl<R> {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}

impl<R: Rng + SeedableRng> GenericCdcl<R> {
    pub fn from_config(config: EngineConfig) -> Self {
        let rng = R::seed_from_u64(config.seed.value as u64);
        GenericCdcl {
            config,
            counters: Counters::default(),
            limits: Limits::default(),
            trail: Trail::default(),
            clause_db: ClauseDB::default(),
            activity: Activity::default(),
            seen: Vec::default(),
            ok: true,
            clause_buffer: Vec::default(),
            assumptions: Vec::default(),
            model: Vec::default(),
            failed: Vec::default(),
            terminate: None,
            learn: None,
            rng,
        }
    }

    fn ensure_var(&mut self, var: usize) {
        self.trail.ensure_var(var);
        self.clause_db.ensure_var(var);
        self.activity.ensure_var(var);
        if var >= self.seen.len() {
            self.seen.resize(var + 1, false);
        }
    }

    /// A count of the learnt clauses stored.
    pub fn learnt_count(&self) -> usize {
        self.clause_db.learnt_count()
    }

    /// Adds a clause, simplified against the assignments of level zero.
    fn add_clause(&mut self, mut literals: Vec<Lit>) {
        self.trail.backjump(0);
        if !self.ok {
            return;
        }

        literals.sort_unstable();
        literals.dedup();
        if literals.windows(2).any(|pair| pair[0] == !pair[1]) {
            log::trace!(target: targets::PROPAGATION, "Skipped tautology");
            return;
        }
        if literals.iter().any(|&literal| self.trail.value_lit(literal) == Some(true)) {
            return;
        }
        literals.retain(|&literal| self.trail.value_lit(literal).is_none());

        match literals.len() {
            0 => {
                log::info!(target: targets::PROPAGATION, "Empty clause");
                self.ok = false;
            }
            1 => self.trail.assign(literals[0], None),
            _ => {
                self.clause_db.attach(literals, false);
            }
        }
    }
}

impl<R: Rng + SeedableRng> Engine for GenericCdcl<R> {
    fn signature(&self) -> &str {
        SIGNATURE
    }

    fn options(&self) -> &[NativeOption] {
        &NATIVE_OPTIONS
    }

    fn set_option(&mut self, name: &str, value: i64) -> Result<(), EngineError> {
        self.config.set(name, value)?;
        if name == "seed" {
            self.rng = R::seed_from_u64(value as u64);
        }
        Ok(())
    }

    fn get_option(&self, name: &str) -> Option<i64> {
        self.config.get(name)
    }

    fn limit(&mut self, kind: &str, value: i64) -> Result<(), EngineError> {
        let limit = u64::try_from(value).ok();
        match kind {
            "decisions" => self.limits.decisions = limit,
            "conflicts" => self.limits.conflicts = limit,
            _ => return Err(EngineError::UnknownLimit),
        }
        Ok(())
    }

    fn add(&mut self, lit_or_zero: i32) {
        match lit_or_zero {
            0 => {
                let clause = std::mem::take(&mut self.clause_buffer);
                self.add_clause(clause);
            }
            _ => {
                let literal = Lit::from_dimacs(lit_or_zero);
                self.ensure_var(literal.var());
                self.clause_buffer.push(literal);
            }
        }
    }

    fn assume(&mut self, lit: i32) {
        let literal = Lit::from_dimacs(lit);
        self.ensure_var(literal.var());
        self.assumptions.push(literal);
    }

    fn solve(&mut self) -> Verdict {
        let assumptions = std::mem::take(&mut self.assumptions);
        self.model.clear();
        self.failed.clear();
        self.counters.decisions = 0;
        self.counters.conflicts = 0;
        self.counters.solves += 1;

        self.trail.backjump(0);
        let verdict = self.search(&assumptions);
        self.trail.backjump(0);

        log::info!(
            target: targets::DECISION,
            "Solve {} ended {verdict:?} after {} decisions and {} conflicts",
            self.counters.solves,
            self.counters.decisions,
            self.counters.conflicts
        );
        verdict
    }

    fn val(&self, lit: i32) -> i32 {
        if lit == 0 {
            return 0;
        }
        let literal = Lit::from_dimacs(lit);
        match self.model.get(literal.var()).copied().flatten() {
            Some(value) if value == literal.is_positive() => lit,
            Some(_) => -lit,
            None => 0,
        }
    }

    fn failed(&self, lit: i32) -> bool {
        lit != 0 && self.failed.contains(&Lit::from_dimacs(lit))
    }

    fn max_atom(&self) -> i32 {
        self.trail.var_count() as i32
    }

    fn set_terminate(&mut self, callback: Option<Box<TerminateFn>>) {
        self.terminate = callback;
    }

    fn set_learn(&mut self, max_length: usize, callback: Option<Box<LearnFn>>) {
        self.learn = callback.map(|callback| (max_length, callback));
    }
}
