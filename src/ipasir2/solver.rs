use crate::{
    engine::{CdclEngine, Engine, ImportFn, LearnFn, NotifyFn, TerminateFn, Verdict},
    ipasir2::{
        bridge::{self, Hook},
        catalog::{self, Catalog, OptionDescriptor},
        gateway, State,
    },
    misc::log::targets,
    types::err::ErrorCode,
};

/// The result of a solve, with the conventional codes of incremental solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SolveResult {
    Satisfiable = 10,
    Unsatisfiable = 20,
    Unknown = 0,
}

impl SolveResult {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for SolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A handle to an engine, through the IPASIR2 protocol.
///
/// The handle owns the engine, tracks the lifecycle [State], and checks every call against the state before the engine is reached.
/// On error the handle and engine are as they were before the call.
pub struct Solver<E: Engine = CdclEngine> {
    engine: E,
    state: State,

    /// Whether some literal has been added since the last `0`.
    clause_open: bool,
}

impl<E: Engine + Default> Default for Solver<E> {
    fn default() -> Self {
        Self::from_engine(E::default())
    }
}

impl<E: Engine + Default> Solver<E> {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Whether the value is never a literal.
fn is_malformed(lit: i32) -> bool {
    lit == 0 || lit == i32::MIN
}

impl<E: Engine> Solver<E> {
    /// A handle to the given engine, in [State::Config].
    pub fn from_engine(engine: E) -> Self {
        log::trace!(target: targets::LIFECYCLE, "Handle to {}", engine.signature());
        Solver {
            engine,
            state: State::Config,
            clause_open: false,
        }
    }

    /// The signature of the engine, unmodified.
    pub fn signature(&self) -> &str {
        self.engine.signature()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn transition(&mut self, to: State) {
        if self.state != to {
            log::trace!(target: targets::LIFECYCLE, "{} -> {}", self.state, to);
            self.state = to;
        }
    }

    /// The catalog of options which may be set, built afresh.
    pub fn options(&self) -> Result<Catalog, ErrorCode> {
        Catalog::build(&self.engine)
    }

    /// The descriptor of a single option.
    pub fn option(&self, name: &str) -> Result<OptionDescriptor, ErrorCode> {
        catalog::lookup(&self.engine, name)
            .map(|(descriptor, _)| descriptor)
            .ok_or(ErrorCode::UnsupportedOption)
    }

    /// Sets an option, or a resource limit through a synthetic option.
    ///
    /// `index` must be `0`, as no option is indexed.
    pub fn set_option(&mut self, name: &str, value: i64, index: i64) -> Result<(), ErrorCode> {
        gateway::set_option(&mut self.engine, self.state, name, value, index)
    }

    /// Adds a literal to the current clause, or closes the clause on `0`.
    ///
    /// From any state other than [State::Input], the handle moves to [State::Input] before the literal is given to the engine.
    pub fn add(&mut self, lit_or_zero: i32) -> Result<(), ErrorCode> {
        if lit_or_zero == i32::MIN {
            return Err(ErrorCode::InvalidArgument);
        }
        self.transition(State::Input);
        self.engine.add(lit_or_zero);
        self.clause_open = lit_or_zero != 0;
        Ok(())
    }

    /// Adds each literal of the clause, followed by `0`.
    ///
    /// The clause is checked in full before any literal is added, and may not be added while a clause given through [add](Solver::add) is open.
    pub fn add_clause(&mut self, clause: &[i32]) -> Result<(), ErrorCode> {
        if clause.iter().any(|&lit| is_malformed(lit)) {
            return Err(ErrorCode::InvalidArgument);
        }
        if self.clause_open {
            log::info!(target: targets::LIFECYCLE, "Clause while a clause is open");
            return Err(ErrorCode::InvalidState);
        }
        for &lit in clause {
            self.add(lit)?;
        }
        self.add(0)
    }

    /// Assumes a literal for the next solve.
    pub fn assume(&mut self, lit: i32) -> Result<(), ErrorCode> {
        if is_malformed(lit) {
            return Err(ErrorCode::InvalidArgument);
        }
        if self.clause_open {
            log::info!(target: targets::LIFECYCLE, "Assumption {lit} while a clause is open");
            return Err(ErrorCode::InvalidState);
        }
        self.transition(State::Input);
        self.engine.assume(lit);
        Ok(())
    }

    /// Solves the formula under any pending assumptions, which are consumed.
    ///
    /// A solve stopped by a limit or terminate callback returns [SolveResult::Unknown] and leaves the handle in [State::Input].
    pub fn solve(&mut self) -> Result<SolveResult, ErrorCode> {
        if self.state == State::Config {
            return Err(ErrorCode::InvalidState);
        }
        if self.clause_open {
            log::info!(target: targets::LIFECYCLE, "Solve while a clause is open");
            return Err(ErrorCode::InvalidState);
        }

        let result = match self.engine.solve() {
            Verdict::Satisfiable => {
                self.transition(State::Sat);
                SolveResult::Satisfiable
            }
            Verdict::Unsatisfiable => {
                self.transition(State::Unsat);
                SolveResult::Unsatisfiable
            }
            Verdict::Unknown => {
                self.transition(State::Input);
                SolveResult::Unknown
            }
        };
        Ok(result)
    }

    /// The value of a literal on the satisfying valuation, with `None` if the engine has no value for the literal.
    pub fn value(&self, lit: i32) -> Result<Option<bool>, ErrorCode> {
        if is_malformed(lit) {
            return Err(ErrorCode::InvalidArgument);
        }
        if self.state != State::Sat {
            return Err(ErrorCode::InvalidState);
        }
        let value = self.engine.val(lit);
        Ok(match value {
            0 => None,
            _ => Some(value == lit),
        })
    }

    /// Whether the assumption was used to prove unsatisfiability.
    pub fn failed(&self, lit: i32) -> Result<bool, ErrorCode> {
        if is_malformed(lit) {
            return Err(ErrorCode::InvalidArgument);
        }
        if self.state != State::Unsat {
            return Err(ErrorCode::InvalidState);
        }
        Ok(self.engine.failed(lit))
    }

    /// The number of atoms with a value on the satisfying valuation.
    pub fn assignment_size(&self) -> Result<i32, ErrorCode> {
        if self.state != State::Sat {
            return Err(ErrorCode::InvalidState);
        }
        Ok(self.engine.max_atom())
    }

    /// The literal of the atom `index + 1` true on the satisfying valuation.
    pub fn assignment(&self, index: i32) -> Result<i32, ErrorCode> {
        let size = self.assignment_size()?;
        if index < 0 || index >= size {
            return Err(ErrorCode::InvalidArgument);
        }
        Ok(self.engine.val(index + 1))
    }

    pub fn set_terminate(&mut self, callback: Option<Box<TerminateFn>>) -> Result<(), ErrorCode> {
        bridge::register_terminate(&mut self.engine, callback);
        Ok(())
    }

    /// Sets a callback given each learnt clause of at most `max_length` literals.
    pub fn set_export(&mut self, max_length: i32, callback: Option<Box<LearnFn>>) -> Result<(), ErrorCode> {
        bridge::register_export(&mut self.engine, max_length, callback)
    }

    pub fn set_import(&mut self, callback: Option<Box<ImportFn>>) -> Result<(), ErrorCode> {
        bridge::register_import(&mut self.engine, callback)
    }

    pub fn set_notify(&mut self, callback: Option<Box<NotifyFn>>) -> Result<(), ErrorCode> {
        bridge::register_notify(&mut self.engine, callback)
    }

    pub fn supports(&self, hook: Hook) -> bool {
        bridge::supports(&self.engine, hook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_literals_leave_state() {
        let mut solver = Solver::<CdclEngine>::new();
        assert_eq!(solver.add(i32::MIN), Err(ErrorCode::InvalidArgument));
        assert_eq!(solver.assume(0), Err(ErrorCode::InvalidArgument));
        assert_eq!(solver.add_clause(&[1, 0, 2]), Err(ErrorCode::InvalidArgument));
        assert_eq!(solver.state(), State::Config);
    }

    #[test]
    fn assignment_enumeration() {
        let mut solver = Solver::<CdclEngine>::new();
        solver.add_clause(&[1]).unwrap();
        solver.add_clause(&[-2]).unwrap();
        assert_eq!(solver.assignment_size(), Err(ErrorCode::InvalidState));
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
        assert_eq!(solver.assignment_size(), Ok(2));
        assert_eq!(solver.assignment(0), Ok(1));
        assert_eq!(solver.assignment(1), Ok(-2));
        assert_eq!(solver.assignment(2), Err(ErrorCode::InvalidArgument));
    }
}
