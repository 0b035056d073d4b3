/*!
The engine seam, through which the adapter reaches a solver.

The adapter treats an engine as opaque.
It owns exactly one engine per [handle](crate::ipasir2::Solver) and reaches it only through the primitives of [Engine]:

- Input: [add](Engine::add) streams zero-terminated clauses, and [assume](Engine::assume) notes an assumption for the next solve.
- Search: [solve](Engine::solve), which consumes all pending assumptions.
- Results: [val](Engine::val) and [failed](Engine::failed), meaningful after a satisfiable or unsatisfiable verdict, respectively.
- Configuration: the static [option registry](Engine::options), [set_option](Engine::set_option), and [limit](Engine::limit).
- Callbacks: [set_terminate](Engine::set_terminate), [set_learn](Engine::set_learn), and the optional import/notify hooks.

The import and notify hooks have default implementations which report [EngineError::Unsupported].
An engine which offers either overrides the relevant method, and so capability is always stated rather than silently ignored.

# The reference engine

The library includes a compact conflict-driven clause-learning engine, [CdclEngine].
It exists so the adapter may be used end to end, and nothing in the adapter depends on its internals.
*/

use crate::types::err::EngineError;

pub mod cdcl;
pub use cdcl::{CdclEngine, GenericCdcl};

pub mod config;

/// A callback polled during a solve, returning `true` to request the solve stops.
pub type TerminateFn = dyn FnMut() -> bool;

/// A callback given each learnt clause within the length bound, as DIMACS literals.
pub type LearnFn = dyn FnMut(&[i32]);

/// A callback asked for a clause to import, returning `None` when there is nothing to import.
pub type ImportFn = dyn FnMut() -> Option<Vec<i32>>;

/// A callback given literals assigned and unassigned since the last notification.
pub type NotifyFn = dyn FnMut(&[i32], &[i32]);

/// The outcome of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// A satisfying valuation was found.
    Satisfiable,

    /// No valuation satisfies the formula together with the assumptions.
    Unsatisfiable,

    /// The solve stopped before a verdict, due to a limit or a request to terminate.
    Unknown,
}

/// An entry of the native option registry of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeOption {
    /// The name of the option, unique within the registry.
    pub name: &'static str,

    /// The smallest value the engine accepts.
    pub lo: i64,

    /// The largest value the engine accepts.
    pub hi: i64,

    /// The value of the option on a fresh engine.
    pub default: i64,

    /// Whether the option is exposed for external tuning.
    pub optimizable: bool,

    /// Whether the option may only be set before any input is given.
    pub configuration_only: bool,
}

/// The primitives of a solver engine.
pub trait Engine {
    /// The name and version of the engine.
    fn signature(&self) -> &str;

    /// The native option registry, in registry order.
    fn options(&self) -> &[NativeOption];

    /// Whether the native registry contains an option with the given name.
    fn has_option(&self, name: &str) -> bool {
        self.options().iter().any(|option| option.name == name)
    }

    /// Sets a native option.
    fn set_option(&mut self, name: &str, value: i64) -> Result<(), EngineError>;

    /// The current value of a native option, if the option exists.
    fn get_option(&self, name: &str) -> Option<i64>;

    /// Sets a resource limit on each subsequent solve, with a negative value for no limit.
    fn limit(&mut self, kind: &str, value: i64) -> Result<(), EngineError>;

    /// Adds a literal to the current clause, or closes the clause on `0`.
    fn add(&mut self, lit_or_zero: i32);

    /// Notes an assumption for the next solve.
    fn assume(&mut self, lit: i32);

    /// Solves under all pending assumptions, which are then cleared.
    fn solve(&mut self) -> Verdict;

    /// `lit` if the literal is true on the last satisfying valuation, `-lit` if false, and `0` if the atom is unknown.
    fn val(&self, lit: i32) -> i32;

    /// Whether `lit` is an assumption used to prove the last unsatisfiable verdict.
    fn failed(&self, lit: i32) -> bool;

    /// The largest atom seen by the engine.
    fn max_atom(&self) -> i32;

    /// Sets, or with `None` clears, the terminate callback.
    fn set_terminate(&mut self, callback: Option<Box<TerminateFn>>);

    /// Sets, or with `None` clears, the learn callback, given clauses of at most `max_length` literals.
    fn set_learn(&mut self, max_length: usize, callback: Option<Box<LearnFn>>);

    /// Sets, or with `None` clears, a callback to import clauses during a solve.
    fn set_import(&mut self, _callback: Option<Box<ImportFn>>) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    /// Sets, or with `None` clears, a callback for notification of assignments during a solve.
    fn set_notify(&mut self, _callback: Option<Box<NotifyFn>>) -> Result<(), EngineError> {
        Err(EngineError::Unsupported)
    }

    /// Whether the engine offers an import callback.
    fn offers_import(&self) -> bool {
        false
    }

    /// Whether the engine offers a notify callback.
    fn offers_notify(&self) -> bool {
        false
    }
}
