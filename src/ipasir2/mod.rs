//! The IPASIR2 protocol, over an opaque [Engine](crate::engine::Engine).
//!
//! Information about the protocol may be found at <https://github.com/ipasir2/ipasir2>.
//!
//! A [Solver] is the handle of the protocol, and owns exactly one engine.
//! Every call through a handle is checked against the lifecycle [State] of the handle before the engine is reached, and on error nothing changes.
//!
//! The protocol is split by concern:
//! - [catalog] lists the options which may be set, as synthetic limit options followed by the optimizable options of the engine.
//! - [gateway] routes a write to an option to either a resource limit or a native option.
//! - [bridge] registers callbacks, and reports whether each hook is supported.
//! - [State] and the transitions of [Solver] give the lifecycle.
//!
//! C bindings for a handle are given in [ffi](crate::ffi).
//!
//! # Example
//!
//! ```rust
//! use ipasir2_adapter::ipasir2::{SolveResult, Solver, State};
//!
//! let mut solver: Solver = Solver::default();
//! assert_eq!(solver.state(), State::Config);
//!
//! solver.set_option("ipasir.limits.conflicts", 1000, 0).unwrap();
//!
//! solver.add_clause(&[1, 2]).unwrap();
//! solver.add_clause(&[-1]).unwrap();
//! assert_eq!(solver.state(), State::Input);
//!
//! assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
//! assert_eq!(solver.value(2), Ok(Some(true)));
//!
//! solver.assume(-2).unwrap();
//! assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
//! assert_eq!(solver.failed(-2), Ok(true));
//! ```

pub mod bridge;
pub use bridge::Hook;

pub mod catalog;
pub use catalog::{Catalog, OptionDescriptor};

pub mod gateway;

mod state;
pub use state::State;

mod solver;
pub use solver::{SolveResult, Solver};
