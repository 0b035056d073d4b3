//! An adapter exposing an incremental SAT engine through the IPASIR2 protocol.
//!
//! IPASIR2 is a capability-negotiated revision of the IPASIR interface for incremental satisfiability solvers.
//! A client may ask a solver which options it offers, set options by name, and register callbacks, and is told plainly when something is not supported.
//!
//! The adapter holds an engine as an opaque collaborator, reached only through a narrow set of primitives: adding literals, assuming literals, solving, reading values and failed assumptions, and setting options, limits, and callbacks.
//! These primitives are the [Engine](crate::engine::Engine) trait.
//!
//! # Orientation
//!
//! The library is designed around a [handle](crate::ipasir2::Solver), which owns exactly one engine and checks every call against the lifecycle state of the protocol.
//!
//! Useful starting points, then, may be:
//! - The [ipasir2] module, for the handle along with the [catalog](crate::ipasir2::catalog) of options, the [gateway](crate::ipasir2::gateway) through which options are set, and the [bridge](crate::ipasir2::bridge) for callbacks.
//! - The [ffi] module, for C bindings of the handle.
//! - The [engine] module, for the engine seam and the included reference engine.
//!
//! A formula may be given through the handle clause by clause, or read from its [DIMACS](crate::ipasir2::Solver::read_dimacs) representation.
//!
//! # Errors
//!
//! Every call through a handle returns a [Result], with failures from the closed set of [ErrorCode](crate::types::err::ErrorCode)s.
//! A failed call changes nothing.
//!
//! # Logs
//!
//! Calls to [log!](log) are made at the boundary of the adapter and within the reference engine, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Lifecycle transitions of a handle can be found with `RUST_LOG=lifecycle=trace …`
//! - Options refused by the engine can be found with `RUST_LOG=gateway=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod dimacs;
pub mod engine;
pub mod ffi;
pub mod generic;
pub mod ipasir2;
pub mod misc;
pub mod types;
