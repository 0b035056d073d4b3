//! Lifecycle states of a solver handle.
//!
//! States are ordered by rank, with the satisfiable and unsatisfiable states sharing the highest rank:
//!
//! ```none
//! Config < Input < Sat = Unsat
//! ```
//!
//! The order is used to bound the states in which an option may be set, see [within](State::within).

/// The lifecycle state of a solver handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// The initial state, before any input.
    Config,

    /// Clauses and assumptions are being given.
    Input,

    /// The last solve found a satisfying valuation.
    Sat,

    /// The last solve proved the formula unsatisfiable under the assumptions given.
    Unsat,
}

impl State {
    pub fn rank(self) -> u8 {
        match self {
            State::Config => 0,
            State::Input => 1,
            State::Sat | State::Unsat => 2,
        }
    }

    /// Whether the state does not exceed the given ceiling.
    pub fn within(self, ceiling: State) -> bool {
        self.rank() <= ceiling.rank()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => write!(f, "CONFIG"),
            Self::Input => write!(f, "INPUT"),
            Self::Sat => write!(f, "SAT"),
            Self::Unsat => write!(f, "UNSAT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sat_and_unsat_share_a_rank() {
        assert!(State::Sat.within(State::Unsat));
        assert!(State::Unsat.within(State::Sat));
        assert!(State::Config.within(State::Input));
        assert!(!State::Sat.within(State::Input));
        assert!(!State::Input.within(State::Config));
    }
}
