use ipasir2_adapter::{
    ipasir2::{SolveResult, Solver, State},
    types::err::ErrorCode,
};

mod initial {
    use super::*;

    #[test]
    fn config_without_results() {
        let mut solver: Solver = Solver::default();
        assert_eq!(solver.state(), State::Config);

        assert_eq!(solver.value(1), Err(ErrorCode::InvalidState));
        assert_eq!(solver.failed(1), Err(ErrorCode::InvalidState));
        assert_eq!(solver.solve(), Err(ErrorCode::InvalidState));
        assert_eq!(solver.state(), State::Config);
    }

    #[test]
    fn input_before_acceptance() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add(1).is_ok());
        assert_eq!(solver.state(), State::Input);

        let mut solver: Solver = Solver::default();
        assert!(solver.assume(-4).is_ok());
        assert_eq!(solver.state(), State::Input);
    }

    #[test]
    fn malformed_before_transition() {
        let mut solver: Solver = Solver::default();
        assert_eq!(solver.add(i32::MIN), Err(ErrorCode::InvalidArgument));
        assert_eq!(solver.assume(0), Err(ErrorCode::InvalidArgument));
        assert_eq!(solver.assume(i32::MIN), Err(ErrorCode::InvalidArgument));
        assert_eq!(solver.state(), State::Config);
    }
}

mod input {
    use super::*;

    #[test]
    fn open_clause() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add(1).is_ok());
        assert!(solver.add(2).is_ok());

        assert_eq!(solver.assume(3), Err(ErrorCode::InvalidState));
        assert_eq!(solver.solve(), Err(ErrorCode::InvalidState));
        assert_eq!(solver.state(), State::Input);

        assert!(solver.add(0).is_ok());
        assert!(solver.assume(3).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
    }

    #[test]
    fn whole_clause_while_open() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add(1).is_ok());
        assert_eq!(solver.add_clause(&[-1]), Err(ErrorCode::InvalidState));

        // The open clause is untouched, and closes as [1].
        assert!(solver.add(0).is_ok());
        assert!(solver.add_clause(&[-1, 2]).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
        assert_eq!(solver.value(1), Ok(Some(true)));
        assert_eq!(solver.value(2), Ok(Some(true)));

        assert!(solver.add(2).is_ok());
        assert_eq!(solver.add_clause(&[-2]), Err(ErrorCode::InvalidState));
        assert!(solver.add(0).is_ok());
        assert!(solver.add_clause(&[-1]).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
    }

    #[test]
    fn empty_clause() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add(0).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
        assert_eq!(solver.state(), State::Unsat);
    }
}

mod results {
    use super::*;

    #[test]
    fn value_only_in_sat() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add_clause(&[1]).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
        assert_eq!(solver.state(), State::Sat);

        assert_eq!(solver.value(1), Ok(Some(true)));
        assert_eq!(solver.value(-1), Ok(Some(false)));
        assert_eq!(solver.value(0), Err(ErrorCode::InvalidArgument));
        assert_eq!(solver.failed(1), Err(ErrorCode::InvalidState));
    }

    #[test]
    fn failed_only_in_unsat() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add_clause(&[-1]).is_ok());
        assert!(solver.assume(1).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));

        assert_eq!(solver.failed(1), Ok(true));
        assert_eq!(solver.value(1), Err(ErrorCode::InvalidState));
    }

    #[test]
    fn add_after_sat_returns_to_input() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add_clause(&[1, 2]).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));

        assert!(solver.add(-1).is_ok());
        assert_eq!(solver.state(), State::Input);
        assert_eq!(solver.value(1), Err(ErrorCode::InvalidState));
        assert!(solver.add(0).is_ok());

        assert!(solver.add_clause(&[-2]).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
    }

    #[test]
    fn assume_after_unsat_returns_to_input() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add_clause(&[-1, 2]).is_ok());
        assert!(solver.add_clause(&[-2]).is_ok());
        assert!(solver.assume(1).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));

        assert!(solver.assume(-1).is_ok());
        assert_eq!(solver.state(), State::Input);
        assert_eq!(solver.failed(1), Err(ErrorCode::InvalidState));
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
        assert_eq!(solver.value(1), Ok(Some(false)));
    }

    #[test]
    fn repeated_solves() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add_clause(&[1, 2]).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));

        assert!(solver.add_clause(&[-1]).is_ok());
        assert!(solver.add_clause(&[-2]).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
    }

    #[test]
    fn assumptions_are_consumed() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add_clause(&[1, 2]).is_ok());
        assert!(solver.assume(-1).is_ok());
        assert!(solver.assume(-2).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
    }
}

mod aborted {
    use super::*;

    #[test]
    fn unknown_stays_in_input() {
        let mut solver: Solver = Solver::default();
        assert!(solver.set_option("ipasir.limits.decisions", 0, 0).is_ok());
        assert!(solver.add_clause(&[1, 2]).is_ok());

        assert_eq!(solver.solve(), Ok(SolveResult::Unknown));
        assert_eq!(solver.state(), State::Input);
        assert_eq!(solver.value(1), Err(ErrorCode::InvalidState));
        assert_eq!(solver.failed(1), Err(ErrorCode::InvalidState));
    }
}
