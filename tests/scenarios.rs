use std::{cell::RefCell, rc::Rc};

use ipasir2_adapter::{
    ipasir2::{SolveResult, Solver, State},
    types::err::ErrorCode,
};

mod end_to_end {
    use super::*;

    #[test]
    fn exclusive_choice() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add_clause(&[1, 2]).is_ok());
        assert!(solver.add_clause(&[-1, -2]).is_ok());

        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));

        let p = solver.value(1).unwrap().unwrap();
        let q = solver.value(2).unwrap().unwrap();
        assert!(p != q);
        assert_eq!(solver.value(-1), Ok(Some(!p)));
    }

    #[test]
    fn contradiction_without_assumptions() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add_clause(&[1]).is_ok());
        assert!(solver.add_clause(&[-1]).is_ok());

        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
        assert_eq!(solver.failed(1), Ok(false));
        assert_eq!(solver.failed(-1), Ok(false));
    }

    #[test]
    fn contradiction_with_assumption() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add_clause(&[-1]).is_ok());
        assert!(solver.assume(1).is_ok());

        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
        assert_eq!(solver.failed(1), Ok(true));
    }

    #[test]
    fn export_bound() {
        let formula = |solver: &mut Solver| {
            let atom = |pigeon: i32, hole: i32| pigeon * 4 + hole + 1;
            for pigeon in 0..5 {
                assert!(solver.add_clause(&(0..4).map(|hole| atom(pigeon, hole)).collect::<Vec<_>>()).is_ok());
            }
            for hole in 0..4 {
                for a in 0..5 {
                    for b in (a + 1)..5 {
                        assert!(solver.add_clause(&[-atom(a, hole), -atom(b, hole)]).is_ok());
                    }
                }
            }
        };

        let longest = Rc::new(RefCell::new(0));
        let sink = longest.clone();
        let mut solver: Solver = Solver::default();
        assert!(solver
            .set_export(i32::MAX, Some(Box::new(move |clause: &[i32]| {
                let mut longest = sink.borrow_mut();
                *longest = std::cmp::max(*longest, clause.len());
            })))
            .is_ok());
        formula(&mut solver);
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
        assert!(*longest.borrow() > 3);

        let bounded = Rc::new(RefCell::new(0));
        let sink = bounded.clone();
        let mut solver: Solver = Solver::default();
        assert!(solver
            .set_export(3, Some(Box::new(move |clause: &[i32]| {
                let mut bounded = sink.borrow_mut();
                *bounded = std::cmp::max(*bounded, clause.len());
            })))
            .is_ok());
        formula(&mut solver);
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
        assert!(*bounded.borrow() <= 3);

        let mut solver: Solver = Solver::default();
        assert_eq!(
            solver.set_export(-1, Some(Box::new(|_: &[i32]| {}))),
            Err(ErrorCode::UnsupportedArgument)
        );
        assert_eq!(solver.state(), State::Config);
    }
}

mod incremental {
    use super::*;

    #[test]
    fn chain_of_assumptions() {
        let mut solver: Solver = Solver::default();
        for clause in [[-1, 2], [-2, 3], [-3, 4], [-4, 5]] {
            assert!(solver.add_clause(&clause).is_ok());
        }
        assert!(solver.add_clause(&[-5]).is_ok());

        assert!(solver.assume(1).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
        assert_eq!(solver.failed(1), Ok(true));

        assert!(solver.assume(-1).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
        assert_eq!(solver.value(5), Ok(Some(false)));
    }

    #[test]
    fn core_of_assumptions() {
        let mut solver: Solver = Solver::default();
        assert!(solver.add_clause(&[-1, -2, 3]).is_ok());
        assert!(solver.add_clause(&[-3, -4]).is_ok());

        for assumption in [5, 1, 2, 6, 4] {
            assert!(solver.assume(assumption).is_ok());
        }
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));

        assert_eq!(solver.failed(1), Ok(true));
        assert_eq!(solver.failed(2), Ok(true));
        assert_eq!(solver.failed(4), Ok(true));
        assert_eq!(solver.failed(5), Ok(false));
        assert_eq!(solver.failed(6), Ok(false));
    }

    #[test]
    fn growing_formula() {
        let mut solver: Solver = Solver::default();
        let atoms = 6;
        for atom in 1..atoms {
            assert!(solver.add_clause(&[-atom, atom + 1]).is_ok());
            assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
        }

        assert!(solver.add_clause(&[1]).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
        assert_eq!(solver.value(atoms), Ok(Some(true)));

        assert!(solver.add_clause(&[-atoms]).is_ok());
        assert_eq!(solver.solve(), Ok(SolveResult::Unsatisfiable));
    }
}
