//! Reading DIMACS formulas into a handle.

use std::io::BufRead;

use crate::{
    engine::Engine,
    ipasir2::Solver,
    misc::log::targets,
    types::err::ParseError,
};

/// Details of a formula read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DimacsInfo {
    /// The atom and clause counts of the problem specification, if one was given.
    pub expected: Option<(usize, usize)>,

    /// Clauses added.
    pub clauses: usize,
}

impl<E: Engine> Solver<E> {
    /// Reads a DIMACS formula, adding each clause to the handle as it is read.
    ///
    /// The problem specification is optional, and a line beginning `%` ends the formula.
    ///
    /// ```rust
    /// # use ipasir2_adapter::ipasir2::{SolveResult, Solver};
    /// let mut solver: Solver = Solver::default();
    ///
    /// let dimacs = b"
    /// c a comment
    /// p cnf 3 4
    ///  1  2    0
    /// -1  2    0
    /// -2  3    0
    ///    -3 -1 0
    /// ";
    ///
    /// let info = solver.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected, Some((3, 4)));
    /// assert_eq!(info.clauses, 4);
    /// assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<DimacsInfo, ParseError> {
        let mut info = DimacsInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;
        let mut clause_open = false;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'line_loop,
                Ok(_) => line_counter += 1,
                Err(e) => return Err(ParseError::Io(e.kind())),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'line_loop,

                Some('%') => break 'line_loop,

                Some('p') => {
                    let mut details = buffer.split_whitespace().skip(2);
                    let mut count = || -> Result<usize, ParseError> {
                        details
                            .next()
                            .and_then(|string| string.parse().ok())
                            .ok_or(ParseError::ProblemSpecification)
                    };
                    let atoms = count()?;
                    let clauses = count()?;
                    log::info!(target: targets::LIFECYCLE, "Expecting {atoms} atoms and {clauses} clauses");
                    info.expected = Some((atoms, clauses));
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        let Ok(literal) = item.parse::<i32>() else {
                            return Err(ParseError::Line(line_counter));
                        };
                        self.add(literal)?;
                        clause_open = literal != 0;
                        if literal == 0 {
                            info.clauses += 1;
                        }
                    }
                }
            }
        }

        if clause_open {
            return Err(ParseError::UnterminatedClause);
        }

        log::info!(target: targets::LIFECYCLE, "Read {} clauses over {line_counter} lines", info.clauses);
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ipasir2::{SolveResult, Solver, State},
        types::err::{ErrorCode, ParseError},
    };

    #[test]
    fn malformed_token() {
        let mut solver: Solver = Solver::default();
        let result = solver.read_dimacs(b"p cnf 2 1\n1 x 0\n".as_slice());
        assert_eq!(result, Err(ParseError::Line(2)));
    }

    #[test]
    fn bad_problem_specification() {
        let mut solver: Solver = Solver::default();
        let result = solver.read_dimacs(b"p cnf two 1\n1 0\n".as_slice());
        assert_eq!(result, Err(ParseError::ProblemSpecification));
        assert_eq!(solver.state(), State::Config);
    }

    #[test]
    fn unterminated() {
        let mut solver: Solver = Solver::default();
        let result = solver.read_dimacs(b"1 2 0\n-1".as_slice());
        assert_eq!(result, Err(ParseError::UnterminatedClause));
    }

    #[test]
    fn rejected_literal() {
        let mut solver: Solver = Solver::default();
        let result = solver.read_dimacs(b"-2147483648 0\n".as_slice());
        assert_eq!(result, Err(ParseError::Rejected(ErrorCode::InvalidArgument)));
    }

    #[test]
    fn percent_ends_formula() {
        let mut solver: Solver = Solver::default();
        let info = solver.read_dimacs(b"1 0\n%\n-1 0\n".as_slice()).unwrap();
        assert_eq!(info.clauses, 1);
        assert_eq!(solver.solve(), Ok(SolveResult::Satisfiable));
    }
}
