use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use ipasir2_adapter::{
    dimacs::DimacsInfo,
    ipasir2::{SolveResult, Solver, State},
    types::err::{ErrorCode, ParseError},
};

mod parse;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let mut solver: Solver = Solver::default();
    println!("c {}", solver.signature());

    if matches.get_flag("list_options") {
        list_options(&solver);
        std::process::exit(0);
    }

    if let Some(settings) = matches.get_many::<(String, i64)>("set") {
        for (name, value) in settings {
            match solver.set_option(name, *value, 0) {
                Ok(()) => println!("c {name} set to {value}"),
                Err(e) => {
                    println!("c Failed to set {name} to {value}: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    let parse_result = match matches.get_one::<PathBuf>("path") {
        Some(path) => {
            println!("c Reading DIMACS file from {path:?}");
            load_dimacs(&mut solver, path)
        }
        None => {
            println!("c Reading DIMACS from standard input");
            solver.read_dimacs(std::io::stdin().lock())
        }
    };

    match parse_result {
        Ok(info) => {
            if let Some((atoms, clauses)) = info.expected {
                if clauses != info.clauses {
                    println!("c Expected {clauses} clauses over {atoms} atoms, read {}", info.clauses);
                }
            }
        }
        Err(e) => {
            println!("c Error reading DIMACS: {e}");
            std::process::exit(1);
        }
    }

    let assumptions = matches
        .get_many::<i32>("assume")
        .map(|literals| literals.copied().collect::<Vec<_>>())
        .unwrap_or_default();
    for &assumption in &assumptions {
        if let Err(e) = solver.assume(assumption) {
            println!("c Failed to assume {assumption}: {e}");
            std::process::exit(1);
        }
    }

    let result = match solve(&mut solver) {
        Ok(result) => result,
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(1);
        }
    };

    println!("s {result}");

    match result {
        SolveResult::Satisfiable if matches.get_flag("model") => show_model(&solver),

        SolveResult::Unsatisfiable if matches.get_flag("failed") => {
            let failed = assumptions
                .iter()
                .filter(|&&assumption| solver.failed(assumption) == Ok(true))
                .map(|assumption| assumption.to_string())
                .collect::<Vec<_>>();
            println!("f {} 0", failed.join(" "));
        }

        _ => {}
    }

    std::process::exit(result.code());
}

fn load_dimacs(solver: &mut Solver, path: &Path) -> Result<DimacsInfo, ParseError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(ParseError::Io(e.kind())),
    };

    match path.extension() {
        Some(extension) if extension == "xz" => read_xz(solver, file),
        _ => read(solver, BufReader::new(file)),
    }
}

fn read(solver: &mut Solver, reader: impl BufRead) -> Result<DimacsInfo, ParseError> {
    solver.read_dimacs(reader)
}

#[cfg(feature = "xz")]
fn read_xz(solver: &mut Solver, file: File) -> Result<DimacsInfo, ParseError> {
    read(solver, BufReader::new(xz2::read::XzDecoder::new(file)))
}

#[cfg(not(feature = "xz"))]
fn read_xz(_solver: &mut Solver, _file: File) -> Result<DimacsInfo, ParseError> {
    println!("c Reading xz compressed files requires the xz feature");
    std::process::exit(1);
}

fn list_options(solver: &Solver) {
    match solver.options() {
        Ok(catalog) => {
            for option in &catalog {
                println!(
                    "c {:<26} [{}, {}] until {}{}",
                    option.name,
                    option.min,
                    option.max,
                    option.max_state,
                    if option.tunable { ", tunable" } else { "" }
                );
            }
        }
        Err(e) => println!("c Failed to build the catalog: {e}"),
    }
}

/// Solves, though a formula without clauses or assumptions is satisfiable without reaching the engine.
///
/// Such a formula leaves the handle in [State::Config], where a solve is refused.
fn solve(solver: &mut Solver) -> Result<SolveResult, ErrorCode> {
    match solver.state() {
        State::Config => {
            println!("c No clauses or assumptions were given");
            Ok(SolveResult::Satisfiable)
        }
        _ => solver.solve(),
    }
}

/// The literals of the satisfying valuation, empty if the handle holds no valuation.
fn valuation(solver: &Solver) -> Vec<i32> {
    let Ok(size) = solver.assignment_size() else {
        return Vec::default();
    };
    (0..size)
        .filter_map(|index| solver.assignment(index).ok())
        .filter(|&literal| literal != 0)
        .collect()
}

fn show_model(solver: &Solver) {
    let valuation = valuation(solver)
        .iter()
        .map(|literal| literal.to_string())
        .collect::<Vec<_>>();
    match valuation.is_empty() {
        true => println!("v 0"),
        false => println!("v {} 0", valuation.join(" ")),
    }
}
