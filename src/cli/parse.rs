use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("ipasir2_cli")
        .about("Determines whether a formula is satisfiable or unsatisfiable, through an IPASIR2 handle")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to read, or standard input if absent."))

        .arg(Arg::new("set")
            .short('s')
            .long("set")
            .action(ArgAction::Append)
            .num_args(1)
            .value_parser(parse_setting)
            .help("Set an option of the catalog, as name=value.")
            .long_help("Set an option of the catalog, as name=value.

Options are set in the order given, before the formula is read.
Synthetic options, such as ipasir.limits.conflicts, set a limit on each solve.
See --list-options for the options available."))

        .arg(Arg::new("assume")
            .short('a')
            .long("assume")
            .action(ArgAction::Append)
            .num_args(1)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i32))
            .help("Assume a literal for the solve."))

        .arg(Arg::new("list_options")
            .long("list-options")
            .action(ArgAction::SetTrue)
            .help("List the catalog of options and exit."))

        .arg(Arg::new("model")
            .short('m')
            .long("model")
            .action(ArgAction::SetTrue)
            .help("Display the satisfying valuation, if one is found."))

        .arg(Arg::new("failed")
            .short('f')
            .long("failed")
            .action(ArgAction::SetTrue)
            .help("Display the failed assumptions, if the formula is unsatisfiable under the assumptions."))
}

/// Parses a `name=value` setting.
fn parse_setting(setting: &str) -> Result<(String, i64), String> {
    let Some((name, value)) = setting.split_once('=') else {
        return Err(format!("expected name=value, found {setting}"));
    };
    match value.parse::<i64>() {
        Ok(value) => Ok((name.to_string(), value)),
        Err(e) => Err(format!("{value} is not a value: {e}")),
    }
}
