//! The demo program: a fixed flag table, one output line per flag seen, and a
//! summary of the verbosity state and leftover arguments.


use crate::{
    Config, Error,
    flags::{FlagSet, FlagSpec},
    parser::{Event, Parser},
};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateVar {
    Verbosity,
}

pub const VERBOSE: i32 = 42;
pub const QUIET: i32 = 10;

pub fn flag_set() -> Result<FlagSet<StateVar>, Error> {
    Ok(FlagSet::new(vec![
        FlagSpec::set("verbose", StateVar::Verbosity, VERBOSE),
        FlagSpec::set("quiet", StateVar::Verbosity, QUIET),
        FlagSpec::alias('a', "add", false),
        FlagSpec::alias('b', "append", false),
        FlagSpec::alias('d', "delete", true),
        FlagSpec::alias('c', "create", true),
        FlagSpec::alias('f', "file", true),
    ])?)
}

/// Prints the line for a dispatched flag.
pub fn dispatch(id: char, value: Option<&str>, out: &mut dyn Write) -> Result<(), Error> {
    match (id, value) {
        ('a' | 'b', _) => writeln!(out, "option -{id}")?,
        ('c' | 'd' | 'f', Some(value)) => writeln!(out, "option -{id} with value {value}")?,
        _ => return Err(Error::Unhandled(id)),
    }
    Ok(())
}

pub fn report(verbosity: i32, positionals: &[String], out: &mut dyn Write) -> Result<(), Error> {
    match verbosity {
        VERBOSE => writeln!(out, "--verbose flag is set")?,
        QUIET => writeln!(out, "--quiet flag is set")?,
        _ => {}
    }

    if !positionals.is_empty() {
        write!(out, "Non-option ARGV-elements: ")?;
        for arg in positionals {
            write!(out, "{arg} ")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Runs the demo over `args` (without the program name). Diagnostics and
/// traces go to `err`, everything else to `out`.
pub fn run(
    program: &str,
    args: impl IntoIterator<Item = String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    config: &Config,
) -> Result<(), Error> {
    let flags = flag_set()?;
    let mut verbosity = 0;
    let mut parser = Parser::new(program, args, &flags, err, config);

    for event in parser.by_ref() {
        match event? {
            Event::BoolFlagSet {
                variable: StateVar::Verbosity,
                value,
            } => verbosity = value,
            Event::Flag { id, value } => dispatch(id, value.as_deref(), out)?,
            Event::Unrecognized { .. } => {}
        }
    }

    report(verbosity, &parser.into_positionals(), out)
}
