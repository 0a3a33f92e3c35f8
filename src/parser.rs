
use crate::{
    Config,
    flags::{Action, FlagSet, FlagSpec},
    token::{self, Token},
    trace::trace,
};
use serde::Serialize;
use std::{
    fmt::Debug,
    io::{self, Write},
};
use thiserror::Error;

/// A malformed or unknown flag. Written to the diagnostic stream as
/// `<program>: <message>`.
#[derive(Error, Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("unrecognized option '{token}'")]
    UnrecognizedOption { token: String },
    #[error("invalid option -- '{flag}'")]
    InvalidOption { flag: char },
    #[error("option requires an argument -- '{flag}'")]
    MissingArgument { flag: char },
    #[error("option '--{name}' requires an argument")]
    MissingLongArgument { name: String },
    #[error("option '--{name}' doesn't allow an argument")]
    ArgumentNotAllowed { name: String },
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event<V> {
    /// A flag carrying a state target matched, the caller assigns `value`.
    BoolFlagSet { variable: V, value: i32 },
    /// `value` is present iff the flag takes an argument.
    Flag { id: char, value: Option<String> },
    /// The diagnostic has already been written when this is yielded.
    Unrecognized { diagnostic: Diagnostic },
}

/// Scans an argument list one flag at a time, getopt_long style.
///
/// Iteration ends at the first positional argument, after a `--`, or when the
/// arguments run out. Whatever was not consumed is available from
/// [`Parser::remaining`] and [`Parser::into_positionals`]. An error writing
/// the diagnostic stream is yielded once and ends the iteration.
pub struct Parser<'a, V> {
    program: &'a str,
    args: Vec<String>,
    flags: &'a FlagSet<V>,
    diagnostics: &'a mut dyn Write,
    config: &'a Config,
    optind: usize,
    optarg: Option<String>,
    long_index: Option<usize>,
    cluster: Option<String>,
    done: bool,
}

impl<'a, V: Copy + Debug> Parser<'a, V> {
    pub fn new(
        program: &'a str,
        args: impl IntoIterator<Item = String>,
        flags: &'a FlagSet<V>,
        diagnostics: &'a mut dyn Write,
        config: &'a Config,
    ) -> Self {
        Self {
            program,
            args: args.into_iter().collect(),
            flags,
            diagnostics,
            config,
            optind: 0,
            optarg: None,
            long_index: None,
            cluster: None,
            done: false,
        }
    }

    /// Index of the next argument to be scanned.
    pub fn optind(&self) -> usize {
        self.optind
    }

    /// Argument of the last matched flag.
    pub fn optarg(&self) -> Option<&str> {
        self.optarg.as_deref()
    }

    /// Index into the flag set of the last flag matched by its long name.
    pub fn long_index(&self) -> Option<usize> {
        self.long_index
    }

    pub fn remaining(&self) -> &[String] {
        self.args.get(self.optind..).unwrap_or_default()
    }

    pub fn into_positionals(mut self) -> Vec<String> {
        let at = self.optind.min(self.args.len());
        self.args.split_off(at)
    }

    fn step(&mut self) -> io::Result<Option<Event<V>>> {
        if let Some(cluster) = self.cluster.take() {
            return self.short(cluster);
        }

        let Some(arg) = self.args.get(self.optind) else {
            trace!(self.config, self.diagnostics, self.program, "end of arguments");
            return Ok(None);
        };

        match token::classify(arg) {
            Token::Terminator => {
                self.optind += 1;
                trace!(
                    self.config,
                    self.diagnostics,
                    self.program,
                    "terminator, optind={}",
                    self.optind
                );
                Ok(None)
            }
            Token::Positional => {
                trace!(
                    self.config,
                    self.diagnostics,
                    self.program,
                    "stop at positional {arg:?}, optind={}",
                    self.optind
                );
                Ok(None)
            }
            Token::Long { name, value } => {
                let (arg, name, value) = (arg.clone(), name.to_owned(), value.map(str::to_owned));
                self.optind += 1;
                self.long(arg, &name, value).map(Some)
            }
            Token::Short(cluster) => {
                let cluster = cluster.to_owned();
                self.optind += 1;
                self.short(cluster)
            }
        }
    }

    fn long(&mut self, arg: String, name: &str, value: Option<String>) -> io::Result<Event<V>> {
        let flags = self.flags;
        let Some((index, spec)) = flags.find_long(name) else {
            return self.reject(Diagnostic::UnrecognizedOption { token: arg });
        };
        self.long_index = Some(index);

        let value = match (spec.takes_argument, value) {
            (false, None) => None,
            (false, Some(_)) => {
                return self.reject(Diagnostic::ArgumentNotAllowed {
                    name: name.to_owned(),
                });
            }
            (true, Some(value)) => Some(value),
            (true, None) => match self.take_next() {
                Some(value) => Some(value),
                None => {
                    return self.reject(Diagnostic::MissingLongArgument {
                        name: name.to_owned(),
                    });
                }
            },
        };

        self.matched(spec, value)
    }

    fn short(&mut self, cluster: String) -> io::Result<Option<Event<V>>> {
        let flags = self.flags;
        let mut chars = cluster.chars();
        let Some(flag) = chars.next() else {
            return self.step();
        };
        let rest = chars.as_str();

        let Some(spec) = flags.find_short(flag) else {
            self.keep_cluster(rest);
            return self.reject(Diagnostic::InvalidOption { flag }).map(Some);
        };
        self.long_index = None;

        if !spec.takes_argument {
            self.keep_cluster(rest);
            return self.matched(spec, None).map(Some);
        }

        // The rest of the cluster, or else the whole next argument
        let value = if rest.is_empty() {
            match self.take_next() {
                Some(value) => value,
                None => return self.reject(Diagnostic::MissingArgument { flag }).map(Some),
            }
        } else {
            rest.to_owned()
        };

        self.matched(spec, Some(value)).map(Some)
    }

    fn keep_cluster(&mut self, rest: &str) {
        if !rest.is_empty() {
            self.cluster = Some(rest.to_owned());
        }
    }

    fn take_next(&mut self) -> Option<String> {
        let value = self.args.get(self.optind).cloned()?;
        self.optind += 1;
        Some(value)
    }

    fn matched(&mut self, spec: &FlagSpec<V>, argument: Option<String>) -> io::Result<Event<V>> {
        self.optarg = argument.clone();

        let event = match spec.action {
            Action::Set(variable, value) => Event::BoolFlagSet { variable, value },
            Action::Dispatch(id) => Event::Flag {
                id,
                value: argument,
            },
        };

        trace!(
            self.config,
            self.diagnostics,
            self.program,
            "{event:?}, optind={}",
            self.optind
        );
        Ok(event)
    }

    fn reject(&mut self, diagnostic: Diagnostic) -> io::Result<Event<V>> {
        writeln!(self.diagnostics, "{}: {diagnostic}", self.program)?;
        self.optarg = None;
        Ok(Event::Unrecognized { diagnostic })
    }
}

impl<V: Copy + Debug> Iterator for Parser<'_, V> {
    type Item = io::Result<Event<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.step().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}
