mod config;
pub mod demo;
pub mod flags;
pub mod parser;
pub mod token;
mod trace;

pub use config::Config;
pub use demo::run;

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid flag table")]
    Flags(#[from] flags::Error),
    #[error("Could not write output")]
    Io(#[from] io::Error),
    #[error("Flag -{0} has no handler")]
    Unhandled(char),
}

pub fn print_error(mut error: &dyn std::error::Error) {
    eprintln!("\x1b[93m{error}\x1b[0m");
    while let Some(source) = error.source() {
        eprintln!("Caused by: \x1b[35m{source}\x1b[0m");
        error = source;
    }
}
