use clap::{Parser, ValueEnum};
use longopts::{Config, demo, parser};
use std::io::{self, Write};

macro_rules! err {
    ($e: expr) => {{
        ::longopts::print_error($e);
        ::std::process::exit(1);
    }};
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Print the events the demo flag table yields for ARGS")]
struct Cli {
    #[command(flatten)]
    config: Config,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[arg(long, default_value = "longopts", help = "Program name used in diagnostics")]
    program: String,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn print_events(cli: Cli, out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let flags = demo::flag_set()?;
    let mut err = io::stderr().lock();
    let mut parser = parser::Parser::new(&cli.program, cli.args, &flags, &mut err, &cli.config);

    for event in parser.by_ref() {
        let event = event?;
        match cli.format {
            Format::Text => writeln!(out, "{event:?}")?,
            Format::Json => writeln!(out, "{}", serde_json::to_string(&event)?)?,
        }
    }

    let positionals = parser.into_positionals();
    match cli.format {
        Format::Text => writeln!(out, "positionals: {positionals:?}")?,
        Format::Json => writeln!(
            out,
            "{}",
            serde_json::json!({ "positionals": positionals })
        )?,
    }

    Ok(out.flush()?)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = print_events(cli, &mut io::stdout().lock()) {
        err!(e.as_ref());
    }
}
