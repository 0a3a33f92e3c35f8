use longopts::Config;
use std::{
    env,
    io::{self, Write},
};

fn main() {
    let mut args = env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let program = args.next().unwrap_or_else(|| String::from("longopts"));

    let result = {
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        longopts::run(&program, args, &mut out, &mut err, &Config::default())
            .and_then(|()| out.flush().map_err(longopts::Error::from))
    };

    if let Err(ref e) = result {
        longopts::print_error(e);
        std::process::exit(1);
    }
}
