macro_rules! trace {
    ($config: expr, $sink: expr, $program: expr, $($arg: tt)+) => {
        if $config.trace {
            write!($sink, "{}: trace: ", $program)?;
            writeln!($sink, $($arg)+)?;
        }
    };
}

pub(crate) use trace;
