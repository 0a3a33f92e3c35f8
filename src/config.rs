use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    /// Write each scanner step to stderr
    #[arg(short, long, global = true)]
    pub trace: bool,
}
