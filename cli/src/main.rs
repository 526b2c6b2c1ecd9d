use anyhow::Result;
use clap::Parser;
use pathrank::{run, Args};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&args, stdin.lock(), &mut stdout.lock())
}
