use clap::Parser;
use std::path::PathBuf;

/// Conway's Game of Life, sized to the terminal. Ctrl-C ends the run.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Worker threads for computing generations [default: number of CPUs]
    #[arg(short, long)]
    pub threads: Option<u16>,
    /// Seed for the initial random fill
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn threads(&self) -> usize {
        self.threads
            .map(usize::from)
            .filter(|t| *t > 0)
            .unwrap_or_else(num_cpus::get)
    }
}
