use std::fs::File;
use std::sync::{mpsc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::render::term::{self, TermRenderer};
use crate::sim::{Driver, Simulation, Summary};

mod args;
mod bgrid;
mod gol;
mod input;
mod render;
mod sim;

fn mk_pool(threads: usize) -> Result<rayon::ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?)
}

fn init_logging(args: &Args) -> Result<()> {
    // stdout belongs to the game, so logs only go to a file when asked for.
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn play(args: &Args) -> Result<Summary> {
    let (width, height) = term::board_size()?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sim = Simulation::random(width, height, &mut rng);
    let pool = mk_pool(args.threads()).context("failed to create thread pool")?;

    let _restore = scopeguard::guard((), |_| term::restore());
    term::enter()?;

    let (tx, rx) = mpsc::channel();
    input::on_signal(tx.clone())?;
    let _listener = input::listen(tx);
    pool.install(move || Driver::new(sim, TermRenderer::stdout()).run(&rx))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    tracing::debug!(?args, "starting");
    let summary = play(&args)?;
    println!("{}", summary);
    Ok(())
}
