use anyhow::Result;
use lifegrid::{Controller, EventSink, GridEngine};
use std::{fs::File, io, sync::Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod console;
mod options;

use console::{ConsoleCommand, ConsoleDisplay};

fn init_logging(args: &options::Args) -> Result<()> {
    let default = if args.verbose() {
        "info,lifegrid=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    match args.log_file() {
        Some(path) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .init(),
        // stderr would draw over the raw-mode screen
        None if args.console() => {}
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
    }
    Ok(())
}

fn run_console(engine: GridEngine, threads: bool) -> Result<()> {
    let display = ConsoleDisplay::new(engine.width(), engine.height())?;
    let mut controller = Controller::new(engine, display).with_parallel(threads);
    controller.start()?;

    loop {
        match controller.display_mut().poll_events()? {
            Some(ConsoleCommand::Exit) => break,
            Some(ConsoleCommand::Redraw) => controller.refresh()?,
            Some(ConsoleCommand::Forward(event)) => controller.handle(event)?,
            None => {}
        }
    }
    info!(generation = controller.engine().generation(), "console closed");
    Ok(())
}

fn run_headless(mut engine: GridEngine, generations: u64, threads: bool) {
    for _ in 0..generations {
        if threads {
            engine.advance_parallel();
        } else {
            engine.advance();
        }
    }

    let snapshot = engine.snapshot();
    println!(
        "generation: {} alive: {}",
        snapshot.generation(),
        snapshot.alive_count()
    );
    print!("{}", snapshot);
}

fn main() -> Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    init_logging(&args)?;

    let (width, height) = args.grid_size()?;
    let engine = GridEngine::new(width, height)?;
    info!(width, height, threads = args.threads(), "starting");

    if args.console() {
        run_console(engine, args.threads())
    } else {
        run_headless(engine, args.generations()?, args.threads());
        Ok(())
    }
}
