#![forbid(unsafe_code)]

//! chalk demo binary entry point.

mod cli;
mod scenes;

use chalk::Sink;
use tracing_subscriber::EnvFilter;

use crate::cli::{Opts, Scenes};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(opts: &Opts) -> chalk::Result<()> {
    let config = chalk::load_config()?;

    let mut sink = Sink::stdout();
    if opts.scenes != Scenes::Canvas {
        let width = opts.width.unwrap_or(config.console_width);
        sink = scenes::console(sink, &config, width)?;
    }
    if opts.scenes != Scenes::Console {
        scenes::canvas(&mut sink, &config)?;
    }
    sink.flush()?;
    Ok(())
}

fn main() {
    init_tracing();
    let opts = Opts::parse();
    if let Err(e) = run(&opts) {
        eprintln!("chalk-demo: {e}");
        std::process::exit(1);
    }
}
