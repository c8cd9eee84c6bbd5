use std::io::{self, Write};

use bit_twiddle::demo;
use clap::Parser;
use log::*;

/// Set, clear and toggle bits of 0b10001, then run the ternary demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Debug mode
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = demo::run(&mut out).map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    info!("finished with {:?}", report);
    Ok(())
}
