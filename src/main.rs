use cidr_calc::cli::{run, Cli};
use cidr_calc::config::init_logging;
use clap::Parser;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = cli.config()?;
    init_logging(&config)?;
    if !config.color {
        colored::control::set_override(false);
    }
    log::info!("#Start main()");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, &config, &mut out)?;

    Ok(())
}
