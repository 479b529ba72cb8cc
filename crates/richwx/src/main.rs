use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use richwx::cli::Cli;
use richwx_render::{escape, Styler};
use simple_logger::SimpleLogger;

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = SimpleLogger::new()
        .with_level(level(cli.verbose))
        .with_colors(true)
        .with_local_timestamps()
        .init()
    {
        eprintln!("failed to build logger instance: {err}");
    }

    match richwx::run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("command failed: {err:?}");
            let styler = Styler::new(cli.output);
            let message = format!("=> [red bold]Error:[/] {}", escape(&format!("{err:#}")));
            eprintln!("{}", styler.apply(&message));
            ExitCode::FAILURE
        }
    }
}
