mod app;
mod args;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod options;
mod util;
mod view;
use crate::app::App;
use crate::args::{Mode, USAGE};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Mode::from_parser(lexopt::Parser::from_env()) {
        Ok(Mode::Run(args)) => exit(run(&args)),
        Ok(Mode::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Mode::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("snakefeed: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &args::Arguments) -> anyhow::Result<()> {
    let cfg = args.load_config()?;
    logging::init(&cfg.logging)?;
    let app = App::new(&cfg, args.record.as_deref())?;
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    r
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "exiting on error");
            eprintln!("snakefeed: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
}
