use clap::Parser;
use std::io;
use std::process::ExitCode;

use yogaflow::cli::Cli;
use yogaflow::menu::{self, TerminalUi};
use yogaflow::render::ConsoleRenderer;
use yogaflow::signals::{self, InterruptState};
use yogaflow::{commands, logging, AppConfig, AppContext, AppError, CONFIG};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = CONFIG.clone().with_database_url(cli.database.as_deref());
    logging::init_tracing(&cfg.log_filter);

    match run(cli, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli, cfg: &AppConfig) -> Result<(), AppError> {
    let interrupts = InterruptState::new();
    signals::install_handler(interrupts.clone())?;
    let ctx = AppContext::from_config(cfg)?.with_pacing(cli.pacing())
                                           .with_interrupts(interrupts);
    match cli.command {
        None => menu::run_main_menu(&ctx, &mut TerminalUi::default()),
        Some(command) => {
            let mut stdout = io::stdout().lock();
            commands::execute(&ctx, command, &mut stdout, &mut ConsoleRenderer::default())
        }
    }
}
