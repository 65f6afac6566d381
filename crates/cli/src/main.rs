use std::process::ExitCode;

use clap::Parser;
use gitify_cli::cli_args::Args;
use gitify_cli::menu::{run_menu, Palette};
use gitify_core::config;
use gitify_core::dispatch::Dispatcher;
use gitify_core::error::Result;
use gitify_core::execution::GitCommand;
use log::debug;

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let settings = args.apply_to(config::load_settings(&config_path)?);
    debug!("Settings: {:?}", settings);

    let palette = Palette::from_theme(&settings.theme)?;
    let mut dispatcher = Dispatcher::new(GitCommand::from_settings(&settings))
        .with_commit_message_limit(settings.commit_message_limit);

    run_menu(&mut dispatcher, palette)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error starting application: {e}");
            ExitCode::FAILURE
        }
    }
}
