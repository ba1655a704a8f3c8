//! roomcal CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use roomcal_cli::cli::{Cli, Command, ConfigAction};
use roomcal_cli::commands::{self, layout::Selection};
use roomcal_cli::config::CalendarConfig;
use roomcal_cli::error::CliResult;
use roomcal_core::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = match cli.config {
        Some(ref path) => CalendarConfig::load_from(path)?,
        None => CalendarConfig::load()?,
    };

    init_tracing(config.tracing_config(cli.debug))?;

    match cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
        Some(Command::Rooms) => commands::rooms::list(&config, cli.json),
        Some(Command::Details { ref payload, index }) => {
            let zone = config.zone()?;
            let payload = commands::read_payload(Some(payload.as_path()), &zone)?;
            commands::details::show(&payload, index, &config.columns, &zone, cli.json)
        }
        None => {
            let ctx = config.to_layout_context()?;
            let payload = commands::read_payload(cli.payload.as_deref(), &ctx.zone)?;
            let selection = Selection::resolve(cli.year, cli.month, cli.day, &ctx);

            let mut options = config.format_options();
            if cli.max_name_length.is_some() {
                options.max_name_length = cli.max_name_length;
            }
            options.show_empty_days = !cli.hide_empty_days;

            commands::layout::show(
                &payload.events,
                selection,
                &ctx,
                options,
                cli.output_format(),
            )
        }
    }
}
