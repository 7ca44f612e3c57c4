use clap::Parser;
use clips::cli::commands::Cli;
use clips::cli::handlers;
use clips::io::config_io;
use clips::logging;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand → launch TUI
            logging::init_tui();
            launch_tui(&cli)
        }
        Some(_) => {
            logging::init_cli();
            handlers::dispatch(cli)
        }
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn launch_tui(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;
    let images = handlers::initial_images(cli.seed.as_deref())?;
    tracing::info!(images = images.len(), "starting terminal UI");
    clips::tui::run(config, images)
}
