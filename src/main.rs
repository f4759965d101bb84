use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::cli::handlers;
use tasklist::io::config_io;
use tasklist::model::AppConfig;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let log_guard = tasklist::logging::init(&config.log);

    let result = match cli.command {
        // No subcommand → launch TUI
        None => tasklist::tui::run(&config),
        Some(cmd) => handlers::dispatch(cmd, &config),
    };
    if let Err(e) = result {
        drop(log_guard);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = config_io::read_config(cli.config.as_deref())?;
    if let Some(n) = cli.page_size {
        config.list.items_per_page = usize::try_from(n)?;
    }
    Ok(config)
}
