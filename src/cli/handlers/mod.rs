use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::model::AppConfig;
use crate::ops::paginate;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a subcommand. The TUI (no subcommand) is launched from main.
pub fn dispatch(command: Commands, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Pages(args) => cmd_pages(args, config),
        Commands::ConfigPath => cmd_config_path(),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_pages(args: PagesArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let per_page = match args.per_page {
        Some(n) => usize::try_from(n)?,
        None => config.list.items_per_page,
    };
    // Pages past either end print an empty slice
    let view = paginate::compute_page(args.total_items, per_page, args.page);
    if args.json {
        let out = PagesJson::new(args.total_items, per_page, &view);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", format_pages_text(args.total_items, &view));
    }
    Ok(())
}

fn cmd_config_path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", config_io::config_path().display());
    Ok(())
}
