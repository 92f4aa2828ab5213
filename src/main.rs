use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use focusdo::cli::args::{Cli, Commands};
use focusdo::cli::commands;
use focusdo::config::Config;
use focusdo::error::FocusdoError;
use focusdo::storage::{Database, TaskStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FocusdoError> {
    let cli = Cli::parse();

    // Completions don't need the database
    if let Commands::Completions { shell } = &cli.command {
        return commands::completions(shell);
    }

    let config = Config::load()?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);
    let store = TaskStore::new(Database::open()?);

    let output = match cli.command {
        Commands::Add(args) => commands::add(&store, args, format)?,
        Commands::List(args) => commands::list(&store, args, format)?,
        Commands::Day { all } => commands::day(&store, all, format)?,
        Commands::Show { id } => commands::show(&store, id, format)?,
        Commands::Done { id } => commands::done(&store, id, format)?,
        Commands::Delete { id } => commands::delete(&store, id, format)?,
        Commands::Focus => {
            focusdo::tui::run(&store, config.focus.target_minutes, true)?;
            String::new()
        }
        Commands::Tui => {
            focusdo::tui::run(&store, config.focus.target_minutes, false)?;
            String::new()
        }
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
