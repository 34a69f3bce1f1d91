//! `gliderlog` - CLI for the glider logbook
//!
//! This binary records, edits, lists and totals flights in the logbook
//! database.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use gliderlog::cli::output::{render_flight, render_results, render_totals};
use gliderlog::cli::{
    AddCommand, Cli, Command, ConfigCommand, DeleteCommand, ListCommand, ShowCommand,
    UpdateCommand,
};
use gliderlog::{init_logging, Config, FilterCategory, FlightDraft, Logbook};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let Cli {
        config: config_path,
        database,
        command,
        ..
    } = cli;

    // Configuration commands load (or check) the configuration themselves
    let command = match command {
        Command::Config(config_cmd) => return handle_config(config_path, database, config_cmd),
        command => command,
    };

    let config = load_config(config_path, database)?;
    let mut logbook = Logbook::open(&config)
        .with_context(|| format!("failed to open {}", config.database_path().display()))?;

    match command {
        Command::Add(cmd) => handle_add(&mut logbook, &config, &cmd),
        Command::Update(cmd) => handle_update(&mut logbook, &cmd),
        Command::Delete(cmd) => handle_delete(&mut logbook, &cmd),
        Command::Show(cmd) => handle_show(&mut logbook, &cmd),
        Command::List(cmd) => handle_list(&mut logbook, cmd),
        Command::Totals(cmd) => {
            let totals = logbook.totals()?;
            print!("{}", render_totals(&totals, cmd.json)?);
            Ok(())
        }
        Command::Config(_) => unreachable!("config commands return before the logbook opens"),
    }
}

/// Load configuration and apply the `--database` override.
fn load_config(config_path: Option<PathBuf>, database: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = Config::load_from(config_path).context("failed to load config")?;
    if let Some(path) = database {
        config.storage.database_path = Some(path);
    }
    Ok(config)
}

fn handle_add(logbook: &mut Logbook, config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    let mut draft = config.new_draft();
    cmd.fields.apply_to(&mut draft);

    let id = logbook.create(&draft)?;
    println!("Flight logged successfully (id {id})");
    Ok(())
}

fn handle_update(logbook: &mut Logbook, cmd: &UpdateCommand) -> anyhow::Result<()> {
    let Some(flight) = logbook.select(cmd.id)? else {
        bail!("flight {} not found", cmd.id);
    };

    let mut draft = FlightDraft::from(&flight);
    cmd.fields.apply_to(&mut draft);

    logbook.update_selected(&draft)?;
    println!("Flight {} updated successfully", cmd.id);
    Ok(())
}

fn handle_delete(logbook: &mut Logbook, cmd: &DeleteCommand) -> anyhow::Result<()> {
    if !cmd.yes {
        println!("This will permanently delete flight {}.", cmd.id);
        println!("Use --yes to confirm.");
        return Ok(());
    }

    logbook.delete(cmd.id)?;
    println!("Flight {} deleted", cmd.id);
    Ok(())
}

fn handle_show(logbook: &mut Logbook, cmd: &ShowCommand) -> anyhow::Result<()> {
    let Some(flight) = logbook.select(cmd.id)? else {
        bail!("flight {} not found", cmd.id);
    };
    print!("{}", render_flight(&flight, cmd.json)?);
    Ok(())
}

fn handle_list(logbook: &mut Logbook, cmd: ListCommand) -> anyhow::Result<()> {
    let category = FilterCategory::from_label(&cmd.category);
    let results = logbook.set_filter(cmd.term.unwrap_or_default(), category)?;
    print!("{}", render_results(&results, cmd.format)?);
    Ok(())
}

fn handle_config(
    config_path: Option<PathBuf>,
    database: Option<PathBuf>,
    cmd: ConfigCommand,
) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path, database)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                let or_unset = |value: &Option<String>| {
                    value.clone().unwrap_or_else(|| "(not set)".to_string())
                };
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                println!("  WAL mode:           {}", config.storage.wal_mode);
                println!();
                println!("[Defaults]");
                println!(
                    "  Pilot in command:   {}",
                    or_unset(&config.defaults.pilot_in_command)
                );
                println!(
                    "  Launch method:      {}",
                    or_unset(&config.defaults.launch_method)
                );
                println!(
                    "  Launch site:        {}",
                    or_unset(&config.defaults.launch_site)
                );
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path.clone()))
                .with_context(|| format!("configuration error in {}", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
