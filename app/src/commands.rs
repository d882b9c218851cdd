//! Wires each subcommand to a screen: one screen action per user action,
//! then render.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use teams_core::TeamsClient;

use crate::api::TeamsApi;
use crate::cli::{Cli, Command, ConfigAction};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::screens::{Alert, ConfirmPrompt, DetailScreen, ListScreen, Route};

pub async fn run(cli: Cli) -> Result<()> {
    let stored = Config::load(cli.config.clone())?;
    let config = stored.clone().with_base_url(cli.base_url);

    match cli.command {
        Command::Config { action } => configure(action, stored, cli.config),
        Command::List => list(&connect(&config)?, &config).await,
        Command::Show { id } => show(&connect(&config)?, &id).await,
        Command::Add {
            name,
            description,
            logo,
        } => add(&connect(&config)?, &config, &name, &description, &logo).await,
        Command::Edit { id, description } => edit(&connect(&config)?, &id, &description).await,
        Command::Delete { id, yes } => delete(&connect(&config)?, &config, &id, yes).await,
    }
}

fn connect(config: &Config) -> Result<TeamsApi> {
    log::debug!("using collection {}", config.base_url);
    Ok(TeamsApi::new(&config.base_url, config.timeout())?)
}

/// Change one stored setting and write the file back. Flags and environment
/// overrides are not persisted.
fn configure(action: ConfigAction, mut config: Config, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => Config::config_file_path()?,
    };

    match action {
        ConfigAction::Show => {
            println!("{} {}", "Config file:".bold(), path.display());
            println!("base_url = {}", config.base_url);
            println!("id_strategy = {}", config.id_strategy.as_str());
            match config.timeout_seconds {
                Some(seconds) => println!("timeout_seconds = {seconds}"),
                None => println!("timeout_seconds = (none)"),
            }
            return Ok(());
        }
        ConfigAction::SetUrl { url } => {
            TeamsClient::new(&url)?;
            config.base_url = url;
        }
        ConfigAction::SetIdStrategy { strategy } => config.id_strategy = strategy,
        ConfigAction::SetTimeout { seconds } => {
            config.timeout_seconds = (seconds > 0).then_some(seconds);
        }
    }

    config.save(Some(path.clone()))?;
    log::info!("wrote {}", path.display());
    println!("{} {}", "Saved".green().bold(), path.display());
    Ok(())
}

async fn list(api: &TeamsApi, config: &Config) -> Result<()> {
    let mut screen = ListScreen::new(config.id_strategy);
    screen.refresh(api).await;
    report(screen.take_alert())?;
    print!("{}", screen.render());
    Ok(())
}

async fn show(api: &TeamsApi, id: &str) -> Result<()> {
    let mut screen = DetailScreen::new(id);
    screen.load(api).await;
    report(screen.take_alert())?;
    println!("{}", screen.render().trim_end());
    Ok(())
}

async fn add(api: &TeamsApi, config: &Config, name: &str, description: &str, logo: &str) -> Result<()> {
    let mut screen = ListScreen::new(config.id_strategy);
    // The next id comes from the current listing, so it has to load first.
    screen.refresh(api).await;
    report(screen.take_alert())?;

    screen.open_form();
    if let Some(form) = screen.form_mut() {
        form.name = name.to_string();
        form.description = description.to_string();
        form.logo = logo.to_string();
    }

    let id = screen.submit_form(api).await;
    report(screen.take_alert())?;
    if let Some(id) = id {
        println!("{} team {id}", "Added".green().bold());
    }
    print!("{}", screen.render());
    Ok(())
}

async fn edit(api: &TeamsApi, id: &str, description: &str) -> Result<()> {
    let mut screen = DetailScreen::new(id);
    screen.load(api).await;
    report(screen.take_alert())?;
    if screen.team().is_none() {
        return Err(AppError::Screen(screen.render()));
    }

    screen.start_editing();
    screen.set_description(description);
    screen.save(api).await;
    report(screen.take_alert())?;
    println!("{}", screen.render().trim_end());
    Ok(())
}

async fn delete(api: &TeamsApi, config: &Config, id: &str, yes: bool) -> Result<()> {
    let mut screen = DetailScreen::new(id);
    screen.load(api).await;
    report(screen.take_alert())?;

    let Some(prompt) = screen.request_delete() else {
        return Err(AppError::Screen(screen.render()));
    };
    if !yes && !confirm(&prompt)? {
        screen.cancel_delete();
        println!("Cancelled");
        return Ok(());
    }

    let route = screen.confirm_delete(api).await;
    report(screen.take_alert())?;
    if route == Some(Route::List) {
        list(api, config).await?;
    }
    Ok(())
}

/// Print an informational alert, or turn an error alert into the command's
/// failure.
fn report(alert: Option<Alert>) -> Result<()> {
    match alert {
        Some(alert) if alert.is_error() => Err(AppError::Screen(alert.message)),
        Some(alert) => {
            println!("{} {}", format!("{}:", alert.title).green().bold(), alert.message);
            Ok(())
        }
        None => Ok(()),
    }
}

fn confirm(prompt: &ConfirmPrompt) -> Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{} {} [y/N] ", format!("{}:", prompt.title).yellow().bold(), prompt.message)?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
