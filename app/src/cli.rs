use std::path::PathBuf;

use clap::{Parser, Subcommand};
use teams_core::IdStrategy;

#[derive(Parser, Debug)]
#[command(name = "teams", version, about = "Browse and edit a football teams catalog")]
pub struct Cli {
    /// Team collection URL, e.g. http://127.0.0.1:3000/teams
    #[arg(long, env = "TEAMS_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Config file to use instead of the per-user one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging, and print error causes
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every team
    List,

    /// Show one team
    Show {
        /// Team id
        #[arg(value_parser = non_blank)]
        id: String,
    },

    /// Add a team; its id is picked from the current list
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// URL of the team's logo image
        #[arg(long)]
        logo: String,
    },

    /// Replace a team's description
    Edit {
        /// Team id
        #[arg(value_parser = non_blank)]
        id: String,

        #[arg(short, long)]
        description: String,
    },

    /// Delete a team
    Delete {
        /// Team id
        #[arg(value_parser = non_blank)]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or change the stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the stored settings and where they live
    Show,

    /// Store the team collection URL
    SetUrl { url: String },

    /// Store how new team ids are picked (sequential or uuid)
    SetIdStrategy {
        #[arg(value_parser = parse_id_strategy)]
        strategy: IdStrategy,
    },

    /// Store a request timeout in seconds; 0 removes it
    SetTimeout { seconds: u64 },
}

fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("team id must not be empty".to_string());
    }
    Ok(value.to_string())
}

fn parse_id_strategy(value: &str) -> Result<IdStrategy, String> {
    match value {
        "sequential" => Ok(IdStrategy::Sequential),
        "uuid" => Ok(IdStrategy::Uuid),
        other => Err(format!("unknown id strategy '{other}', expected sequential or uuid")),
    }
}
