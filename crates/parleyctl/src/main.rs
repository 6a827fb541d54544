//! Parley Control - CLI client for the Parley daemon
//!
//! Talks to parleyd over its HTTP/JSON surface.

mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "parleyctl")]
#[command(about = "Parley - conversational backend client", long_about = None)]
#[command(version)]
struct Cli {
    /// Daemon base URL (also $PARLEYD_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show daemon health
    Health,

    /// Send a chat message and print the reply
    Chat {
        /// Message text
        message: Vec<String>,
    },

    /// Play a round of rock-paper-scissors
    Rps {
        /// Your move: rock, paper or scissors
        choice: String,
    },

    /// Run the lie detector over a transcript file
    Detect {
        /// JSON file with [{"speaker": ..., "message": ...}, ...]; "-" reads stdin
        file: String,
    },

    /// Fetch a short topic summary
    Search {
        /// Topic words
        topic: Vec<String>,
    },

    /// Manage delayed alarms
    Alarm {
        #[command(subcommand)]
        action: AlarmAction,
    },
}

#[derive(Subcommand)]
enum AlarmAction {
    /// Schedule an alarm
    Set {
        /// Delay in minutes
        minutes: i64,
        /// Alarm message
        message: Vec<String>,
    },
    /// List scheduled alarms and their status
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = client::DaemonClient::new(cli.url.as_deref())?;

    match cli.command {
        Commands::Health => commands::health(&client).await,
        Commands::Chat { message } => commands::chat(&client, &message.join(" ")).await,
        Commands::Rps { choice } => commands::rps(&client, &choice).await,
        Commands::Detect { file } => commands::detect(&client, &file).await,
        Commands::Search { topic } => commands::search(&client, &topic.join(" ")).await,
        Commands::Alarm { action } => match action {
            AlarmAction::Set { minutes, message } => {
                commands::alarm_set(&client, minutes, &message.join(" ")).await
            }
            AlarmAction::List => commands::alarm_list(&client).await,
        },
    }
}
