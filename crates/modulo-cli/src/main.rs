use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(
    name = "modulo",
    version,
    about = "Modulo -- offload tonight's thoughts onto tomorrow's list"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize state and preferences
    Init {
        /// Username to record (defaults to $USER)
        #[arg(long)]
        username: Option<String>,
        /// Overwrite an existing state file
        #[arg(long)]
        force: bool,
    },
    /// Print preferences
    Get {
        #[command(subcommand)]
        action: commands::prefs::GetAction,
    },
    /// Update a preference
    Set {
        #[command(subcommand)]
        action: commands::prefs::SetAction,
    },
    /// Append an entry to tomorrow's list
    Tomorrow {
        /// Entry text; the configured delimiter splits it into several entries
        entry: String,
    },
    /// Remove an entry from tomorrow's list
    Remove {
        /// Entry number as shown by `modulo peek`
        index: usize,
    },
    /// Show tomorrow's entries so far
    Peek,
    /// Read today's entries
    Today,
    /// Start the day early
    Wakeup {
        /// Answer the confirmation prompt non-interactively
        #[arg(long)]
        yes: bool,
    },
    /// Show retired entry lists, oldest first
    History {
        /// List number as shown by `modulo history`
        index: Option<usize>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    // Sampled exactly once; every core call in this invocation sees the
    // same instant.
    let now = Utc::now();
    let result = match cli.command {
        Commands::Init { username, force } => commands::init::run(username, force, now),
        Commands::Get { action } => commands::prefs::run_get(action, now),
        Commands::Set { action } => commands::prefs::run_set(action, now),
        Commands::Tomorrow { entry } => commands::entry::run_tomorrow(&entry, now),
        Commands::Remove { index } => commands::entry::run_remove(index, now),
        Commands::Peek => commands::entry::run_peek(now),
        Commands::Today => commands::today::run(now),
        Commands::Wakeup { yes } => commands::wakeup::run(yes, now),
        Commands::History { index } => commands::history::run(index, now),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
