use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "resolve", version, about = "Resolve recovery tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current streak and challenge state
    Status {
        /// Print the full state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Challenge control
    Challenge {
        #[command(subcommand)]
        action: commands::challenge::ChallengeAction,
    },
    /// Daily habit checklist
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Confirm a relapse: streak restarts, challenge day resets
    Relapse {
        /// Confirm the reset (required)
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status { json } => commands::status::run(json),
        Commands::Challenge { action } => commands::challenge::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Relapse { yes } => commands::relapse::run(yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
