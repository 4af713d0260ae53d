use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "moodmatch-cli", version, about = "MoodMatch CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run or simulate a quiz session
    Quiz {
        #[command(subcommand)]
        action: commands::quiz::QuizAction,
    },
    /// Question bank management
    Bank {
        #[command(subcommand)]
        action: commands::bank::BankAction,
    },
    /// Character profile lookup
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Quiz { action } => commands::quiz::run(action),
        Commands::Bank { action } => commands::bank::run(action),
        Commands::Profile { action } => commands::profile::run(action),
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
