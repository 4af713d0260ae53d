use std::path::PathBuf;

use clap::Subcommand;

use moodmatch_core::{config, QuestionBank};

#[derive(Subcommand)]
pub enum BankAction {
    /// Print the active question bank as JSON
    Show {
        /// Read from a TOML file instead of the default
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Validate a question bank
    Validate {
        /// Read from a TOML file instead of the default
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Write the built-in bank to the default bank path as a starting point
    Init {
        /// Overwrite an existing bank file
        #[arg(long)]
        force: bool,
    },
}

fn load(file: Option<&PathBuf>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(config::load_bank(path)?),
        None => Ok(config::load_or_builtin()?),
    }
}

pub fn run(action: BankAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BankAction::Show { file } => {
            let bank = load(file.as_ref())?;
            println!("{}", serde_json::to_string_pretty(&bank)?);
        }
        BankAction::Validate { file } => {
            let bank = load(file.as_ref())?;
            bank.validate()?;
            println!("bank ok: {} questions", bank.len());
        }
        BankAction::Init { force } => {
            let path = config::bank_path()?;
            if path.exists() && !force {
                return Err(format!(
                    "bank file already exists at {} (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
            config::save_bank(&QuestionBank::builtin(), &path)?;
            println!("bank written to {}", path.display());
        }
    }
    Ok(())
}
