use clap::Subcommand;
use serde::Serialize;

use moodmatch_core::{profile_for, Category, CharacterProfile};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// List every category with its character profile
    List,
    /// Print the profile for one category
    Show {
        /// Category name (outgoing, creative, empathetic, calm, achiever)
        category: String,
    },
}

#[derive(Serialize)]
struct ProfileEntry {
    category: Category,
    #[serde(flatten)]
    profile: CharacterProfile,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::List => {
            let entries: Vec<ProfileEntry> = Category::ALL
                .into_iter()
                .map(|category| ProfileEntry {
                    category,
                    profile: *profile_for(category),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        ProfileAction::Show { category } => {
            let category = Category::parse(&category)
                .ok_or_else(|| format!("unknown category: '{category}'"))?;
            let entry = ProfileEntry {
                category,
                profile: *profile_for(category),
            };
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
    }
    Ok(())
}
