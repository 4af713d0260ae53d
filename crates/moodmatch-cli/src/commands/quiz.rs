use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use moodmatch_core::{config, Category, Event, QuestionBank, QuizEngine};

#[derive(Subcommand)]
pub enum QuizAction {
    /// Take the quiz interactively on stdin/stdout
    Run {
        /// Load the question bank from a TOML file instead of the default
        #[arg(long)]
        bank: Option<PathBuf>,
        /// Seed for the option display shuffle (deterministic runs)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play a scripted session and print every engine event as JSON
    Simulate {
        /// Comma-separated category picks, one per question
        /// (e.g. outgoing,creative,calm,calm,achiever)
        #[arg(long)]
        answers: String,
        /// Load the question bank from a TOML file instead of the default
        #[arg(long)]
        bank: Option<PathBuf>,
    },
}

fn load_bank(path: Option<&PathBuf>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(config::load_bank(path)?),
        None => Ok(config::load_or_builtin()?),
    }
}

fn parse_picks(answers: &str) -> Result<Vec<Category>, Box<dyn std::error::Error>> {
    answers
        .split(',')
        .map(|s| {
            Category::parse(s).ok_or_else(|| format!("unknown category: '{}'", s.trim()).into())
        })
        .collect()
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuizAction::Run { bank, seed } => {
            let bank = load_bank(bank.as_ref())?;
            let mut engine = QuizEngine::new(bank)?;
            let mut rng = match seed {
                Some(seed) => Pcg64::seed_from_u64(seed),
                None => Pcg64::from_entropy(),
            };

            let stdin = std::io::stdin();
            let mut lines = stdin.lock().lines();
            engine.start();

            while !engine.is_complete() {
                let question = engine.current_question()?;
                let order = question.display_order(&mut rng);

                println!(
                    "\nQuestion {} of {}: {}",
                    engine.question_index() + 1,
                    engine.total_questions(),
                    question.prompt
                );
                for (i, option) in order.iter().enumerate() {
                    println!("  {}) {} {}", i + 1, option.emoji, option.text);
                }
                print!("> ");
                std::io::stdout().flush()?;

                let line = match lines.next() {
                    Some(line) => line?,
                    None => return Err("stdin closed before the quiz was complete".into()),
                };
                let pick = match line.trim().parse::<usize>() {
                    Ok(n) if n >= 1 && n <= order.len() => order[n - 1].category,
                    _ => {
                        println!("please enter a number between 1 and {}", order.len());
                        continue;
                    }
                };
                engine.submit_answer(pick)?;
            }

            let result = engine.finalize()?;
            println!(
                "\n{} You're {} -- {}!",
                result.profile.emoji, result.profile.character_name, result.profile.name
            );
            println!("{}", result.profile.description);
            println!(
                "Your match: {} ({})",
                result.profile.product, result.profile.product_flavor
            );
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        QuizAction::Simulate { answers, bank } => {
            let bank = load_bank(bank.as_ref())?;
            let mut engine = QuizEngine::new(bank)?;
            let picks = parse_picks(&answers)?;
            if picks.len() != engine.total_questions() {
                return Err(format!(
                    "expected {} answers, got {}",
                    engine.total_questions(),
                    picks.len()
                )
                .into());
            }

            println!("{}", serde_json::to_string_pretty(&engine.start())?);
            for category in picks {
                let event = engine.submit_answer(category)?;
                println!("{}", serde_json::to_string_pretty(&event)?);
            }

            let result = engine.finalize()?;
            let revealed = Event::ResultRevealed {
                category: result.category,
                character_name: result.profile.character_name.to_string(),
                product: result.profile.product.to_string(),
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&revealed)?);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
