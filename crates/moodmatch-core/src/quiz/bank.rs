use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{BankError, QuizError};

/// Closed set of personality archetypes a session accumulates score toward.
///
/// The declaration order is load-bearing: `finalize()` scans categories in
/// this order and keeps the first-encountered maximum on ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Outgoing,
    Creative,
    Empathetic,
    Calm,
    Achiever,
}

impl Category {
    /// All categories in declared (tie-break) order.
    pub const ALL: [Category; 5] = [
        Category::Outgoing,
        Category::Creative,
        Category::Empathetic,
        Category::Calm,
        Category::Achiever,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in the declared order. Used to index per-category tables.
    pub fn index(self) -> usize {
        match self {
            Category::Outgoing => 0,
            Category::Creative => 1,
            Category::Empathetic => 2,
            Category::Calm => 3,
            Category::Achiever => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Outgoing => "outgoing",
            Category::Creative => "creative",
            Category::Empathetic => "empathetic",
            Category::Calm => "calm",
            Category::Achiever => "achiever",
        }
    }

    /// Parse a category name as it appears in bank files and CLI arguments.
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outgoing" => Some(Category::Outgoing),
            "creative" => Some(Category::Creative),
            "empathetic" => Some(Category::Empathetic),
            "calm" => Some(Category::Calm),
            "achiever" => Some(Category::Achiever),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable option within a question.
///
/// Option identity is its category, never its display position, so the
/// presentation layer may shuffle options freely without touching scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub category: Category,
    pub text: String,
    #[serde(default)]
    pub emoji: String,
    /// Points this option adds to its category's tally. The built-in bank
    /// uses the uniform 1-point policy for every option.
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    /// Look up the option for `category`, if this question offers it.
    pub fn option_for(&self, category: Category) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.category == category)
    }

    /// Check the one-option-per-category invariant: every category in the
    /// closed set appears exactly once.
    pub fn validate(&self) -> Result<(), BankError> {
        let mut seen = [false; Category::COUNT];
        for option in &self.options {
            let idx = option.category.index();
            if seen[idx] {
                return Err(BankError::DuplicateCategory {
                    question_id: self.id,
                    category: option.category,
                });
            }
            seen[idx] = true;
        }
        for category in Category::ALL {
            if !seen[category.index()] {
                return Err(BankError::MissingCategory {
                    question_id: self.id,
                    category,
                });
            }
        }
        Ok(())
    }

    /// Options in a shuffled display order.
    ///
    /// Pure presentation concern: callers render the returned order while
    /// scoring keys off each option's category, so the shuffle can never
    /// influence the tally.
    pub fn display_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&QuizOption> {
        let mut order: Vec<&QuizOption> = self.options.iter().collect();
        order.shuffle(rng);
        order
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at `index`, never silently clamped.
    pub fn question(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    /// Validate the whole bank: non-empty, unique question ids, and the
    /// one-option-per-category invariant on every question.
    pub fn validate(&self) -> Result<(), BankError> {
        if self.questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut ids = std::collections::HashSet::new();
        for question in &self.questions {
            if !ids.insert(question.id) {
                return Err(BankError::DuplicateQuestionId {
                    question_id: question.id,
                });
            }
            question.validate()?;
        }
        Ok(())
    }

    /// The built-in five-question Mooood bank.
    pub fn builtin() -> Self {
        fn q(id: u32, prompt: &str, options: [(&str, &str, Category); 5]) -> Question {
            Question {
                id,
                prompt: prompt.into(),
                options: options
                    .into_iter()
                    .map(|(text, emoji, category)| QuizOption {
                        category,
                        text: text.into(),
                        emoji: emoji.into(),
                        weight: 1,
                    })
                    .collect(),
            }
        }

        Self {
            questions: vec![
                q(
                    1,
                    "When you're at a party, you usually...",
                    [
                        ("Talk to everyone!", "🎉", Category::Outgoing),
                        ("Find the most interesting corner", "🎨", Category::Creative),
                        ("Check if everyone's okay", "💚", Category::Empathetic),
                        ("Listen and observe", "🌸", Category::Calm),
                        ("Network like a boss", "💪", Category::Achiever),
                    ],
                ),
                q(
                    2,
                    "Your ideal weekend looks like...",
                    [
                        ("Hanging with friends", "👯", Category::Outgoing),
                        ("Creating something new", "✨", Category::Creative),
                        ("Self-care day", "🧘", Category::Empathetic),
                        ("Reading & relaxing", "📚", Category::Calm),
                        ("Working on side projects", "🚀", Category::Achiever),
                    ],
                ),
                q(
                    3,
                    "In a group project, you're the one who...",
                    [
                        ("Keeps energy high", "⚡", Category::Outgoing),
                        ("Brings unique ideas", "💡", Category::Creative),
                        ("Makes sure everyone's heard", "🤝", Category::Empathetic),
                        ("Keeps things organized", "📋", Category::Calm),
                        ("Leads to victory", "🏆", Category::Achiever),
                    ],
                ),
                q(
                    4,
                    "Your go-to snack vibe is...",
                    [
                        ("Bright & energizing", "🥭", Category::Outgoing),
                        ("Unique & colorful", "🍉", Category::Creative),
                        ("Fresh & nurturing", "🥒", Category::Empathetic),
                        ("Soft & comforting", "🍑", Category::Calm),
                        ("Power-packed", "🫐", Category::Achiever),
                    ],
                ),
                q(
                    5,
                    "Your friends would describe you as...",
                    [
                        ("The life of the party", "⭐", Category::Outgoing),
                        ("The artistic soul", "🌈", Category::Creative),
                        ("The caring one", "💕", Category::Empathetic),
                        ("The peaceful presence", "🕊️", Category::Calm),
                        ("The go-getter", "🔥", Category::Achiever),
                    ],
                ),
            ],
        }
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_has_5_questions() {
        let bank = QuestionBank::default();
        assert_eq!(bank.len(), 5);
    }

    #[test]
    fn builtin_bank_validates() {
        assert!(QuestionBank::default().validate().is_ok());
    }

    #[test]
    fn builtin_bank_is_uniform_weight() {
        let bank = QuestionBank::default();
        assert!(bank
            .questions
            .iter()
            .flat_map(|q| &q.options)
            .all(|o| o.weight == 1));
    }

    #[test]
    fn question_out_of_range() {
        let bank = QuestionBank::default();
        assert!(matches!(
            bank.question(5),
            Err(QuizError::OutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn validate_rejects_missing_category() {
        let mut bank = QuestionBank::builtin();
        bank.questions[0].options.retain(|o| o.category != Category::Calm);
        assert_eq!(
            bank.validate(),
            Err(BankError::MissingCategory {
                question_id: 1,
                category: Category::Calm,
            })
        );
    }

    #[test]
    fn validate_rejects_duplicate_category() {
        let mut bank = QuestionBank::builtin();
        let dup = bank.questions[0].options[0].clone();
        bank.questions[0].options.push(dup);
        assert_eq!(
            bank.validate(),
            Err(BankError::DuplicateCategory {
                question_id: 1,
                category: Category::Outgoing,
            })
        );
    }

    #[test]
    fn validate_rejects_duplicate_question_id() {
        let mut bank = QuestionBank::builtin();
        bank.questions[1].id = 1;
        assert_eq!(
            bank.validate(),
            Err(BankError::DuplicateQuestionId { question_id: 1 })
        );
    }

    #[test]
    fn validate_rejects_empty_bank() {
        let bank = QuestionBank::new(vec![]);
        assert_eq!(bank.validate(), Err(BankError::Empty));
    }

    #[test]
    fn display_order_keeps_all_options() {
        use rand_pcg::Pcg64;
        use rand::SeedableRng;

        let bank = QuestionBank::default();
        let mut rng = Pcg64::seed_from_u64(7);
        let order = bank.questions[0].display_order(&mut rng);
        assert_eq!(order.len(), Category::COUNT);
        for category in Category::ALL {
            assert!(order.iter().any(|o| o.category == category));
        }
    }

    #[test]
    fn category_parse_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("bogus"), None);
    }
}
