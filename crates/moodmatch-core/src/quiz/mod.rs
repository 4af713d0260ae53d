pub mod bank;
pub mod engine;

pub use bank::{Category, Question, QuestionBank, QuizOption};
pub use engine::{Answer, QuizEngine, QuizPhase, ScoreTally};
