use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz::bank::Category;
use crate::quiz::engine::{QuizPhase, ScoreTally};

/// Every state change in a quiz session produces an Event.
/// The presentation layer renders them; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        total_questions: usize,
        at: DateTime<Utc>,
    },
    AnswerRecorded {
        question_id: u32,
        category: Category,
        weight: u32,
        /// True when this answer was the last one and the quiz is complete.
        complete: bool,
        at: DateTime<Utc>,
    },
    /// Finalize selected the winning category.
    ResultRevealed {
        category: Category,
        character_name: String,
        product: String,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: QuizPhase,
        question_index: usize,
        total_questions: usize,
        progress_pct: f64,
        tally: ScoreTally,
        at: DateTime<Utc>,
    },
}
