//! Quiz engine implementation.
//!
//! The engine is a caller-driven state machine over one quiz session. It
//! holds no threads and no shared state - the presentation layer submits
//! answers and asks for the result when the session is complete.
//!
//! ## State Transitions
//!
//! ```text
//! NotStarted -> InProgress -> Complete -> Finalized
//! ```
//!
//! `reset()` is valid from any phase and returns to `NotStarted`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = QuizEngine::with_builtin()?;
//! while !engine.is_complete() {
//!     let question = engine.current_question()?;
//!     engine.submit_answer(pick(question))?;
//! }
//! let result = engine.finalize()?;
//! ```

use chrono::Utc;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

use super::bank::{Category, Question, QuestionBank};
use crate::error::{BankError, QuizError};
use crate::events::Event;
use crate::profile::{profile_for, CharacterResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Complete,
    Finalized,
}

/// A `(question, category)` pair recorded when the user selects an option.
/// Created once per question, immutable afterward. Submission order is
/// kept for the record but never affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub category: Category,
}

/// Per-category accumulated score for one session.
///
/// Backed by a fixed array in `Category::ALL` order; serialized as a
/// `{category: score}` map in that same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    scores: [u32; Category::COUNT],
}

impl ScoreTally {
    pub fn get(&self, category: Category) -> u32 {
        self.scores[category.index()]
    }

    pub fn add(&mut self, category: Category, weight: u32) {
        self.scores[category.index()] += weight;
    }

    /// `(category, score)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(|&c| (c, self.scores[c.index()]))
    }

    pub fn clear(&mut self) {
        self.scores = [0; Category::COUNT];
    }
}

impl Serialize for ScoreTally {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.as_str(), &score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoreTally {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = std::collections::HashMap::<Category, u32>::deserialize(deserializer)?;
        let mut tally = ScoreTally::default();
        for (category, score) in entries {
            tally.scores[category.index()] = score;
        }
        Ok(tally)
    }
}

/// Core quiz engine.
///
/// One instance owns one session; instantiate per quiz-taker. The bank is
/// validated at construction so every later index/category lookup is
/// well-defined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizEngine {
    bank: QuestionBank,
    phase: QuizPhase,
    question_index: usize,
    answers: Vec<Answer>,
    tally: ScoreTally,
}

impl QuizEngine {
    /// Create an engine over `bank`, validating it first.
    pub fn new(bank: QuestionBank) -> Result<Self, BankError> {
        bank.validate()?;
        Ok(Self {
            bank,
            phase: QuizPhase::NotStarted,
            question_index: 0,
            answers: Vec::new(),
            tally: ScoreTally::default(),
        })
    }

    /// Engine over the built-in Mooood bank.
    pub fn with_builtin() -> Result<Self, BankError> {
        Self::new(QuestionBank::builtin())
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, QuizPhase::Complete | QuizPhase::Finalized)
    }

    /// The question at the current index.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.bank.question(self.question_index)
    }

    /// 0.0 .. 100.0 progress across the session.
    pub fn progress_pct(&self) -> f64 {
        let total = self.bank.len() as f64;
        if total == 0.0 {
            return 0.0;
        }
        (self.answers.len() as f64 / total * 100.0).min(100.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            question_index: self.question_index,
            total_questions: self.bank.len(),
            progress_pct: self.progress_pct(),
            tally: self.tally,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Explicitly mark the session started. Optional: the first
    /// `submit_answer` starts the session on its own.
    pub fn start(&mut self) -> Event {
        if self.phase == QuizPhase::NotStarted {
            self.phase = QuizPhase::InProgress;
        }
        Event::SessionStarted {
            total_questions: self.bank.len(),
            at: Utc::now(),
        }
    }

    /// Record the selection for the current question.
    ///
    /// Atomic: the answer is appended, the option's weight added to the
    /// tally and the index advanced, or (on any error) nothing changes.
    /// The returned event's `complete` flag reports whether this was the
    /// last question.
    pub fn submit_answer(&mut self, category: Category) -> Result<Event, QuizError> {
        if self.is_complete() {
            return Err(QuizError::OutOfRange {
                index: self.question_index,
                len: self.bank.len(),
            });
        }
        let question = self.bank.question(self.question_index)?;
        let option = question
            .option_for(category)
            .ok_or(QuizError::InvalidSelection {
                category,
                question_id: question.id,
            })?;
        let question_id = question.id;
        let weight = option.weight;

        self.answers.push(Answer {
            question_id,
            category,
        });
        self.tally.add(category, weight);
        self.question_index += 1;
        self.phase = if self.question_index == self.bank.len() {
            QuizPhase::Complete
        } else {
            QuizPhase::InProgress
        };

        Ok(Event::AnswerRecorded {
            question_id,
            category,
            weight,
            complete: self.is_complete(),
            at: Utc::now(),
        })
    }

    /// Select the winning category and its profile.
    ///
    /// Valid once every question is answered; fails with `NotComplete`
    /// otherwise, never returning a default or guessed category. Scans
    /// categories in declared order and keeps the first strictly-greater
    /// score, so ties resolve toward the earlier-declared category.
    /// Calling again on a finalized session returns the same result.
    pub fn finalize(&mut self) -> Result<CharacterResult, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::NotComplete {
                answered: self.answers.len(),
                total: self.bank.len(),
            });
        }

        let mut winner = Category::ALL[0];
        let mut best = self.tally.get(winner);
        for &category in &Category::ALL[1..] {
            let score = self.tally.get(category);
            if score > best {
                best = score;
                winner = category;
            }
        }

        self.phase = QuizPhase::Finalized;
        Ok(CharacterResult {
            category: winner,
            profile: *profile_for(winner),
        })
    }

    /// Start a new session without reconstructing the question bank.
    ///
    /// Clears the answers, zeroes the tally and returns to `NotStarted`.
    pub fn reset(&mut self) -> Event {
        self.phase = QuizPhase::NotStarted;
        self.question_index = 0;
        self.answers.clear();
        self.tally.clear();
        Event::SessionReset { at: Utc::now() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(engine: &mut QuizEngine, picks: &[Category]) {
        for &category in picks {
            engine.submit_answer(category).unwrap();
        }
    }

    #[test]
    fn fresh_engine_is_not_started() {
        let engine = QuizEngine::with_builtin().unwrap();
        assert_eq!(engine.phase(), QuizPhase::NotStarted);
        assert_eq!(engine.question_index(), 0);
        assert!(engine.answers().is_empty());
    }

    #[test]
    fn submit_advances_and_completes() {
        let mut engine = QuizEngine::with_builtin().unwrap();
        for i in 0..5 {
            assert_eq!(engine.question_index(), i);
            let event = engine.submit_answer(Category::Calm).unwrap();
            match event {
                Event::AnswerRecorded { complete, .. } => {
                    assert_eq!(complete, i == 4);
                }
                _ => panic!("Expected AnswerRecorded"),
            }
        }
        assert_eq!(engine.phase(), QuizPhase::Complete);
        assert!(matches!(
            engine.current_question(),
            Err(QuizError::OutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn submit_after_complete_is_out_of_range() {
        let mut engine = QuizEngine::with_builtin().unwrap();
        answer_all(&mut engine, &[Category::Outgoing; 5]);
        assert!(matches!(
            engine.submit_answer(Category::Outgoing),
            Err(QuizError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejected_submit_leaves_state_untouched() {
        let mut bank = QuestionBank::builtin();
        // Drop the calm option from question 1 so it becomes an invalid
        // selection there. Built directly to bypass `new`'s validation.
        bank.questions[0]
            .options
            .retain(|o| o.category != Category::Calm);
        let mut engine = QuizEngine {
            bank,
            phase: QuizPhase::NotStarted,
            question_index: 0,
            answers: Vec::new(),
            tally: ScoreTally::default(),
        };

        let err = engine.submit_answer(Category::Calm).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidSelection {
                category: Category::Calm,
                question_id: 1,
            }
        );
        assert_eq!(engine.phase(), QuizPhase::NotStarted);
        assert_eq!(engine.question_index(), 0);
        assert!(engine.answers().is_empty());
        assert_eq!(engine.tally(), &ScoreTally::default());
    }

    #[test]
    fn finalize_before_complete_fails() {
        let mut engine = QuizEngine::with_builtin().unwrap();
        engine.submit_answer(Category::Creative).unwrap();
        assert_eq!(
            engine.finalize().unwrap_err(),
            QuizError::NotComplete {
                answered: 1,
                total: 5,
            }
        );
        assert_eq!(engine.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn majority_wins() {
        let mut engine = QuizEngine::with_builtin().unwrap();
        answer_all(
            &mut engine,
            &[
                Category::Outgoing,
                Category::Outgoing,
                Category::Outgoing,
                Category::Creative,
                Category::Empathetic,
            ],
        );
        assert_eq!(engine.tally().get(Category::Outgoing), 3);
        assert_eq!(engine.tally().get(Category::Creative), 1);
        assert_eq!(engine.tally().get(Category::Empathetic), 1);
        assert_eq!(engine.tally().get(Category::Calm), 0);
        assert_eq!(engine.tally().get(Category::Achiever), 0);

        let result = engine.finalize().unwrap();
        assert_eq!(result.category, Category::Outgoing);
        assert_eq!(result.profile.character_name, "Jolly");
        assert_eq!(engine.phase(), QuizPhase::Finalized);
    }

    #[test]
    fn tie_resolves_to_earlier_declared_category() {
        let mut engine = QuizEngine::with_builtin().unwrap();
        answer_all(
            &mut engine,
            &[
                Category::Outgoing,
                Category::Creative,
                Category::Outgoing,
                Category::Creative,
                Category::Empathetic,
            ],
        );
        let result = engine.finalize().unwrap();
        assert_eq!(result.category, Category::Outgoing);
    }

    #[test]
    fn finalize_twice_returns_same_result() {
        let mut engine = QuizEngine::with_builtin().unwrap();
        answer_all(&mut engine, &[Category::Achiever; 5]);
        let first = engine.finalize().unwrap();
        let second = engine.finalize().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut engine = QuizEngine::with_builtin().unwrap();
        answer_all(&mut engine, &[Category::Calm; 5]);
        engine.finalize().unwrap();
        engine.reset();

        let fresh = QuizEngine::with_builtin().unwrap();
        assert_eq!(engine.phase(), fresh.phase());
        assert_eq!(engine.question_index(), fresh.question_index());
        assert_eq!(engine.answers(), fresh.answers());
        assert_eq!(engine.tally(), fresh.tally());
    }

    #[test]
    fn reset_on_fresh_session_is_idempotent() {
        let mut engine = QuizEngine::with_builtin().unwrap();
        engine.reset();
        let fresh = QuizEngine::with_builtin().unwrap();
        assert_eq!(engine.phase(), fresh.phase());
        assert_eq!(engine.tally(), fresh.tally());
        assert_eq!(engine.answers(), fresh.answers());
    }

    #[test]
    fn snapshot_reports_progress() {
        let mut engine = QuizEngine::with_builtin().unwrap();
        engine.submit_answer(Category::Empathetic).unwrap();
        match engine.snapshot() {
            Event::StateSnapshot {
                phase,
                question_index,
                total_questions,
                progress_pct,
                ..
            } => {
                assert_eq!(phase, QuizPhase::InProgress);
                assert_eq!(question_index, 1);
                assert_eq!(total_questions, 5);
                assert!((progress_pct - 20.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }

    #[test]
    fn all_zero_weights_fall_back_to_first_declared() {
        let mut bank = QuestionBank::builtin();
        for question in &mut bank.questions {
            for option in &mut question.options {
                option.weight = 0;
            }
        }
        let mut engine = QuizEngine::new(bank).unwrap();
        answer_all(&mut engine, &[Category::Achiever; 5]);
        let result = engine.finalize().unwrap();
        assert_eq!(result.category, Category::Outgoing);
    }

    #[test]
    fn tally_serializes_as_category_map() {
        let mut tally = ScoreTally::default();
        tally.add(Category::Calm, 2);
        let json = serde_json::to_value(tally).unwrap();
        assert_eq!(json["calm"], 2);
        assert_eq!(json["outgoing"], 0);
    }
}
