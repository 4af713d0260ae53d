//! # MoodMatch Core Library
//!
//! This library provides the core logic for the MoodMatch personality quiz:
//! a fixed bank of multiple-choice questions tallied per category, with the
//! winning category revealed as a promotional character profile. It
//! implements a CLI-first philosophy where everything is available via a
//! standalone CLI binary, with any GUI funnel being a thin presentation
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Quiz Engine**: A caller-driven state machine over one session;
//!   the presentation layer submits answers and finalizes once complete
//! - **Question Bank**: Compiled-in data, optionally overridden by a
//!   validated TOML file
//! - **Profiles**: Static character/product table keyed by category
//!
//! ## Key Components
//!
//! - [`QuizEngine`]: Core session state machine
//! - [`QuestionBank`]: Question data with the one-option-per-category invariant
//! - [`profile_for`]: Category to character profile lookup
//! - [`Event`]: Serializable state-change notifications

pub mod config;
pub mod error;
pub mod events;
pub mod profile;
pub mod quiz;

pub use error::{BankError, ConfigError, CoreError, QuizError};
pub use events::Event;
pub use profile::{profile_for, CharacterProfile, CharacterResult};
pub use quiz::{Answer, Category, Question, QuestionBank, QuizEngine, QuizOption, QuizPhase, ScoreTally};
