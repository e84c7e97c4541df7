use alloc::{collections::BTreeMap, string::String, vec::Vec};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single question owned by exactly one game. Immutable once stored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: Uuid,
    /// Game which created (and owns) this question.
    pub game: Uuid,
    /// Question text as presented to the player.
    pub text: String,
    /// Answer options in display order.
    pub answers: Vec<String>,
    /// Index into `answers` of the correct option.
    pub correct: usize,
}

impl Question {
    /// Builds a question whose correct index is resolved from the answer text.
    /// Returns `None` if `correct` is not one of the `answers`.
    pub fn new(id: Uuid, game: Uuid, text: String, answers: Vec<String>, correct: &str) -> Option<Self> {
        let correct = answers.iter().position(|answer| answer == correct)?;
        Some(Self { id, game, text, answers, correct })
    }

    pub fn is_correct(&self, answer: usize) -> bool {
        self.correct == answer
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Game {
    pub id: Uuid,
    /// Question IDs in the order they are served. Never reordered after creation.
    pub questions: Vec<Uuid>,
    /// Number of distinct questions answered so far. Doubles as the index of the next question.
    pub round: usize,
    /// User ID of the player.
    pub player: String,
    /// Latest submitted answer for each answered question.
    pub responses: BTreeMap<Uuid, usize>,
}

impl Game {
    pub fn new(id: Uuid, player: String, questions: Vec<Uuid>) -> Self {
        Self { id, questions, round: 0, player, responses: BTreeMap::new() }
    }

    pub fn is_over(&self) -> bool {
        self.round >= self.questions.len()
    }

    /// Index of the question within this game, if it belongs here at all.
    pub fn position(&self, question: Uuid) -> Option<usize> {
        self.questions.iter().position(|&id| id == question)
    }

    /// The question to be served next, if any remain.
    pub fn current(&self) -> Option<Uuid> {
        self.questions.get(self.round).copied()
    }
}
