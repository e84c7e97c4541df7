//! Payload schema of the Open Trivia Database (`https://opentdb.com/api.php`).

use alloc::{string::String, vec::Vec};
use serde::Deserialize;

/// A raw question as fetched from the trivia provider, before its answers are shuffled.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Candidate {
    /// All answer options with the correct answer appended last.
    pub fn into_parts(self) -> (String, Vec<String>, String) {
        let Self { question, correct_answer, mut incorrect_answers } = self;
        incorrect_answers.push(correct_answer.clone());
        (question, incorrect_answers, correct_answer)
    }
}

/// Top-level response envelope. A non-zero `response_code` signals a provider-side failure
/// (e.g. not enough questions or rate limiting).
#[derive(Debug, Deserialize)]
pub struct TriviaResponse {
    pub response_code: u8,
    #[serde(default)]
    pub results: Vec<Candidate>,
}
