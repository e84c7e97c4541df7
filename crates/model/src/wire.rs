//! Request and response bodies of the HTTP API.

use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct StartRequest {
    pub uid: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StartResponse {
    pub gid: Uuid,
}

#[derive(Deserialize)]
pub struct QuestionRequest {
    pub gid: Uuid,
}

/// Either the next question of a game or an explanation of why there is none.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NextQuestion {
    Question {
        qid: Uuid,
        question: String,
        answers: Vec<String>,
        round: usize,
    },
    Message {
        message: &'static str,
    },
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub qid: Uuid,
    pub answer: usize,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerResponse {
    pub correct: bool,
    /// Player's score after this answer. `None` if the player is unknown.
    pub score: Option<u32>,
    pub complete: bool,
}

/// Generic body for errors and informational replies.
#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub message: &'a str,
}
