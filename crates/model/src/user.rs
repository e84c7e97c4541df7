use alloc::string::String;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    /// Game most recently assigned to this user.
    pub current_game: Option<Uuid>,
    /// Score within the current game. Undefined until a game is assigned.
    pub score: Option<u32>,
}

impl User {
    pub const fn new(id: String) -> Self {
        Self { id, current_game: None, score: None }
    }
}
