use crate::error::{Error, Result};
use dashmap::DashMap;
use model::{Question, Uuid};

/// Registry of all questions ever created, keyed by question ID.
#[derive(Default)]
pub struct QuestionStore(DashMap<Uuid, Question>);

impl QuestionStore {
    /// Stores a new question for the given game and returns its fresh ID. The correct answer is
    /// given as text and must be one of the `answers`; otherwise nothing is stored.
    pub fn create_question(&self, game: Uuid, text: String, answers: Vec<String>, correct: &str) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let question = Question::new(id, game, text, answers, correct).ok_or(Error::MissingAnswer)?;
        self.0.insert(id, question);
        Ok(id)
    }

    pub fn get_question_by_id(&self, id: Uuid) -> Option<Question> {
        self.0.get(&id).map(|entry| entry.value().clone())
    }

    /// Every question owned by the game, in no particular order.
    pub fn get_questions_by_game_id(&self, game: Uuid) -> Vec<Question> {
        self.0.iter().filter(|entry| entry.game == game).map(|entry| entry.value().clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops all questions of a game whose creation was aborted.
    pub fn discard_game(&self, game: Uuid) {
        self.0.retain(|_, question| question.game != game);
    }
}
