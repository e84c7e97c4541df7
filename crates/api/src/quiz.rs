use crate::error::{Error, Result};
use db::{GameStore, Provider, QuestionStore, UserStore, Uuid};
use model::wire::{AnswerResponse, NextQuestion};

pub const GAME_COMPLETED: &str = "Sorry, this game is already completed";
pub const INVALID_GAME: &str = "Sorry, this is not a valid game id";

/// Ties the question, game, and user stores together into a playable quiz.
pub struct Quiz<P> {
    provider: P,
    questions: QuestionStore,
    games: GameStore,
    users: UserStore,
}

impl<P> Quiz<P> {
    pub fn new(provider: P, games: GameStore) -> Self {
        Self { provider, games, questions: Default::default(), users: Default::default() }
    }

    pub const fn questions(&self) -> &QuestionStore {
        &self.questions
    }

    pub const fn games(&self) -> &GameStore {
        &self.games
    }

    pub const fn users(&self) -> &UserStore {
        &self.users
    }

    /// Serves the question of the game's current round. The correct answer is never revealed.
    /// Unknown game IDs get [`INVALID_GAME`] rather than [`GAME_COMPLETED`].
    pub fn get_next_question(&self, gid: Uuid) -> NextQuestion {
        let Some(game) = self.games.get_game_by_id(gid) else {
            log::warn!("question requested for unknown game {gid}");
            return NextQuestion::Message { message: INVALID_GAME };
        };

        if game.is_over() {
            return NextQuestion::Message { message: GAME_COMPLETED };
        }

        let Some(question) = game.current().and_then(|qid| self.questions.get_question_by_id(qid)) else {
            log::error!("game {gid} refers to a missing question at round {}", game.round);
            return NextQuestion::Message { message: INVALID_GAME };
        };

        NextQuestion::Question {
            qid: question.id,
            question: question.text,
            answers: question.answers,
            round: game.round,
        }
    }

    /// Records the player's answer and scores it. A point is only awarded for a correct first
    /// answer to the question of the current round; re-answering never scores again.
    pub fn answer_question(&self, qid: Uuid, answer: usize) -> Result<AnswerResponse> {
        let question = self.questions.get_question_by_id(qid).ok_or(Error::UnknownQuestion)?;
        let player = self.games.get_game_by_id(question.game).ok_or(Error::UnknownQuestion)?.player;
        let recorded = self.games.record_answer(question.game, qid, answer).ok_or(Error::UnknownQuestion)?;

        let correct = question.is_correct(answer);
        if correct && recorded.fresh && recorded.position == recorded.round {
            self.users.increase_user_score(&player);
        }

        let score = self.users.get_user_score(&player);
        Ok(AnswerResponse { correct, score, complete: recorded.complete })
    }
}

impl<P: Provider + Sync> Quiz<P> {
    /// Creates a fully populated game and assigns it to the user, creating the user if necessary.
    /// The user's score is reset to zero. Nothing changes if the game could not be created.
    pub async fn start_game(&self, uid: &str) -> Result<Uuid> {
        let gid = self.games.create_game(&self.provider, &self.questions, uid).await.map_err(|err| {
            log::warn!("failed to create a game for {uid}: {err}");
            Error::GameCreation(err)
        })?;

        if self.users.get_user_by_id(uid).is_none() {
            self.users.create_user(uid);
        }

        self.users.update_user_current_game(uid, gid);
        Ok(gid)
    }
}
