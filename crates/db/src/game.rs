use crate::{
    error::{Error, Result},
    provider::Provider,
    question::QuestionStore,
};
use core::time::Duration;
use dashmap::DashMap;
use model::{Game, Uuid};
use rand::Rng;

/// Outcome of recording an answer, observed atomically with the mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recorded {
    /// Index of the answered question within the game.
    pub position: usize,
    /// Round counter before this answer was recorded.
    pub round: usize,
    /// Whether this was the first answer to the question.
    pub fresh: bool,
    /// Whether the game is over after this answer.
    pub complete: bool,
}

pub struct GameStore {
    games: DashMap<Uuid, Game>,
    /// Number of questions requested per game.
    batch: usize,
    /// Upper bound on the provider fetch.
    timeout: Duration,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(Self::BATCH_SIZE, Self::DEFAULT_TIMEOUT)
    }
}

impl GameStore {
    pub const BATCH_SIZE: usize = 10;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(batch: usize, timeout: Duration) -> Self {
        Self { games: DashMap::new(), batch, timeout }
    }

    /// Creates a fully populated game for the player. The game ID is only returned once all of its
    /// questions are stored. On failure, no game and no questions are left behind.
    pub async fn create_game<P>(&self, provider: &P, questions: &QuestionStore, player: &str) -> Result<Uuid>
    where
        P: Provider + Sync,
    {
        let candidates = tokio::time::timeout(self.timeout, provider.fetch(self.batch))
            .await
            .map_err(|_| Error::Timeout)??;
        if candidates.len() != self.batch {
            return Err(Error::ShortBatch { expected: self.batch, found: candidates.len() });
        }

        let id = Uuid::new_v4();
        let ids = store_questions(
            questions,
            id,
            candidates.into_iter().map(|candidate| {
                let (text, mut answers, correct) = candidate.into_parts();
                rotate(&mut answers);
                (text, answers, correct)
            }),
        )?;

        log::info!("created game {id} with {} questions for {player}", ids.len());
        self.games.insert(id, Game::new(id, player.into(), ids));
        Ok(id)
    }

    pub fn get_game_by_id(&self, id: Uuid) -> Option<Game> {
        self.games.get(&id).map(|entry| entry.value().clone())
    }

    pub fn get_game_current_round(&self, id: Uuid) -> Option<usize> {
        self.games.get(&id).map(|game| game.round)
    }

    /// Unknown games are considered over.
    pub fn is_game_over(&self, id: Uuid) -> bool {
        self.games.get(&id).map_or(true, |game| game.is_over())
    }

    /// Records (or overwrites) the answer to a question. The round only advances the first time a
    /// question is answered. Returns `None` if the game is unknown or the question is not part of it.
    pub fn record_answer(&self, game: Uuid, question: Uuid, answer: usize) -> Option<Recorded> {
        let mut game = self.games.get_mut(&game)?;
        let position = game.position(question)?;
        let round = game.round;
        let fresh = game.responses.insert(question, answer).is_none();
        if fresh {
            game.round += 1;
        }
        log::debug!("recorded answer {answer} to question {question} of game {}", game.id);
        Some(Recorded { position, round, fresh, complete: game.is_over() })
    }

    pub fn all_games(&self) -> Vec<Game> {
        self.games.iter().map(|entry| entry.value().clone()).collect()
    }
}

/// Stores every `(text, answers, correct)` question for the game, in order. If any of them is
/// rejected, the questions stored so far are discarded as well.
fn store_questions<I>(questions: &QuestionStore, game: Uuid, items: I) -> Result<Vec<Uuid>>
where
    I: IntoIterator<Item = (String, Vec<String>, String)>,
{
    let mut ids = Vec::new();
    for (text, answers, correct) in items {
        match questions.create_question(game, text, answers, &correct) {
            Ok(qid) => ids.push(qid),
            Err(err) => {
                questions.discard_game(game);
                return Err(err);
            }
        }
    }
    Ok(ids)
}

/// Rotates the slice to the right by a uniformly random amount. Only rotations of the original
/// order are produced, not arbitrary permutations.
fn rotate<T>(items: &mut [T]) {
    rotate_with(items, &mut rand::thread_rng());
}

fn rotate_with<T, R: Rng>(items: &mut [T], rng: &mut R) {
    if items.is_empty() {
        return;
    }
    let amount = rng.gen_range(0..items.len());
    items.rotate_right(amount);
}
