use dashmap::{mapref::entry::Entry, DashMap};
use model::{User, Uuid};

/// Per-user state keyed by the caller-provided user ID.
#[derive(Default)]
pub struct UserStore(DashMap<String, User>);

impl UserStore {
    /// Inserts a blank user. An existing user with the same ID is overwritten.
    pub fn create_user(&self, id: &str) {
        let user = User::new(id.into());
        match self.0.entry(id.into()) {
            Entry::Occupied(mut entry) => {
                log::warn!("overwriting duplicate user {id}");
                entry.insert(user);
            }
            Entry::Vacant(entry) => {
                entry.insert(user);
            }
        }
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.0.get(id).map(|entry| entry.value().clone())
    }

    /// Current score of the user. `None` if the user is unknown or has no game yet.
    pub fn get_user_score(&self, id: &str) -> Option<u32> {
        let Some(user) = self.0.get(id) else {
            log::warn!("score requested for unknown user {id}");
            return None;
        };
        user.score
    }

    /// Assigns a game to the user, resetting the score to zero. Returns `None` if the user is
    /// unknown, in which case nothing changes.
    pub fn update_user_current_game(&self, id: &str, game: Uuid) -> Option<Uuid> {
        let Some(mut user) = self.0.get_mut(id) else {
            log::warn!("cannot assign game {game} to unknown user {id}");
            return None;
        };
        *user = User { id: id.into(), current_game: Some(game), score: Some(0) };
        Some(game)
    }

    /// Increments the user's score and returns the new value.
    pub fn increase_user_score(&self, id: &str) -> Option<u32> {
        let Some(mut user) = self.0.get_mut(id) else {
            log::warn!("cannot increase score of unknown user {id}");
            return None;
        };
        let score = user.score.unwrap_or_default() + 1;
        user.score = Some(score);
        Some(score)
    }

    pub fn all_users(&self) -> Vec<User> {
        self.0.iter().map(|entry| entry.value().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{UserStore, Uuid};

    #[test]
    fn user_store_test() {
        let store = UserStore::default();
        assert!(store.get_user_by_id("alice").is_none());
        assert!(store.get_user_score("alice").is_none());

        store.create_user("alice");
        let user = store.get_user_by_id("alice").unwrap();
        assert_eq!(user.id, "alice");
        assert!(user.current_game.is_none());
        assert!(user.score.is_none());

        let game = Uuid::new_v4();
        assert_eq!(store.update_user_current_game("alice", game), Some(game));
        assert_eq!(store.get_user_score("alice"), Some(0));
        assert_eq!(store.increase_user_score("alice"), Some(1));
        assert_eq!(store.increase_user_score("alice"), Some(2));
        assert_eq!(store.get_user_by_id("alice").unwrap().current_game, Some(game));
    }

    #[test]
    fn reassignment_resets_score() {
        let store = UserStore::default();
        store.create_user("bob");
        store.update_user_current_game("bob", Uuid::new_v4());
        store.increase_user_score("bob");
        store.increase_user_score("bob");
        assert_eq!(store.get_user_score("bob"), Some(2));

        let next = Uuid::new_v4();
        store.update_user_current_game("bob", next);
        let user = store.get_user_by_id("bob").unwrap();
        assert_eq!(user.current_game, Some(next));
        assert_eq!(user.score, Some(0));
    }

    #[test]
    fn unknown_users_are_left_alone() {
        let store = UserStore::default();
        assert!(store.update_user_current_game("ghost", Uuid::new_v4()).is_none());
        assert!(store.increase_user_score("ghost").is_none());
        assert!(store.get_user_by_id("ghost").is_none());
        assert!(store.all_users().is_empty());
    }

    #[test]
    fn duplicate_creation_overwrites() {
        let store = UserStore::default();
        store.create_user("carol");
        store.update_user_current_game("carol", Uuid::new_v4());
        store.increase_user_score("carol");

        store.create_user("carol");
        let user = store.get_user_by_id("carol").unwrap();
        assert!(user.current_game.is_none());
        assert!(user.score.is_none());
        assert_eq!(store.all_users().len(), 1);
    }

    #[test]
    fn score_starts_from_zero_without_game() {
        let store = UserStore::default();
        store.create_user("dave");
        assert_eq!(store.increase_user_score("dave"), Some(1));
    }
}
