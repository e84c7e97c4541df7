pub mod error;
pub mod game;
pub mod provider;
pub mod question;
pub mod user;

pub use game::{GameStore, Recorded};
pub use model::{Candidate, Game, Question, User, Uuid};
pub use provider::{FetchError, Provider};
pub use question::QuestionStore;
pub use user::UserStore;
