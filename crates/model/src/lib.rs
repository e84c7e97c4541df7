#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod quiz;
pub mod trivia;
pub mod user;
pub mod wire;

pub use quiz::{Game, Question};
pub use trivia::Candidate;
pub use user::User;
pub use uuid::Uuid;
