use crate::provider::FetchError;
use core::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    /// The correct answer does not appear among the answer options.
    MissingAnswer,
    /// The trivia provider could not deliver a batch of questions.
    Fetch(FetchError),
    /// The trivia provider did not respond in time.
    Timeout,
    /// The trivia provider delivered a different number of questions than requested.
    ShortBatch { expected: usize, found: usize },
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnswer => f.write_str("The correct answer is missing from the answer options."),
            Self::Fetch(err) => write!(f, "Failed to fetch questions: {err}"),
            Self::Timeout => f.write_str("Timed out while fetching questions."),
            Self::ShortBatch { expected, found } => {
                write!(f, "Expected {expected} questions from the provider but received {found}.")
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
