use core::{
    fmt::{self, Display},
    future::Future,
};
use model::Candidate;

#[derive(Debug)]
pub enum FetchError {
    /// Connection-level failure (DNS, TLS, reset, ...).
    Transport,
    /// Non-success HTTP status from the provider.
    Status(u16),
    /// The provider responded but reported a failure in its payload.
    Upstream(u8),
    /// The response body could not be decoded.
    Payload,
}

impl Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => f.write_str("the trivia provider is unreachable."),
            Self::Status(code) => write!(f, "the trivia provider responded with HTTP status {code}."),
            Self::Upstream(code) => write!(f, "the trivia provider reported response code {code}."),
            Self::Payload => f.write_str("the trivia provider sent a malformed payload."),
        }
    }
}

/// Source of candidate questions for new games.
pub trait Provider {
    /// Fetches exactly `amount` candidate questions.
    fn fetch(&self, amount: usize) -> impl Future<Output = Result<Vec<Candidate>, FetchError>> + Send;
}
