use core::fmt::{self, Display};
use hyper::StatusCode;

#[derive(Debug)]
pub enum Error {
    /// The request body is not the expected JSON.
    BadRequest,
    /// No such route.
    NotFound,
    /// The route exists but not for this method.
    MethodNotAllowed,
    /// The question ID does not refer to any known question.
    UnknownQuestion,
    /// A new game could not be created. Safe to retry.
    GameCreation(db::error::Error),
    /// Unrecoverable error on our end.
    Fatal,
}

impl Error {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::UnknownQuestion => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::GameCreation(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Fatal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<db::error::Error> for Error {
    fn from(err: db::error::Error) -> Self {
        Self::GameCreation(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BadRequest => "Malformed request body.",
            Self::NotFound => "Resource not found.",
            Self::MethodNotAllowed => "Method not allowed.",
            Self::UnknownQuestion => "Sorry, this is not a valid question id",
            Self::GameCreation(_) => "Sorry, we could not create a new game right now. Please try again.",
            Self::Fatal => "Oops! We have encountered an unrecoverable error on our end.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
