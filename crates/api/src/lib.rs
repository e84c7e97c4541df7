pub mod error;
pub mod fetcher;
pub mod quiz;

pub use db::{GameStore, Provider};
pub use fetcher::OpenTrivia;
pub use quiz::Quiz;

use error::{Error, Result};
use http_body_util::{BodyExt, Full};
use hyper::{
    body::{Body, Bytes},
    header::{HeaderValue, CONTENT_TYPE},
    Method, Request, Response, StatusCode,
};
use model::wire::{AnswerRequest, Message, QuestionRequest, StartRequest, StartResponse};
use serde::{de::DeserializeOwned, Serialize};

pub const APPLICATION_JSON: &str = "application/json";
const WELCOME: &str = "Hello, welcome to Quiz Game!";

/// HTTP front of the quiz.
pub struct Service<P> {
    quiz: Quiz<P>,
    /// Whether the store dumps at `/quizzes` and `/users` are exposed.
    debug: bool,
}

impl<P> Service<P> {
    pub const fn new(quiz: Quiz<P>, debug: bool) -> Self {
        Self { quiz, debug }
    }
}

impl<P: Provider + Sync> Service<P> {
    /// Like [`Self::try_respond`], but renders errors as JSON messages.
    pub async fn respond<B: Body>(&self, req: Request<B>) -> Response<Full<Bytes>> {
        let err = match self.try_respond(req).await {
            Ok(res) => return res,
            Err(err) => err,
        };

        let text = err.to_string();
        json(err.status(), &Message { message: &text }).unwrap_or_else(|_| {
            let mut res = Response::new(Full::default());
            *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            res
        })
    }

    pub async fn try_respond<B: Body>(&self, req: Request<B>) -> Result<Response<Full<Bytes>>> {
        let (parts, body) = req.into_parts();
        match (&parts.method, parts.uri.path()) {
            (&Method::GET, "/") => json(StatusCode::OK, &WELCOME),
            (&Method::POST, "/start") => {
                let StartRequest { uid } = parse(body).await?;
                let gid = self.quiz.start_game(&uid).await?;
                json(StatusCode::CREATED, &StartResponse { gid })
            }
            (&Method::GET, "/question") => {
                let QuestionRequest { gid } = parse(body).await?;
                json(StatusCode::OK, &self.quiz.get_next_question(gid))
            }
            (&Method::POST, "/answer") => {
                let AnswerRequest { qid, answer } = parse(body).await?;
                json(StatusCode::OK, &self.quiz.answer_question(qid, answer)?)
            }
            (&Method::GET, "/quizzes") if self.debug => json(StatusCode::OK, &self.quiz.games().all_games()),
            (&Method::GET, "/users") if self.debug => json(StatusCode::OK, &self.quiz.users().all_users()),
            (_, "/" | "/start" | "/question" | "/answer") => Err(Error::MethodNotAllowed),
            _ => Err(Error::NotFound),
        }
    }
}

async fn parse<B: Body, T: DeserializeOwned>(body: B) -> Result<T> {
    let bytes = body.collect().await.map_err(|_| Error::BadRequest)?.to_bytes();
    serde_json::from_slice(&bytes).map_err(|_| Error::BadRequest)
}

fn json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Result<Response<Full<Bytes>>> {
    let bytes = serde_json::to_vec(value).map_err(|_| Error::Fatal)?;
    let mut res = Response::new(Full::new(Bytes::from(bytes)));
    *res.status_mut() = status;
    assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON)).is_none());
    Ok(res)
}
