use core::{future::Future, time::Duration};
use db::{Candidate, FetchError, Provider};
use model::trivia::TriviaResponse;

/// Client for the Open Trivia Database.
pub struct OpenTrivia {
    client: reqwest::Client,
    endpoint: Box<str>,
}

impl OpenTrivia {
    pub const ENDPOINT: &'static str = "https://opentdb.com/api.php";

    pub fn new(endpoint: Box<str>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

impl Provider for OpenTrivia {
    fn fetch(&self, amount: usize) -> impl Future<Output = Result<Vec<Candidate>, FetchError>> + Send {
        async move {
            let res = self.client.get(&*self.endpoint).query(&[("amount", amount)]).send().await.map_err(|err| {
                log::warn!("trivia provider request failed: {err}");
                FetchError::Transport
            })?;

            let status = res.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let TriviaResponse { response_code, results } = res.json().await.map_err(|err| {
                log::warn!("trivia provider sent an undecodable body: {err}");
                FetchError::Payload
            })?;
            if response_code != 0 {
                return Err(FetchError::Upstream(response_code));
            }

            Ok(results)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OpenTrivia;
    use core::{convert::Infallible, time::Duration};
    use db::{FetchError, Provider};
    use http_body_util::Full;
    use hyper::{body::Bytes, server::conn::http1, service::service_fn, Response, StatusCode};
    use hyper_util::rt::TokioIo;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    type Queries = Arc<Mutex<Vec<String>>>;

    /// Spawns a local server answering every request with the same status and body. Returns a
    /// client pointed at it along with the query strings it has received.
    async fn serve(status: StatusCode, body: &'static str) -> (OpenTrivia, Queries) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let queries = Queries::default();

        let seen = queries.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let seen = seen.clone();
                let handler = service_fn(move |req: hyper::Request<hyper::body::Incoming>| {
                    seen.lock().unwrap().push(req.uri().query().unwrap_or_default().to_owned());
                    let mut res = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
                    *res.status_mut() = status;
                    core::future::ready(Ok::<_, Infallible>(res))
                });
                tokio::spawn(http1::Builder::new().serve_connection(TokioIo::new(stream), handler));
            }
        });

        let endpoint = format!("http://{addr}/api.php").into_boxed_str();
        (OpenTrivia::new(endpoint, Duration::from_secs(5)).unwrap(), queries)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn returns_candidates_of_good_payload() {
        let body = r#"{
            "response_code": 0,
            "results": [
                {
                    "type": "boolean",
                    "difficulty": "easy",
                    "category": "General Knowledge",
                    "question": "The sky is blue.",
                    "correct_answer": "True",
                    "incorrect_answers": ["False"]
                },
                {
                    "type": "multiple",
                    "difficulty": "medium",
                    "category": "Geography",
                    "question": "Capital of Peru?",
                    "correct_answer": "Lima",
                    "incorrect_answers": ["Quito", "Bogota", "Santiago"]
                }
            ]
        }"#;
        let (trivia, queries) = serve(StatusCode::OK, body).await;

        let candidates = trivia.fetch(2).await.unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].question, "The sky is blue.");
        assert_eq!(candidates[0].correct_answer, "True");
        assert_eq!(candidates[0].incorrect_answers, ["False"]);
        assert_eq!(candidates[1].correct_answer, "Lima");
        assert_eq!(candidates[1].incorrect_answers, ["Quito", "Bogota", "Santiago"]);

        assert_eq!(*queries.lock().unwrap(), ["amount=2"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn nonzero_response_code_is_upstream_failure() {
        let (trivia, _) = serve(StatusCode::OK, r#"{"response_code":1}"#).await;
        assert!(matches!(trivia.fetch(10).await, Err(FetchError::Upstream(1))));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn error_status_is_reported() {
        let (trivia, _) = serve(StatusCode::SERVICE_UNAVAILABLE, "try again later").await;
        assert!(matches!(trivia.fetch(10).await, Err(FetchError::Status(503))));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn undecodable_body_is_payload_failure() {
        let (trivia, _) = serve(StatusCode::OK, "<html>not json</html>").await;
        assert!(matches!(trivia.fetch(10).await, Err(FetchError::Payload)));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unreachable_provider_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = format!("http://{addr}/api.php").into_boxed_str();
        let trivia = OpenTrivia::new(endpoint, Duration::from_secs(5)).unwrap();
        assert!(matches!(trivia.fetch(10).await, Err(FetchError::Transport)));
    }
}
