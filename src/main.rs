use api::{GameStore, OpenTrivia, Quiz, Service};
use hyper::{server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use std::{
    convert::Infallible,
    env,
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
    time::Duration,
};
use tokio::{net::TcpListener, runtime::Runtime};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse environment variables
    let port: u16 = match env::var("PORT") {
        Ok(port) => port.parse()?,
        _ => 3000,
    };
    let endpoint = env::var("TRIVIA_URL").map_or_else(|_| OpenTrivia::ENDPOINT.into(), String::into_boxed_str);
    let timeout = match env::var("TRIVIA_TIMEOUT") {
        Ok(secs) => Duration::from_secs(secs.parse()?),
        _ => GameStore::DEFAULT_TIMEOUT,
    };
    let debug = env::var_os("TRIVIA_DEBUG").is_some();

    // Initialize service handler
    let provider = OpenTrivia::new(endpoint, timeout)?;
    let quiz = Quiz::new(provider, GameStore::new(GameStore::BATCH_SIZE, timeout));
    let service = Arc::new(Service::new(quiz, debug));
    if debug {
        log::warn!("debug routes /quizzes and /users are enabled");
    }

    let runtime = Runtime::new()?;
    runtime.block_on(async {
        let addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, port).into();
        let listener = TcpListener::bind(addr).await?;
        log::info!("listening on {addr}");

        let mut stop = core::pin::pin!(tokio::signal::ctrl_c());
        loop {
            let (stream, peer) = tokio::select! {
                biased;
                res = &mut stop => {
                    res?;
                    log::info!("shutting down");
                    break;
                }
                res = listener.accept() => res?,
            };

            let outer = service.clone();
            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let handler = service_fn(move |req| {
                    let inner = outer.clone();
                    async move { Ok::<_, Infallible>(inner.respond(req).await) }
                });
                if let Err(err) = http1::Builder::new().serve_connection(io, handler).await {
                    log::error!("connection with {peer} failed: {err}");
                }
            });
        }

        anyhow::Ok(())
    })
}
