use std::pin::Pin;
use std::sync::Arc;
use std::task::Poll;
use tokio::sync::Mutex;
use tower::{Layer, Service};
use tracing::debug;

use crate::output::{Output, OutputSink};
use crate::parser::{FORMAT_ERROR, parse_batch};
use crate::types::request::RawRequest;

pub struct ParseService<S> {
    inner: Arc<Mutex<S>>,
    sink: Arc<dyn OutputSink>,
}

impl<S> ParseService<S> {
    fn new(inner: S, sink: Arc<dyn OutputSink>) -> Self {
        ParseService {
            inner: Arc::new(Mutex::new(inner)),
            sink,
        }
    }
}

impl<S> Service<String> for ParseService<S>
where
    S: Service<Vec<RawRequest>, Response = (), Error = anyhow::Error> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = ();
    type Error = anyhow::Error;
    type Future = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, line: String) -> Self::Future {
        let maybe_batch = parse_batch(&line);
        let inner = self.inner.clone();
        let sink = self.sink.clone();

        Box::pin(async move {
            match maybe_batch {
                Ok(batch) if batch.is_empty() => {
                    debug!("empty batch, nothing to submit");
                    Ok(())
                }
                Ok(batch) => inner.lock().await.call(batch).await,
                Err(e) => {
                    debug!("invalid batch {line:?}: {e:#}");
                    sink.emit(Output::Diagnostic(FORMAT_ERROR.to_string())).await
                }
            }
        })
    }
}

pub struct ParseLayer {
    sink: Arc<dyn OutputSink>,
}

impl ParseLayer {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl<S> Layer<S> for ParseLayer {
    type Service = ParseService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ParseService::new(inner, self.sink.clone())
    }
}
