use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::Mutex;
use tower::Service;

use crate::elevator::{Elevator, Submission};
use crate::output::{Output, OutputSink};
use crate::types::request::RawRequest;

/// Submits parsed batches to one shared elevator and runs the sweep when a
/// batch is accepted. Batches are serialised on the elevator lock.
pub struct DispatchService {
    elevator: Arc<Mutex<Elevator>>,
    sink: Arc<dyn OutputSink>,
}

impl DispatchService {
    pub fn new(elevator: Arc<Mutex<Elevator>>, sink: Arc<dyn OutputSink>) -> Self {
        DispatchService { elevator, sink }
    }
}

impl Service<Vec<RawRequest>> for DispatchService {
    type Response = ();
    type Error = anyhow::Error;
    type Future = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, batch: Vec<RawRequest>) -> Self::Future {
        let elevator = Arc::clone(&self.elevator);
        let sink = Arc::clone(&self.sink);

        Box::pin(async move {
            let output = {
                let mut elevator = elevator.lock().await;
                match elevator.submit(&batch) {
                    Submission::Rejected(messages) => {
                        messages.into_iter().map(Output::Diagnostic).collect()
                    }
                    Submission::Accepted(_) => {
                        elevator.sweep().into_iter().map(Output::Event).collect::<Vec<_>>()
                    }
                }
            };
            for line in output {
                sink.emit(line).await?;
            }
            Ok(())
        })
    }
}
