use clap::Parser;
use scan_elevator::config::{Args, FAREWELL, GREETING, PROMPT};
use scan_elevator::output::{Output, OutputSink, StdoutSink};
use scan_elevator::services::dispatch::DispatchService;
use scan_elevator::services::parse::ParseLayer;
use scan_elevator::{Elevator, ScanStrategy, logging};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let elevator = Arc::new(Mutex::new(Elevator::new(
        ScanStrategy::new(),
        args.error_scope.build(),
    )));
    let sink: Arc<dyn OutputSink> = Arc::new(StdoutSink::new());

    let mut svc = ServiceBuilder::new()
        .layer(ParseLayer::new(sink.clone()))
        .service(DispatchService::new(elevator, sink.clone()));

    sink.emit(Output::Diagnostic(GREETING.to_string())).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.eq_ignore_ascii_case("exit") {
            break;
        }

        svc.ready().await?;
        if let Err(e) = svc.call(line).await {
            error!("batch failed: {e:#}");
        }
    }

    sink.emit(Output::Diagnostic(FAREWELL.to_string())).await?;
    Ok(())
}
