use async_trait::async_trait;
use std::fmt;
use std::fmt::Display;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::mpsc::UnboundedSender;

use crate::types::event::SweepEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Event(SweepEvent),
    Diagnostic(String),
}

impl Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Event(event) => write!(f, "{event}"),
            Output::Diagnostic(message) => write!(f, "{message}"),
        }
    }
}

#[async_trait]
pub trait OutputSink: Send + Sync + 'static {
    async fn emit(&self, output: Output) -> anyhow::Result<()>;
}

#[async_trait]
impl OutputSink for UnboundedSender<Output> {
    async fn emit(&self, output: Output) -> anyhow::Result<()> {
        self.send(output)?;
        Ok(())
    }
}

pub struct StdoutSink {
    stdout: tokio::sync::Mutex<Stdout>,
}

impl StdoutSink {
    pub fn new() -> Self {
        StdoutSink {
            stdout: tokio::sync::Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputSink for StdoutSink {
    async fn emit(&self, output: Output) -> anyhow::Result<()> {
        let mut stdout = self.stdout.lock().await;
        stdout.write_all(format!("{output}\n").as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}
