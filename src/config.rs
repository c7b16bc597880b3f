use clap::{Parser, ValueEnum};

use crate::errors::{BatchErrors, ErrorScope, LifetimeErrors};

pub const MIN_FLOOR: u8 = 0;
pub const MAX_FLOOR: u8 = 10;
pub const INITIAL_FLOOR: u8 = MIN_FLOOR;

pub const GREETING: &str = "Enter commands as {floor,direction,destination}[] or type 'exit' to quit:";
pub const PROMPT: &str = "> ";
pub const FAREWELL: &str = "Exiting... Goodbye!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorScopeKind {
    /// Diagnostics are never cleared; one bad batch blocks all later ones.
    #[default]
    Lifetime,
    /// Diagnostics only apply to the batch that produced them.
    Batch,
}

impl ErrorScopeKind {
    pub fn build(self) -> Box<dyn ErrorScope> {
        match self {
            ErrorScopeKind::Lifetime => Box::new(LifetimeErrors::default()),
            ErrorScopeKind::Batch => Box::new(BatchErrors::default()),
        }
    }
}

/// Single-car sweep elevator simulator.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// How long field-validation errors are kept
    #[arg(long, value_enum, default_value_t = ErrorScopeKind::Lifetime)]
    pub error_scope: ErrorScopeKind,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
