pub mod config;
pub mod context;
pub mod elevator;
pub mod errors;
pub mod logging;
pub mod output;
pub mod parser;
pub mod queue;
pub mod strategy;
pub mod validation;

pub mod strategies {
    pub mod scan;
}

pub mod services {
    pub mod dispatch;
    pub mod parse;
}

pub mod types {
    pub mod event;
    pub mod request;
}

pub use elevator::{Elevator, Submission};
pub use strategies::scan::ScanStrategy;
pub use types::event::SweepEvent;
pub use types::request::{Direction, RawRequest, Request};
