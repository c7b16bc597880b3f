use tracing::{info, warn};

use crate::context::{DispatchContext, DispatchState};
use crate::errors::{ErrorScope, LifetimeErrors};
use crate::queue::{OrderedStops, StopSet};
use crate::strategies::scan::ScanStrategy;
use crate::strategy::Strategy;
use crate::types::event::SweepEvent;
use crate::types::request::RawRequest;
use crate::validation::describe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Number of triples whose stops were merged into the queues.
    Accepted(usize),
    /// Every diagnostic currently held by the error scope.
    Rejected(Vec<String>),
}

/// A single car: its pending stops, where it is, and how it picks the next
/// stop. State carries over from one batch to the next.
#[derive(Debug)]
pub struct Elevator<ST = ScanStrategy> {
    ctx: DispatchContext<StopSet>,
    strategy: ST,
    errors: Box<dyn ErrorScope>,
}

impl Default for Elevator<ScanStrategy> {
    fn default() -> Self {
        Elevator::new(ScanStrategy::new(), Box::new(LifetimeErrors::default()))
    }
}

impl<ST: Strategy<StopSet>> Elevator<ST> {
    pub fn new(strategy: ST, errors: Box<dyn ErrorScope>) -> Self {
        Elevator {
            ctx: DispatchContext::default(),
            strategy,
            errors,
        }
    }

    pub fn state(&self) -> &DispatchState {
        &self.ctx.state
    }

    pub fn context(&self) -> &DispatchContext<StopSet> {
        &self.ctx
    }

    pub fn has_pending(&self) -> bool {
        self.ctx.has_pending()
    }

    /// Validates a batch and, if the error scope is clean afterwards, merges
    /// every triple's stops into the queues. Nothing from the batch is kept
    /// when any error is held, including its valid triples.
    pub fn submit(&mut self, batch: &[RawRequest]) -> Submission {
        self.errors.begin_batch();
        let mut staged = DispatchContext::<StopSet>::default();
        let mut accepted = 0;

        for raw in batch {
            match raw.validate() {
                Ok(request) => {
                    staged.enqueue_request(&request);
                    accepted += 1;
                }
                Err(errors) => self.errors.record(describe(&raw.source, &errors)),
            }
        }

        if self.errors.has_errors() {
            let messages = self.errors.messages();
            warn!(batch = batch.len(), held = messages.len(), "batch rejected");
            return Submission::Rejected(messages);
        }

        self.ctx.up_stops.merge(&staged.up_stops);
        self.ctx.down_stops.merge(&staged.down_stops);
        info!(
            accepted,
            up = self.ctx.up_stops.len(),
            down = self.ctx.down_stops.len(),
            "batch accepted"
        );
        Submission::Accepted(accepted)
    }

    /// Drains every pending stop, returning the moves and door openings in
    /// the order they happen.
    pub fn sweep(&mut self) -> Vec<SweepEvent> {
        let mut events = Vec::new();
        let mut first_decision = true;

        while self.ctx.has_pending() {
            let next = self.strategy.next_floor(&mut self.ctx);
            let current = self.ctx.state.current_floor;
            if next != current {
                events.push(SweepEvent::Move {
                    from: current,
                    to: next,
                });
                self.ctx.state.current_floor = next;
                events.push(SweepEvent::DoorsOpen(next));
            } else if first_decision {
                // already parked at a requested floor
                events.push(SweepEvent::DoorsOpen(current));
            }
            first_decision = false;
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BatchErrors;

    fn lines(events: &[SweepEvent]) -> Vec<String> {
        events.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn sweep_with_nothing_pending_is_silent() {
        let mut elevator = Elevator::default();
        assert!(elevator.sweep().is_empty());
        assert!(elevator.sweep().is_empty());
    }

    #[test]
    fn up_request_from_ground() {
        let mut elevator = Elevator::default();
        assert_eq!(
            elevator.submit(&[RawRequest::new(0, "up", 3)]),
            Submission::Accepted(1)
        );
        assert_eq!(
            lines(&elevator.sweep()),
            vec![
                "Opening doors on the ground floor.",
                "Elevator moving from the ground floor to the 3rd floor.",
                "Opening doors on the 3rd floor.",
            ]
        );
        assert_eq!(elevator.state().current_floor, 3);
        assert!(!elevator.has_pending());
    }

    #[test]
    fn down_request_from_ground() {
        let mut elevator = Elevator::default();
        elevator.submit(&[RawRequest::new(2, "down", 1)]);
        assert_eq!(
            elevator.sweep(),
            vec![
                SweepEvent::Move { from: 0, to: 2 },
                SweepEvent::DoorsOpen(2),
                SweepEvent::Move { from: 2, to: 1 },
                SweepEvent::DoorsOpen(1),
            ]
        );
    }

    #[test]
    fn accepted_batch_merges_into_queues() {
        let mut elevator = Elevator::default();
        let outcome = elevator.submit(&[
            RawRequest::new(1, "up", 4),
            RawRequest::new(6, "down", 2),
            RawRequest::new(4, "up", 8),
        ]);
        assert_eq!(outcome, Submission::Accepted(3));
        assert_eq!(elevator.context().up_stops.len(), 3);
        assert_eq!(elevator.context().down_stops.len(), 2);
        assert_eq!(elevator.context().up_stops.min(), Some(1));
        assert_eq!(elevator.context().down_stops.max(), Some(6));
    }

    #[test]
    fn rejected_batch_keeps_queues_untouched() {
        let mut elevator = Elevator::default();
        let outcome = elevator.submit(&[RawRequest::new(0, "up", 3), RawRequest::new(3, "up", 2)]);
        assert_eq!(
            outcome,
            Submission::Rejected(vec![
                "Error for {3,'up',2}: Destination must be above the onboarding floor for 'up' requests"
                    .to_string()
            ])
        );
        assert!(!elevator.has_pending());
        assert!(elevator.sweep().is_empty());
    }

    #[test]
    fn batch_scope_recovers_after_an_error() {
        let mut elevator = Elevator::new(ScanStrategy, Box::new(BatchErrors::default()));
        assert!(matches!(
            elevator.submit(&[RawRequest::new(5, "down", 7)]),
            Submission::Rejected(_)
        ));
        assert_eq!(
            elevator.submit(&[RawRequest::new(1, "up", 2)]),
            Submission::Accepted(1)
        );
        assert_eq!(elevator.sweep().len(), 4);
    }
}
