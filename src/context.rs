use crate::config::INITIAL_FLOOR;
use crate::queue::{OrderedStops, StopSet};
use crate::types::request::{Direction, Request};

/// Whether the car has just turned around. This is a distinct state rather
/// than a plain flag: the up pass only snaps back to its lowest stop once the
/// car has `Settled`, while the down pass only snaps to its highest stop when
/// it has `JustReversed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reversal {
    JustReversed,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchState {
    pub current_floor: u8,
    pub direction: Direction,
    pub reversal: Reversal,
}

impl Default for DispatchState {
    fn default() -> Self {
        DispatchState {
            current_floor: INITIAL_FLOOR,
            direction: Direction::Up,
            reversal: Reversal::JustReversed,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DispatchContext<Q = StopSet> {
    pub state: DispatchState,
    pub up_stops: Q,
    pub down_stops: Q,
}

impl<Q: OrderedStops> DispatchContext<Q> {
    pub fn stops_mut(&mut self, direction: Direction) -> &mut Q {
        match direction {
            Direction::Up => &mut self.up_stops,
            Direction::Down => &mut self.down_stops,
        }
    }

    /// Splits a request into its two raw stops. Which passenger asked for
    /// which stop is not kept.
    pub fn enqueue_request(&mut self, request: &Request) {
        let stops = self.stops_mut(request.direction);
        stops.insert(request.origin);
        stops.insert(request.destination);
    }

    pub fn has_pending(&self) -> bool {
        !self.up_stops.is_empty() || !self.down_stops.is_empty()
    }
}
