use tracing::debug;

use crate::context::{DispatchContext, Reversal};
use crate::queue::OrderedStops;
use crate::strategy::Strategy;
use crate::types::request::Direction;

/// Two-direction sweep. The car serves every stop ahead of it in its
/// current direction and turns around when none remain.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanStrategy;

impl ScanStrategy {
    pub fn new() -> Self {
        ScanStrategy
    }

    fn candidate<Q: OrderedStops>(ctx: &DispatchContext<Q>, direction: Direction) -> Option<u8> {
        let current = ctx.state.current_floor;
        let (stops, nearest, snaps) = match direction {
            Direction::Up => (
                &ctx.up_stops,
                ctx.up_stops.ceiling(current),
                ctx.state.reversal == Reversal::Settled,
            ),
            Direction::Down => (
                &ctx.down_stops,
                ctx.down_stops.floor(current),
                ctx.state.reversal == Reversal::JustReversed,
            ),
        };
        if snaps && nearest.is_none_or(|floor| floor == current) {
            let extreme = match direction {
                Direction::Up => stops.min(),
                Direction::Down => stops.max(),
            };
            if extreme.is_some() {
                return extreme;
            }
        }
        nearest
    }

    fn take<Q: OrderedStops>(ctx: &mut DispatchContext<Q>, direction: Direction) -> Option<u8> {
        let floor = Self::candidate(ctx, direction)?;
        ctx.stops_mut(direction).remove(floor);
        debug!(floor, %direction, from = ctx.state.current_floor, "stop selected");
        Some(floor)
    }

    fn reverse<Q: OrderedStops>(ctx: &mut DispatchContext<Q>, direction: Direction, reversal: Reversal) {
        debug!(%direction, ?reversal, floor = ctx.state.current_floor, "reversing");
        ctx.state.direction = direction;
        ctx.state.reversal = reversal;
    }
}

impl<Q: OrderedStops> Strategy<Q> for ScanStrategy {
    fn next_floor(&self, ctx: &mut DispatchContext<Q>) -> u8 {
        let started_up = ctx.state.direction == Direction::Up;

        if started_up {
            if let Some(floor) = Self::take(ctx, Direction::Up) {
                return floor;
            }
            let turned = ctx.state.direction.flipped();
            Self::reverse(ctx, turned, Reversal::JustReversed);
        }

        if let Some(floor) = Self::take(ctx, Direction::Down) {
            return floor;
        }
        let turned = ctx.state.direction.flipped();
        Self::reverse(ctx, turned, Reversal::Settled);

        // a call that started going down gets one look upward; a call that
        // already tried both directions stays put
        if !started_up {
            if let Some(floor) = Self::take(ctx, Direction::Up) {
                return floor;
            }
        }
        ctx.state.current_floor
    }
}
