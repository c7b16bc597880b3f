use crate::context::DispatchContext;
use crate::queue::OrderedStops;

/// Picks the next floor to visit. An implementation removes the stop it
/// picks from its queue; returning the current floor means nothing is
/// eligible.
pub trait Strategy<Q: OrderedStops> {
    fn next_floor(&self, ctx: &mut DispatchContext<Q>) -> u8;
}
