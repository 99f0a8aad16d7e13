//! Edge weights for flights.
//!
//! The router never computes costs itself; it asks a [`CostModel`] for the
//! weight of every flight it relaxes. [`SizeClassCost`] is the standard model
//! and the one used by [`plan_route`](crate::plan_route).

use crate::airport::{Airport, SizeClass};

/// Maps a flight between two resolved airports to a non-negative scalar cost.
pub trait CostModel {
    /// Cost of flying `aircraft` from `from` to `to`.
    ///
    /// Implementations must return a finite, non-negative value so that
    /// Dijkstra's algorithm stays correct.
    fn flight_cost(&self, from: &Airport, to: &Airport, aircraft: SizeClass) -> f64;
}

/// Distance scaled by the aircraft multiplier and the summed endpoint
/// multipliers.
///
/// `cost = distance * m(aircraft) * (m(from.class) + m(to.class))` with
/// `m` given by [`SizeClass::multiplier`]. Larger airports at either end raise
/// the cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeClassCost;

impl CostModel for SizeClassCost {
    fn flight_cost(&self, from: &Airport, to: &Airport, aircraft: SizeClass) -> f64 {
        let distance = from.location.distance_to(&to.location);
        let airport_multiplier = from.class.multiplier() + to.class.multiplier();
        distance * aircraft.multiplier() * airport_multiplier
    }
}

impl<C: CostModel + ?Sized> CostModel for &C {
    fn flight_cost(&self, from: &Airport, to: &Airport, aircraft: SizeClass) -> f64 {
        (**self).flight_cost(from, to, aircraft)
    }
}
