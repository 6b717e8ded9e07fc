//! Turn-by-turn delivery plan generation.
//!
//! The planner optimizes the delivery order, routes each consecutive leg of
//! `depot → d₁ → … → dₙ → depot`, and flattens the per-leg segment lists
//! into navigation commands:
//!
//! - consecutive segments sharing a street name collapse into one Proceed
//!   whose distance accumulates;
//! - a name change emits the pending Proceed, then a Turn — unless the turn
//!   angle is within 1° of straight, in which case the Turn is suppressed;
//! - each non-final leg ends with a Deliver naming that stop's item.
//!
//! A Turn carries no distance: the Proceed that follows it carries the new
//! street's full accumulated distance.

use tracing::debug;

use courier_core::{
    CompassDirection, CourierResult, CourierRng, DeliveryCommand, DeliveryRequest, GeoCoord,
    StreetSegment, TurnDirection,
};
use courier_map::{AStarRouter, Router, StreetMap};

use crate::optimizer::TourOptimizer;

// ── Plan ──────────────────────────────────────────────────────────────────────

/// A complete delivery plan: navigation commands plus the true driven
/// distance (sum of per-leg router costs, not the crow estimate).
#[derive(Debug, Clone)]
pub struct Plan {
    pub commands: Vec<DeliveryCommand>,
    pub total_miles: f64,
}

// ── DeliveryPlanner ───────────────────────────────────────────────────────────

/// Generates delivery plans over a street map.
///
/// Generic over the routing engine so tests (or future engines) can swap
/// the router out; production uses [`AStarRouter`].
pub struct DeliveryPlanner<R = AStarRouter> {
    router: R,
    optimizer: TourOptimizer,
}

impl DeliveryPlanner<AStarRouter> {
    pub fn new() -> DeliveryPlanner<AStarRouter> {
        DeliveryPlanner::with_router(AStarRouter)
    }
}

impl Default for DeliveryPlanner<AStarRouter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Router> DeliveryPlanner<R> {
    pub fn with_router(router: R) -> DeliveryPlanner<R> {
        DeliveryPlanner {
            router,
            optimizer: TourOptimizer::new(),
        }
    }

    /// Produce a [`Plan`] visiting every delivery and returning to the
    /// depot.  The caller's slice is not reordered; the optimizer works on
    /// a copy.
    ///
    /// # Errors
    ///
    /// Propagates the router's `BadCoord` / `NoRoute` unchanged.
    pub fn plan(
        &self,
        map: &StreetMap,
        depot: &GeoCoord,
        deliveries: &[DeliveryRequest],
        rng: &mut CourierRng,
    ) -> CourierResult<Plan> {
        let mut ordered = deliveries.to_vec();
        self.optimizer.optimize(depot, &mut ordered, rng);

        // Route every leg before emitting anything, so a failing leg
        // surfaces its error without a half-built command list.
        let mut legs = Vec::with_capacity(ordered.len() + 1);
        let mut total_miles = 0.0;
        let mut from = depot;
        for delivery in &ordered {
            let route = self.router.route(map, from, &delivery.location)?;
            total_miles += route.miles;
            legs.push(route);
            from = &delivery.location;
        }
        let route = self.router.route(map, from, depot)?;
        total_miles += route.miles;
        legs.push(route);

        let mut commands = Vec::new();
        for (i, leg) in legs.iter().enumerate() {
            emit_leg(&mut commands, &leg.segments);
            if let Some(delivery) = ordered.get(i) {
                commands.push(DeliveryCommand::Deliver {
                    item: delivery.item.clone(),
                });
            }
        }

        debug!(
            legs = legs.len(),
            commands = commands.len(),
            total_miles,
            "generated delivery plan"
        );
        Ok(Plan {
            commands,
            total_miles,
        })
    }
}

// ── Leg emission ──────────────────────────────────────────────────────────────

/// Flatten one leg's segment list into commands, appending to `out`.
fn emit_leg(out: &mut Vec<DeliveryCommand>, segments: &[StreetSegment]) {
    let mut pending: Option<DeliveryCommand> = None;
    let mut last: Option<&StreetSegment> = None;

    for seg in segments {
        match last {
            Some(prev) if prev.name == seg.name => {
                if let Some(DeliveryCommand::Proceed { miles, .. }) = pending.as_mut() {
                    *miles += seg.length_miles();
                }
            }
            Some(prev) => {
                if let Some(cmd) = pending.take() {
                    out.push(cmd);
                }
                if let Some(direction) = TurnDirection::from_angle(prev.turn_angle(seg)) {
                    out.push(DeliveryCommand::Turn {
                        direction,
                        street: seg.name.clone(),
                    });
                }
                pending = Some(proceed_onto(seg));
            }
            None => pending = Some(proceed_onto(seg)),
        }
        last = Some(seg);
    }

    if let Some(cmd) = pending {
        out.push(cmd);
    }
}

fn proceed_onto(seg: &StreetSegment) -> DeliveryCommand {
    DeliveryCommand::Proceed {
        direction: CompassDirection::from_bearing(seg.bearing()),
        street: seg.name.clone(),
        miles: seg.length_miles(),
    }
}
