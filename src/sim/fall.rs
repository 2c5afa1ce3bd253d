//! Topple-and-drop animation for failed landings
//!
//! An edge landing tips the actor over the side it overhangs: rotate a
//! quarter turn about the axis perpendicular to the travel direction,
//! then sink to a rest height that is lower the further past the edge
//! the actor came down. A clean miss skips the rotation and drops
//! straight to the floor. The machine only moves forward:
//! toppling -> dropping -> settled.

use serde::{Deserialize, Serialize};

use super::landing::LandingOutcome;
use super::state::{Actor, TravelDirection};
use super::tick::Progress;
use crate::config::Config;
use crate::consts::{FALL_STEP, TOPPLE_LIMIT, TOPPLE_STEP};

/// Guard against f32 step accumulation when comparing against the rest height
const SETTLE_EPSILON: f32 = 1e-4;

/// How a failed landing plays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallOutcome {
    /// Overhanging the launch platform on the side the actor came from
    ToppleCurrentNear,
    /// Overhanging the launch platform toward the next platform
    ToppleCurrentFar,
    /// Overhanging the next platform after falling short
    ToppleNextNear,
    /// Overhanging the next platform after overshooting it
    ToppleNextFar,
    /// Touching nothing; fall straight down
    DropStraight,
}

impl FallOutcome {
    /// Derive the fall from a failed landing and the actor's side of the
    /// platform it overhangs. Returns `None` for outcomes that do not
    /// fall (the actor came fully down on a platform).
    pub fn classify(
        landing: LandingOutcome,
        actor_coord: f32,
        current_coord: f32,
        next_coord: f32,
    ) -> Option<Self> {
        match landing {
            LandingOutcome::CenterCurrent | LandingOutcome::CenterNext => None,
            LandingOutcome::EdgeCurrent => Some(if actor_coord < current_coord {
                FallOutcome::ToppleCurrentFar
            } else {
                FallOutcome::ToppleCurrentNear
            }),
            LandingOutcome::EdgeNext => Some(if actor_coord < next_coord {
                FallOutcome::ToppleNextFar
            } else {
                FallOutcome::ToppleNextNear
            }),
            LandingOutcome::Miss => Some(FallOutcome::DropStraight),
        }
    }
}

/// The rotation axis a topple turns about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationAxis {
    X,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Topple {
    axis: RotationAxis,
    /// Signed per-tick rotation
    step: f32,
    /// Signed rotation at which the topple ends
    limit: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FallStage {
    Toppling(Topple),
    Dropping,
    Settled,
}

/// Forward-only fall state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallAnim {
    stage: FallStage,
    /// Height the drop stops at
    falling_to: f32,
}

impl FallAnim {
    pub fn new(
        outcome: FallOutcome,
        direction: TravelDirection,
        distance: f32,
        config: &Config,
    ) -> Self {
        let forward = match outcome {
            FallOutcome::DropStraight => {
                return Self {
                    stage: FallStage::Dropping,
                    falling_to: config.ground,
                };
            }
            FallOutcome::ToppleCurrentFar | FallOutcome::ToppleNextFar => true,
            FallOutcome::ToppleCurrentNear | FallOutcome::ToppleNextNear => false,
        };

        // The deeper past the edge, the lower the actor comes to rest.
        let overhang = distance - config.platform_half_width();
        let falling_to = config.ground + config.actor_width / 2.0 + overhang;

        // Travel along X rotates about Z and vice versa; the sign tips
        // the actor toward the overhung side.
        let (axis, sign) = match direction {
            TravelDirection::AlongX => (RotationAxis::Z, if forward { 1.0 } else { -1.0 }),
            TravelDirection::AlongZ => (RotationAxis::X, if forward { -1.0 } else { 1.0 }),
        };

        Self {
            stage: FallStage::Toppling(Topple {
                axis,
                step: sign * TOPPLE_STEP,
                limit: sign * TOPPLE_LIMIT,
            }),
            falling_to,
        }
    }

    /// Advance one frame of the fall
    pub fn tick(&mut self, actor: &mut Actor) -> Progress {
        if let FallStage::Toppling(topple) = self.stage {
            let rotation = axis_rotation(actor, topple.axis);
            let reached = if topple.step > 0.0 {
                *rotation >= topple.limit
            } else {
                *rotation <= topple.limit
            };
            if !reached {
                *rotation += topple.step;
                return Progress::Continue;
            }
            // Limit reached; the drop begins on this same tick.
            self.stage = FallStage::Dropping;
        }

        if self.stage == FallStage::Settled {
            return Progress::Done;
        }

        actor.pos.y -= FALL_STEP;
        if actor.pos.y <= self.falling_to + SETTLE_EPSILON {
            self.stage = FallStage::Settled;
            Progress::Done
        } else {
            Progress::Continue
        }
    }
}

fn axis_rotation(actor: &mut Actor, axis: RotationAxis) -> &mut f32 {
    match axis {
        RotationAxis::X => &mut actor.rotation.x,
        RotationAxis::Z => &mut actor.rotation.z,
    }
}
