//! Per-frame phase advance
//!
//! One external tick function drives whichever gameplay phase is active
//! (charge, flight, or fall) and the camera follow, which runs
//! regardless. All state mutation for a frame happens inside [`tick`];
//! the host issues its redraw afterward.

use super::fall::{FallAnim, FallOutcome};
use super::landing::{LandingOutcome, classify};
use super::platforms::spawn_platform;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Whether the charge gesture is currently held
    pub held: bool,
}

/// What a phase tick did with its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The phase wants the next frame too
    Continue,
    /// The phase finished this frame
    Done,
}

/// Advance the session by one display frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Idle => {
            if input.held {
                state.phase = GamePhase::Charging;
                charge_tick(state);
            }
        }
        GamePhase::Charging => {
            if input.held {
                charge_tick(state);
            } else {
                // Release: the first airborne step happens on this frame.
                state.phase = GamePhase::Flying;
                flight_tick(state);
            }
        }
        GamePhase::Flying => {
            if flight_tick(state) == Progress::Done {
                resolve_landing(state, &mut events);
            }
        }
        GamePhase::Falling(mut anim) => match anim.tick(&mut state.actor) {
            Progress::Continue => state.phase = GamePhase::Falling(anim),
            Progress::Done => {
                state.phase = GamePhase::Settled;
                events.push(GameEvent::Fell);
            }
        },
        GamePhase::Settled => {}
    }

    state.camera.tick();
    events
}

/// One charge tick: squash the actor and its platform, bank velocity.
///
/// Scale compression clamps at the floor but velocity keeps
/// accumulating, so arbitrarily long holds launch arbitrarily far.
fn charge_tick(state: &mut GameState) {
    let actor = &mut state.actor;
    actor.scale.y = (actor.scale.y - CHARGE_COMPRESSION).max(SCALE_FLOOR);
    actor.x_speed += CHARGE_X_ACCEL;
    actor.y_speed += CHARGE_Y_ACCEL;

    if let Some(platform) = state.platforms.current_mut() {
        platform.scale.y = (platform.scale.y - CHARGE_COMPRESSION).max(SCALE_FLOOR);
    }
}

/// One flight tick: restore squashed scales and integrate the arc.
///
/// Ground contact snaps the actor to its rest pose and hands the frame
/// to the landing classifier.
fn flight_tick(state: &mut GameState) -> Progress {
    if state.actor.pos.y < ACTOR_REST_HEIGHT {
        let actor = &mut state.actor;
        actor.x_speed = 0.0;
        actor.y_speed = 0.0;
        actor.pos.y = ACTOR_REST_HEIGHT;
        actor.scale.y = 1.0;
        return Progress::Done;
    }

    let actor = &mut state.actor;
    if actor.scale.y < 1.0 {
        actor.scale.y += ACTOR_SCALE_RESTORE;
    }
    if let Some(platform) = state.platforms.current_mut() {
        if platform.scale.y < 1.0 {
            platform.scale.y += PLATFORM_SCALE_RESTORE;
        }
    }

    let actor = &mut state.actor;
    state.direction.advance(&mut actor.pos, actor.x_speed);
    actor.pos.y += actor.y_speed;
    actor.y_speed -= GRAVITY_DECAY;
    Progress::Continue
}

/// Route a grounded actor to scoring, a retry, or the fall animation
fn resolve_landing(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let (landing, actor_coord, current_coord, next_coord) = {
        let (current, next) = state.platforms.active_pair();
        (
            classify(&state.actor, current, next, state.direction, &state.config),
            state.direction.coord(state.actor.pos),
            state.direction.coord(current.pos),
            state.direction.coord(next.pos),
        )
    };
    log::debug!("landed: {:?} at distance {:.2}", landing.outcome, landing.distance);

    if landing.outcome == LandingOutcome::CenterNext {
        state.score += 1;
        spawn_platform(state, events);
        events.push(GameEvent::Landed { score: state.score });
        state.phase = GamePhase::Idle;
        return;
    }

    match FallOutcome::classify(landing.outcome, actor_coord, current_coord, next_coord) {
        Some(outcome) => {
            state.phase = GamePhase::Falling(FallAnim::new(
                outcome,
                state.direction,
                landing.distance,
                &state.config,
            ));
        }
        // Came down on the launch platform: no score, free retry.
        None => state.phase = GamePhase::Idle,
    }
}
