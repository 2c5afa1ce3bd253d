//! Block Hop - gameplay core for a jump-on-the-next-block arcade game
//!
//! Hold to charge a jump, release to launch the actor toward the next
//! platform, then classify the landing and animate the outcome.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (charge/flight physics, landing
//!   classification, fall animation, platform generation, camera follow)
//! - `session`: Host-facing orchestration (input surface, callbacks,
//!   rendering-collaborator dispatch)
//! - `stage`: Rendering collaborator interface
//! - `config`: Dimensions and layout tuning

pub mod config;
pub mod session;
pub mod sim;
pub mod stage;

pub use config::{Config, LayoutPreset};
pub use session::GameSession;
pub use stage::{NullStage, Stage};

/// Charge ticks that land a launch roughly `gap` units out.
///
/// Inverts the charge/flight physics: a hold of N ticks flies for about
/// 2N frames at N times the horizontal acceleration per frame.
pub fn hold_for_gap(gap: f32) -> u32 {
    let ticks = (gap * consts::GRAVITY_DECAY
        / (2.0 * consts::CHARGE_X_ACCEL * consts::CHARGE_Y_ACCEL))
        .sqrt();
    ticks.round() as u32
}

/// Fixed kinetic constants
pub mod consts {
    /// Vertical scale lost per charge tick (actor and current platform)
    pub const CHARGE_COMPRESSION: f32 = 0.01;
    /// Lowest vertical scale charge compression can reach
    pub const SCALE_FLOOR: f32 = 0.5;
    /// Horizontal launch speed gained per charge tick
    pub const CHARGE_X_ACCEL: f32 = 0.006;
    /// Vertical launch speed gained per charge tick
    pub const CHARGE_Y_ACCEL: f32 = 0.01;
    /// Vertical speed lost per flight tick
    pub const GRAVITY_DECAY: f32 = 0.01;
    /// Actor scale recovered per flight tick
    pub const ACTOR_SCALE_RESTORE: f32 = 0.1;
    /// Platform scale recovered per flight tick
    pub const PLATFORM_SCALE_RESTORE: f32 = 0.02;
    /// Resting height of the actor's origin when standing on a platform
    pub const ACTOR_REST_HEIGHT: f32 = 1.0;
    /// Rotation applied per topple tick (radians)
    pub const TOPPLE_STEP: f32 = 0.1;
    /// Rotation magnitude at which a topple stops (quarter turn)
    pub const TOPPLE_LIMIT: f32 = std::f32::consts::FRAC_PI_2;
    /// Vertical drop per fall tick
    pub const FALL_STEP: f32 = 0.2;
    /// Camera look-at step per tick
    pub const CAMERA_STEP: f32 = 0.1;
    /// Distance at which the camera snaps onto its target
    pub const CAMERA_EPSILON: f32 = 0.05;
    /// Maximum platforms kept alive before the oldest is evicted
    pub const PLATFORM_WINDOW: usize = 5;
    /// Random spread added on top of the base platform step
    pub const STEP_JITTER: f32 = 4.0;
}
