//! Deterministic gameplay simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame steps only
//! - Seeded RNG only
//! - No rendering or platform dependencies; object lifecycle leaves as
//!   [`GameEvent`]s for the host to apply

pub mod camera;
pub mod fall;
pub mod landing;
pub mod platforms;
pub mod state;
pub mod tick;

pub use camera::CameraFollow;
pub use fall::{FallAnim, FallOutcome, RotationAxis};
pub use landing::{Landing, LandingOutcome, classify};
pub use platforms::{PlatformWindow, spawn_platform};
pub use state::{
    Actor, GameEvent, GamePhase, GameState, ObjectId, Platform, TravelDirection,
};
pub use tick::{Progress, TickInput, tick};
