//! Session state and core gameplay types

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::CameraFollow;
use super::fall::FallAnim;
use super::platforms::{PlatformWindow, spawn_platform};
use crate::config::Config;
use crate::consts::*;

/// The horizontal axis the current jump attempt travels along
///
/// Fixed from the moment a platform is generated until the actor lands or
/// falls. Travel displaces the coordinate in the negative direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TravelDirection {
    #[default]
    AlongX,
    AlongZ,
}

impl TravelDirection {
    /// The tracked coordinate of a position for this direction
    #[inline]
    pub fn coord(self, v: Vec3) -> f32 {
        match self {
            TravelDirection::AlongX => v.x,
            TravelDirection::AlongZ => v.z,
        }
    }

    /// Move a position `amount` units forward along this direction
    #[inline]
    pub fn advance(self, v: &mut Vec3, amount: f32) {
        match self {
            TravelDirection::AlongX => v.x -= amount,
            TravelDirection::AlongZ => v.z -= amount,
        }
    }
}

/// Handle for a renderable object owned by the sim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectId {
    Actor,
    Platform(u32),
}

/// Something the host must react to after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ObjectAdded(ObjectId),
    ObjectRemoved(ObjectId),
    /// A confirmed landing on the next platform
    Landed { score: u32 },
    /// The fall animation settled; the run is over
    Fell,
    /// The session was rebuilt from scratch
    Restarted,
}

/// A landing target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub pos: Vec3,
    /// Visual scale; the vertical component compresses while charging
    pub scale: Vec3,
}

impl Platform {
    pub fn new(id: u32, pos: Vec3) -> Self {
        Self {
            id,
            pos,
            scale: Vec3::ONE,
        }
    }
}

/// The jumping actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec3,
    /// Vertical component squashes during charge and restores in flight
    pub scale: Vec3,
    /// Only one axis is ever rotated, picked by the fall direction
    pub rotation: Vec3,
    /// Horizontal launch speed (scalar; the travel direction applies it)
    pub x_speed: f32,
    /// Vertical speed (scalar; decays while airborne)
    pub y_speed: f32,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            pos: Vec3::new(0.0, ACTOR_REST_HEIGHT, 0.0),
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
            x_speed: 0.0,
            y_speed: 0.0,
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

/// Which of the self-advancing gameplay loops owns the actor this frame
///
/// At most one phase is active at a time; the camera follow runs
/// alongside whichever it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamePhase {
    /// Grounded, waiting for input
    Idle,
    /// Input held, velocity accumulating
    Charging,
    /// Airborne, integrating until ground contact
    Flying,
    /// Landing failed, topple/drop animation running
    Falling(FallAnim),
    /// Fall finished; only a restart leaves this phase
    Settled,
}

/// Complete gameplay state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub platforms: PlatformWindow,
    /// Axis of the current jump attempt, set when a platform spawns
    pub direction: TravelDirection,
    pub actor: Actor,
    pub camera: CameraFollow,
    next_id: u32,
}

impl GameState {
    /// Create an unstarted state; call [`GameState::start`] to populate it
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            platforms: PlatformWindow::default(),
            direction: TravelDirection::default(),
            actor: Actor::new(),
            camera: CameraFollow::default(),
            next_id: 1,
        }
    }

    /// Allocate a new platform ID
    pub fn next_platform_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Populate the starting scene: two platforms and a grounded actor
    pub fn start(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        spawn_platform(self, &mut events);
        spawn_platform(self, &mut events);
        self.actor = Actor::new();
        events.push(GameEvent::ObjectAdded(ObjectId::Actor));
        self.phase = GamePhase::Idle;
        events
    }

    /// Tear the session down and rebuild it as at startup
    pub fn restart(&mut self) -> Vec<GameEvent> {
        log::debug!("restarting session (score was {})", self.score);
        let mut events = vec![GameEvent::ObjectRemoved(ObjectId::Actor)];
        for platform in self.platforms.drain() {
            events.push(GameEvent::ObjectRemoved(ObjectId::Platform(platform.id)));
        }
        self.score = 0;
        self.camera = CameraFollow::default();
        events.push(GameEvent::Restarted);
        events.extend(self.start());
        events
    }
}
