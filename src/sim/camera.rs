//! Camera look-at interpolation
//!
//! The look-at point trails the action: whenever a new platform pair
//! becomes current/next, the target moves to their midpoint and the
//! current point walks toward it a fixed step per frame, snapping once
//! it is close enough to avoid oscillating around the target.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_EPSILON, CAMERA_STEP};

/// Smoothed look-at state; runs for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CameraFollow {
    /// Where the camera looks this frame
    pub current: Vec3,
    /// Where it is heading
    pub next: Vec3,
}

impl CameraFollow {
    /// Aim at the x/z midpoint of a platform pair
    pub fn retarget(&mut self, a: Vec3, b: Vec3) {
        self.next = Vec3::new((a.x + b.x) / 2.0, 0.0, (a.z + b.z) / 2.0);
    }

    /// Advance one frame; returns whether the look-at point moved
    pub fn tick(&mut self) -> bool {
        let before = self.current;
        self.current.x = step_toward(self.current.x, self.next.x);
        self.current.z = step_toward(self.current.z, self.next.z);
        self.current != before
    }
}

fn step_toward(current: f32, target: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= CAMERA_EPSILON {
        target
    } else {
        current + CAMERA_STEP.copysign(delta)
    }
}
