//! Landing-zone classification
//!
//! Distances are measured center-to-center along the active travel axis.
//! An actor within `(actor_width + platform_width) / 2` of a platform is
//! touching it; within `platform_width / 2` it stands fully on top.

use serde::{Deserialize, Serialize};

use super::state::{Actor, Platform, TravelDirection};
use crate::config::Config;

/// Where the actor came down relative to the active platform pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingOutcome {
    /// Fully on the platform it launched from
    CenterCurrent,
    /// Overhanging an edge of the platform it launched from
    EdgeCurrent,
    /// Fully on the next platform, the only scoring outcome
    CenterNext,
    /// Overhanging an edge of the next platform
    EdgeNext,
    /// Touching neither platform
    Miss,
}

/// Classification result plus the distance it was judged on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub outcome: LandingOutcome,
    /// Travel-axis distance to the platform the outcome refers to
    /// (to the next platform for a miss; unused downstream)
    pub distance: f32,
}

/// Decide the landing outcome for a grounded actor.
///
/// The current platform takes precedence: an actor within tolerance of
/// both platforms is judged against the one it launched from.
pub fn classify(
    actor: &Actor,
    current: &Platform,
    next: &Platform,
    direction: TravelDirection,
    config: &Config,
) -> Landing {
    let tolerance = config.landing_tolerance();
    let half_width = config.platform_half_width();
    let actor_coord = direction.coord(actor.pos);
    let distance_current = (actor_coord - direction.coord(current.pos)).abs();
    let distance_next = (actor_coord - direction.coord(next.pos)).abs();

    if distance_current < tolerance {
        Landing {
            outcome: if distance_current < half_width {
                LandingOutcome::CenterCurrent
            } else {
                LandingOutcome::EdgeCurrent
            },
            distance: distance_current,
        }
    } else if distance_next < tolerance {
        Landing {
            outcome: if distance_next < half_width {
                LandingOutcome::CenterNext
            } else {
                LandingOutcome::EdgeNext
            },
            distance: distance_next,
        }
    } else {
        Landing {
            outcome: LandingOutcome::Miss,
            distance: distance_next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    /// platform_width 3, actor_width 2: half_width 1.5, tolerance 2.5
    fn narrow_config() -> Config {
        Config {
            platform_width: 3.0,
            actor_width: 2.0,
            ..Config::default()
        }
    }

    fn classify_at(x: f32, config: &Config) -> Landing {
        let mut actor = Actor::new();
        actor.pos.x = x;
        let current = Platform::new(0, Vec3::ZERO);
        let next = Platform::new(1, Vec3::new(-8.0, 0.0, 0.0));
        classify(&actor, &current, &next, TravelDirection::AlongX, config)
    }

    #[test]
    fn test_center_current_within_half_width() {
        let landing = classify_at(-1.0, &narrow_config());
        assert_eq!(landing.outcome, LandingOutcome::CenterCurrent);
        assert_eq!(landing.distance, 1.0);
    }

    #[test]
    fn test_edge_next_between_half_width_and_tolerance() {
        let landing = classify_at(-9.8, &narrow_config());
        assert_eq!(landing.outcome, LandingOutcome::EdgeNext);
        assert!((landing.distance - 1.8).abs() < 1e-5);
    }

    #[test]
    fn test_boundaries_are_strict() {
        let config = narrow_config();
        // Exactly at tolerance of both platforms: a miss.
        assert_eq!(classify_at(-2.5, &config).outcome, LandingOutcome::Miss);
        assert_eq!(classify_at(-5.5, &config).outcome, LandingOutcome::Miss);
        // Exactly at half width: an edge, not a center.
        assert_eq!(classify_at(-1.5, &config).outcome, LandingOutcome::EdgeCurrent);
        assert_eq!(classify_at(-9.5, &config).outcome, LandingOutcome::EdgeNext);
    }

    #[test]
    fn test_current_takes_precedence_over_next() {
        // Platforms close enough that the actor touches both.
        let mut actor = Actor::new();
        actor.pos.z = -2.0;
        let current = Platform::new(0, Vec3::ZERO);
        let next = Platform::new(1, Vec3::new(0.0, 0.0, -4.0));
        let landing = classify(
            &actor,
            &current,
            &next,
            TravelDirection::AlongZ,
            &Config::default(),
        );
        assert_eq!(landing.outcome, LandingOutcome::EdgeCurrent);
        assert_eq!(landing.distance, 2.0);
    }

    proptest! {
        #[test]
        fn prop_within_half_width_of_next_is_center_next(offset in -1.49f32..1.49) {
            let landing = classify_at(-8.0 + offset, &narrow_config());
            prop_assert_eq!(landing.outcome, LandingOutcome::CenterNext);
        }

        #[test]
        fn prop_outside_tolerance_of_both_is_miss(x in -5.49f32..-2.51) {
            // The dead zone between the platforms at 0 and -8.
            let landing = classify_at(x, &narrow_config());
            prop_assert_eq!(landing.outcome, LandingOutcome::Miss);
        }

        #[test]
        fn prop_outcome_is_symmetric_across_axes(offset in -12.0f32..4.0) {
            let config = narrow_config();
            let along_x = classify_at(offset, &config);

            let mut actor = Actor::new();
            actor.pos.z = offset;
            let current = Platform::new(0, Vec3::ZERO);
            let next = Platform::new(1, Vec3::new(0.0, 0.0, -8.0));
            let along_z =
                classify(&actor, &current, &next, TravelDirection::AlongZ, &config);

            prop_assert_eq!(along_x.outcome, along_z.outcome);
            prop_assert_eq!(along_x.distance, along_z.distance);
        }
    }
}
