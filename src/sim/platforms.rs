//! Platform window and procedural placement
//!
//! Platforms live in a fixed-capacity ring buffer: pushing beyond the
//! window capacity evicts the oldest platform in O(1). The two newest
//! entries are always the active pair: the platform the actor stands on
//! and the one it must reach.

use glam::Vec3;
use rand::Rng;

use super::state::{GameEvent, GameState, ObjectId, Platform, TravelDirection};
use crate::consts::{PLATFORM_WINDOW, STEP_JITTER};

/// FIFO window over the live platforms, capacity [`PLATFORM_WINDOW`]
#[derive(Debug, Clone, Default)]
pub struct PlatformWindow {
    slots: [Option<Platform>; PLATFORM_WINDOW],
    /// Index of the oldest platform
    head: usize,
    len: usize,
}

impl PlatformWindow {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Platform at `index`, oldest first
    pub fn get(&self, index: usize) -> Option<&Platform> {
        if index < self.len {
            self.slots[(self.head + index) % PLATFORM_WINDOW].as_ref()
        } else {
            None
        }
    }

    /// The most recently generated platform
    pub fn newest(&self) -> Option<&Platform> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// The platform the actor launches from and the one it aims for.
    ///
    /// The window always holds at least two platforms once the session
    /// has started; calling this earlier is a logic defect.
    pub fn active_pair(&self) -> (&Platform, &Platform) {
        let pair = self
            .len
            .checked_sub(2)
            .and_then(|i| self.get(i))
            .zip(self.newest());
        match pair {
            Some(pair) => pair,
            None => panic!("platform window not primed"),
        }
    }

    /// Mutable access to the launch platform (for charge compression)
    pub fn current_mut(&mut self) -> Option<&mut Platform> {
        let index = self.len.checked_sub(2)?;
        self.slots[(self.head + index) % PLATFORM_WINDOW].as_mut()
    }

    /// Append a platform, returning the evicted one if the window was full
    pub fn push(&mut self, platform: Platform) -> Option<Platform> {
        let evicted = if self.len == PLATFORM_WINDOW {
            let old = self.slots[self.head].take();
            self.head = (self.head + 1) % PLATFORM_WINDOW;
            self.len -= 1;
            old
        } else {
            None
        };
        self.slots[(self.head + self.len) % PLATFORM_WINDOW] = Some(platform);
        self.len += 1;
        evicted
    }

    /// Remove every platform, oldest first
    pub fn drain(&mut self) -> Vec<Platform> {
        let drained = (0..self.len)
            .filter_map(|i| self.slots[(self.head + i) % PLATFORM_WINDOW].take())
            .collect();
        self.head = 0;
        self.len = 0;
        drained
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        (0..self.len).filter_map(|i| self.get(i))
    }
}

/// Generate the next platform and keep the window bookkeeping current.
///
/// The first platform sits at the origin. Every later one copies the
/// newest platform's position, picks the travel direction 50/50, and
/// steps forward by `round(random * jitter + step_base)` units. The
/// camera is retargeted at the midpoint of the two newest platforms.
pub fn spawn_platform(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let pos = match state.platforms.newest().map(|p| p.pos) {
        None => Vec3::ZERO,
        Some(prev) => {
            let direction = if state.rng.random_bool(0.5) {
                TravelDirection::AlongX
            } else {
                TravelDirection::AlongZ
            };
            let step =
                (state.rng.random::<f32>() * STEP_JITTER + state.config.step_base).round();
            let mut pos = prev;
            direction.advance(&mut pos, step);
            state.direction = direction;
            pos
        }
    };

    let id = state.next_platform_id();
    log::debug!("platform {id} at ({:.1}, {:.1})", pos.x, pos.z);
    if let Some(evicted) = state.platforms.push(Platform::new(id, pos)) {
        events.push(GameEvent::ObjectRemoved(ObjectId::Platform(evicted.id)));
    }
    events.push(GameEvent::ObjectAdded(ObjectId::Platform(id)));

    if state.platforms.len() > 1 {
        let (a, b) = state.platforms.active_pair();
        state.camera.retarget(a.pos, b.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn platform(id: u32, x: f32) -> Platform {
        Platform::new(id, Vec3::new(x, 0.0, 0.0))
    }

    #[test]
    fn test_window_push_and_order() {
        let mut window = PlatformWindow::default();
        assert!(window.is_empty());
        for id in 0..3 {
            assert!(window.push(platform(id, id as f32)).is_none());
        }
        assert_eq!(window.len(), 3);
        assert_eq!(window.get(0).unwrap().id, 0);
        assert_eq!(window.newest().unwrap().id, 2);
        let (current, next) = window.active_pair();
        assert_eq!((current.id, next.id), (1, 2));
    }

    #[test]
    fn test_window_evicts_oldest_beyond_capacity() {
        let mut window = PlatformWindow::default();
        for id in 0..PLATFORM_WINDOW as u32 {
            assert!(window.push(platform(id, 0.0)).is_none());
        }
        let evicted = window.push(platform(99, 0.0)).unwrap();
        assert_eq!(evicted.id, 0);
        assert_eq!(window.len(), PLATFORM_WINDOW);
        assert_eq!(window.get(0).unwrap().id, 1);
        assert_eq!(window.newest().unwrap().id, 99);

        let ids: Vec<u32> = window.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 99]);
    }

    #[test]
    fn test_window_drain() {
        let mut window = PlatformWindow::default();
        for id in 0..4 {
            window.push(platform(id, 0.0));
        }
        let drained = window.drain();
        assert_eq!(drained.len(), 4);
        assert_eq!(drained[0].id, 0);
        assert!(window.is_empty());
        assert!(window.newest().is_none());
    }

    #[test]
    #[should_panic(expected = "platform window not primed")]
    fn test_active_pair_requires_two() {
        let mut window = PlatformWindow::default();
        window.push(platform(0, 0.0));
        window.active_pair();
    }

    #[test]
    fn test_spawn_offsets_one_axis_within_step_range() {
        let mut state = GameState::new(Config::default(), 42);
        let mut events = Vec::new();
        spawn_platform(&mut state, &mut events);

        for _ in 0..50 {
            let prev = state.platforms.newest().unwrap().pos;
            spawn_platform(&mut state, &mut events);
            let next = state.platforms.newest().unwrap().pos;
            let dx = prev.x - next.x;
            let dz = prev.z - next.z;
            // Exactly one axis moves, forward, by step_base..=step_base+jitter.
            assert!((dx == 0.0) != (dz == 0.0));
            let step = dx.max(dz);
            assert!(step >= state.config.step_base);
            assert!(step <= state.config.step_base + STEP_JITTER);
            assert_eq!(step, step.round());
            // The recorded direction matches the axis that moved.
            let expected = if dx != 0.0 {
                TravelDirection::AlongX
            } else {
                TravelDirection::AlongZ
            };
            assert_eq!(state.direction, expected);
        }
        assert_eq!(state.platforms.len(), PLATFORM_WINDOW);
    }

    #[test]
    fn test_spawn_emits_add_and_evict_events() {
        let mut state = GameState::new(Config::default(), 1);
        let mut events = Vec::new();
        for _ in 0..PLATFORM_WINDOW + 1 {
            events.clear();
            spawn_platform(&mut state, &mut events);
        }
        // Window was full, so the last spawn evicted the first platform.
        assert_eq!(
            events,
            vec![
                GameEvent::ObjectRemoved(ObjectId::Platform(1)),
                GameEvent::ObjectAdded(ObjectId::Platform(6)),
            ]
        );
    }

    #[test]
    fn test_spawn_retargets_camera_to_midpoint() {
        let mut state = GameState::new(Config::default(), 5);
        let mut events = Vec::new();
        spawn_platform(&mut state, &mut events);
        assert_eq!(state.camera.next, Vec3::ZERO);
        spawn_platform(&mut state, &mut events);
        let (a, b) = state.platforms.active_pair();
        let mid = state.camera.next;
        assert_eq!(mid.x, (a.pos.x + b.pos.x) / 2.0);
        assert_eq!(mid.z, (a.pos.z + b.pos.z) / 2.0);
        assert_eq!(mid.y, 0.0);
    }
}
