//! Host-facing session orchestration
//!
//! Wires the deterministic sim to the outside world: the rendering
//! collaborator, the host's success/failure callbacks, and the raw
//! input surface. The host calls [`GameSession::frame`] once per
//! display frame; everything else is event-driven.

use crate::config::Config;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::stage::Stage;

type SuccessCallback = Box<dyn FnMut(u32)>;
type FailureCallback = Box<dyn FnMut()>;

/// One play/score/restart lifecycle over a single actor
pub struct GameSession {
    state: GameState,
    stage: Box<dyn Stage>,
    input: TickInput,
    on_success: Option<SuccessCallback>,
    on_failure: Option<FailureCallback>,
}

impl GameSession {
    /// Build a session and populate the stage with the starting scene
    pub fn new(config: Config, seed: u64, stage: Box<dyn Stage>) -> Self {
        let mut state = GameState::new(config, seed);
        let events = state.start();
        let mut session = Self {
            state,
            stage,
            input: TickInput::default(),
            on_success: None,
            on_failure: None,
        };
        log::info!("session started (seed {seed})");
        session.dispatch(events);
        session.stage.request_redraw();
        session
    }

    /// Invoked with the score on every confirmed landing, and with 0 on restart
    pub fn on_success(&mut self, callback: impl FnMut(u32) + 'static) {
        self.on_success = Some(Box::new(callback));
    }

    /// Invoked once when a fall settles
    pub fn on_failure(&mut self, callback: impl FnMut() + 'static) {
        self.on_failure = Some(Box::new(callback));
    }

    /// The charge gesture started. Only arms a charge while the actor
    /// is grounded and idle; presses mid-flight or mid-fall are ignored.
    pub fn input_down(&mut self) {
        if matches!(self.state.phase, GamePhase::Idle) {
            self.input.held = true;
        }
    }

    /// The charge gesture ended
    pub fn input_up(&mut self) {
        self.input.held = false;
    }

    /// Tear down and rebuild the scene, then report the zeroed score
    pub fn restart(&mut self) {
        self.input = TickInput::default();
        let events = self.state.restart();
        self.dispatch(events);
        self.stage.request_redraw();
    }

    /// Advance one display frame: state first, then the redraw request
    pub fn frame(&mut self) {
        let events = tick(&mut self.state, &self.input);
        self.dispatch(events);
        self.stage.request_redraw();
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Read access for renderers: transforms live on the sim types
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::ObjectAdded(id) => self.stage.add_object(id),
                GameEvent::ObjectRemoved(id) => self.stage.remove_object(id),
                GameEvent::Landed { score } => {
                    log::info!("landed, score {score}");
                    if let Some(callback) = &mut self.on_success {
                        callback(score);
                    }
                }
                GameEvent::Fell => {
                    log::info!("fell, run over at score {}", self.state.score);
                    if let Some(callback) = &mut self.on_failure {
                        callback();
                    }
                }
                GameEvent::Restarted => {
                    if let Some(callback) = &mut self.on_success {
                        callback(0);
                    }
                }
            }
        }
    }
}
