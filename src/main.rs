//! Block Hop entry point
//!
//! Headless demo driver: an auto-player measures the gap to the next
//! platform, inverts the charge physics to pick a hold duration, and
//! plays a fixed number of attempts, restarting after any game over.

use block_hop::sim::GamePhase;
use block_hop::{Config, GameSession, NullStage, hold_for_gap};

const ATTEMPTS: u32 = 12;
/// Safety bound on frames per attempt
const MAX_FRAMES: u32 = 10_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xB10C);
    let mut session = GameSession::new(Config::default(), seed, Box::new(NullStage));
    session.on_success(|score| println!("score: {score}"));
    session.on_failure(|| println!("game over"));

    for attempt in 1..=ATTEMPTS {
        let gap = gap_to_next(&session);
        // Overshoot every few attempts to show the failure path too.
        let hold = if attempt % 5 == 0 {
            hold_for_gap(gap) * 2
        } else {
            hold_for_gap(gap)
        };
        log::info!("attempt {attempt}: gap {gap:.1}, holding {hold} ticks");

        session.input_down();
        for _ in 0..hold {
            session.frame();
        }
        session.input_up();

        let mut frames = 0;
        while !matches!(session.phase(), GamePhase::Idle | GamePhase::Settled) {
            session.frame();
            frames += 1;
            if frames > MAX_FRAMES {
                log::error!("attempt {attempt} never came back down");
                return;
            }
        }

        if session.phase() == GamePhase::Settled {
            session.restart();
        }
    }

    println!("final score: {}", session.score());
}

fn gap_to_next(session: &GameSession) -> f32 {
    let state = session.state();
    let (_, next) = state.platforms.active_pair();
    (state.direction.coord(state.actor.pos) - state.direction.coord(next.pos)).abs()
}
