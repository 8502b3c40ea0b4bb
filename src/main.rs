//! Grid Snake entry point
//!
//! Native bootstrap: loads settings, then drives a headless session with a
//! scripted turn sequence standing in for keyboard input.
//!
//! Usage: `grid-snake [settings.json]`

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use grid_snake::Settings;
use grid_snake::sim::{Direction, EntityKind, GameState, TickInput, tick};

/// Length of the headless session in seconds of game time
const SESSION_SECONDS: u64 = 30;

/// Chance per tick that the scripted player asks for a turn
const TURN_CHANCE: f64 = 0.2;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Grid Snake (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(&path),
        None => Settings::default(),
    };

    let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
    let mut state = GameState::try_new(&settings, seed)?;
    log::info!(
        "Game initialized on a {}x{} board with seed: {}",
        settings.width,
        settings.height,
        seed
    );

    let mut player = Pcg32::seed_from_u64(seed.rotate_left(32));
    let mut input = TickInput::default();
    let ticks = u64::from(settings.ticks_per_second) * SESSION_SECONDS;
    let mut meals = 0u32;

    for _ in 0..ticks {
        if player.random_bool(TURN_CHANCE) {
            let choice = player.random_range(0..Direction::ALL.len());
            input.request(Direction::ALL[choice]);
        }

        let outcome = tick(&mut state, &input.take());
        if outcome.contact == Some(EntityKind::Food) {
            meals += 1;
        }
    }

    log::info!(
        "Session over: {} ticks, {} meals, {} resets, best length {}",
        state.time_ticks,
        meals,
        state.resets,
        state.best_length
    );
    Ok(())
}
