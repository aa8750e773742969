//! Headless Tetris++ runner (default binary).
//!
//! Builds a session from `TETRIS_PP_*` environment variables and lets a seeded random
//! "player" press keys on every field for a fixed number of frames, then prints each
//! field. Set `RUST_LOG=debug` to follow line clears as they happen.

use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};

use tetris_pp::core::{Randomizer, Session, SimpleRng};
use tetris_pp::run_config::RunConfig;
use tetris_pp::types::{Command, FRAME_MS};

/// Commands the autoplayer picks from, weighted toward sideways moves
const MOVES: [Command; 8] = [
    Command::MoveLeft,
    Command::MoveLeft,
    Command::MoveRight,
    Command::MoveRight,
    Command::Rotate,
    Command::SoftDrop,
    Command::SoftDrop,
    Command::HardDrop,
];

/// Chance per frame (out of 100) that the autoplayer presses anything
const PRESS_PERCENT: u32 = 12;

fn main() -> Result<()> {
    env_logger::init();

    let config = RunConfig::from_env();
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("run config: {:?}, seed {}", config, seed);

    let mut session = Session::new(config.mode, config.difficulty, config.scoring, seed)
        .context("failed to build session")?;

    let frames = run(&mut session, seed, config.frames);
    report(&session, frames);
    Ok(())
}

/// Drive the session until it ends or the frame budget runs out; returns frames played
fn run(session: &mut Session, seed: u32, frame_budget: u32) -> u32 {
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut players: Vec<SimpleRng> = (0..session.fields().len())
        .map(|i| SimpleRng::new(SimpleRng::derive(seed ^ 0xA5A5_A5A5, i as u32)))
        .collect();

    for frame_no in 0..frame_budget {
        if session.is_over() {
            return frame_no;
        }

        for (player, field) in players.iter_mut().zip(session.fields_mut()) {
            if player.next_below(100) < PRESS_PERCENT {
                let command = MOVES[player.next_below(MOVES.len() as u32) as usize];
                field.apply(command);
            }
        }

        session.advance_time(frame);

        for (i, field) in session.fields_mut().iter_mut().enumerate() {
            if let Some(event) = field.take_last_event() {
                if event.lines_cleared > 0 {
                    debug!(
                        "frame {}: player {} cleared {} line(s) (+{})",
                        frame_no,
                        i + 1,
                        event.lines_cleared,
                        event.points
                    );
                }
            }
        }
    }
    frame_budget
}

fn report(session: &Session, frames: u32) {
    println!(
        "{} / {} after {} frames{}",
        session.mode().as_str(),
        session.difficulty().as_str(),
        frames,
        if session.is_over() { " (game over)" } else { "" }
    );

    for (i, field) in session.fields().iter().enumerate() {
        let snap = field.snapshot();
        println!();
        println!(
            "Player {}: score {}, lines {}, pieces {}{}",
            i + 1,
            snap.score,
            snap.lines,
            field.piece_id(),
            if snap.game_over { ", topped out" } else { "" }
        );
        print!("{}", snap);
    }
}
