//! The game loop: input, gravity, render.
//!
//! One iteration drains every pending intent in arrival order, runs at most one
//! gravity tick, then draws. Waiting for input is the only place the loop
//! blocks, and no engine mutation is pending while it waits.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{GameEngine, GameSnapshot, GravityClock, TickOutcome};
use crate::input::InputSource;
use crate::term::Renderer;
use crate::types::{Direction, Intent};

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<I, R> {
    engine: GameEngine,
    clock: GravityClock,
    input: I,
    renderer: R,
    frame: Duration,
    intents: Vec<Intent>,
    snapshot: GameSnapshot,
}

impl<I: InputSource, R: Renderer> Shell<I, R> {
    pub fn new(engine: GameEngine, clock: GravityClock, input: I, renderer: R, frame: Duration) -> Self {
        Self {
            engine,
            clock,
            input,
            renderer,
            frame,
            intents: Vec::with_capacity(16),
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn clock(&self) -> &GravityClock {
        &self.clock
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Spawn the first piece and draw it.
    pub fn start(&mut self) -> Result<()> {
        self.engine.start();
        self.clock.reset();
        self.draw()
    }

    /// Run until a quit intent or a collaborator error.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;

        let mut last = Instant::now();
        loop {
            let now = Instant::now();
            let elapsed_ms = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
            last = now;

            if self.step(elapsed_ms, self.frame)? == Flow::Quit {
                info!(
                    pieces = self.engine.piece_id(),
                    rows_cleared = self.engine.rows_cleared(),
                    game_over = self.engine.game_over(),
                    "quit"
                );
                return Ok(());
            }
        }
    }

    /// One loop iteration. `elapsed_ms` is the wall time since the previous
    /// step; `wait` bounds how long input polling may block.
    pub fn step(&mut self, elapsed_ms: u32, wait: Duration) -> Result<Flow> {
        self.intents.clear();
        self.input.poll(wait, &mut self.intents)?;

        for i in 0..self.intents.len() {
            match self.intents[i] {
                Intent::Quit => return Ok(Flow::Quit),
                Intent::Left => {
                    self.engine.try_move(Direction::Left);
                }
                Intent::Right => {
                    self.engine.try_move(Direction::Right);
                }
                Intent::SoftDrop => {
                    if !self.engine.game_over() {
                        self.clock.soft_drop();
                    }
                }
            }
        }

        if self.clock.advance(elapsed_ms) {
            match self.engine.tick() {
                TickOutcome::Locked { rows_cleared } => {
                    self.clock.cancel_soft_drop();
                    debug!(rows_cleared, game_over = self.engine.game_over(), "tick locked");
                }
                TickOutcome::Fell | TickOutcome::Idle => {}
            }
        }

        self.draw()?;
        Ok(Flow::Continue)
    }

    fn draw(&mut self) -> Result<()> {
        self.engine.snapshot_into(&mut self.snapshot);
        self.renderer.draw(&self.snapshot)
    }
}
