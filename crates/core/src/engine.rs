//! Game engine - the spawn / fall / lock / clear state machine
//!
//! The engine owns the board and the single falling piece. Locked pieces are
//! merged into the board grid and stop existing as pieces.
//!
//! ```text
//! Spawning -> Falling -> Locking -> Clearing -> Spawning
//!     |
//!     +-> GameOver
//! ```
//!
//! `Locking`, `Clearing` and `Spawning` are transient: every public call runs
//! them through to the next stable phase, so callers only observe `Falling`
//! or `GameOver` once the engine has started.

use tracing::{debug, info};

use crate::board::Board;
use crate::collision::{can_move, fits, is_grounded};
use crate::config::{ConfigError, GameConfig};
use crate::pieces::{spawn_anchor, Piece};
use crate::rng::Randomizer;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::Direction;

/// Engine lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    Clearing,
    GameOver,
}

impl Phase {
    /// Phases the engine never rests in between calls
    pub fn is_transient(&self) -> bool {
        matches!(self, Phase::Spawning | Phase::Locking | Phase::Clearing)
    }
}

/// What a single gravity tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing moved (game over, or the engine was only started)
    Idle,
    /// The piece fell one row
    Fell,
    /// The piece locked; a new piece spawned unless the game is now over
    Locked { rows_cleared: usize },
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current: Option<Piece>,
    phase: Phase,
    randomizer: Randomizer,
    /// Monotonic id of spawned pieces (increments only on successful spawn).
    piece_id: u32,
    /// Rows removed by the most recent clearing pass.
    last_cleared: usize,
    /// Total rows removed this game.
    rows_cleared: u32,
}

impl GameEngine {
    /// Create an engine with an empty board sized by `config`.
    ///
    /// The engine starts in `Spawning`; call [`GameEngine::start`] or
    /// [`GameEngine::tick`] to spawn the first piece.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_board(
            Board::new(config.width, config.height),
            Randomizer::new(config.seed, &config.shapes),
        ))
    }

    /// Create an engine over an existing board
    pub fn with_board(board: Board, randomizer: Randomizer) -> Self {
        Self {
            board,
            current: None,
            phase: Phase::Spawning,
            randomizer,
            piece_id: 0,
            last_cleared: 0,
            rows_cleared: 0,
        }
    }

    /// Spawn the first piece
    pub fn start(&mut self) {
        self.settle();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// True if the falling piece rests on the floor or on settled cells
    pub fn is_grounded(&self) -> bool {
        match self.current {
            Some(ref piece) => is_grounded(piece, &self.board),
            None => false,
        }
    }

    /// Run the spawn step. Only acts in `Spawning`.
    ///
    /// Returns false, without creating a piece, when the phase is not
    /// `Spawning` or when the spawn cells are taken (the game is then over).
    pub fn spawn_piece(&mut self) -> bool {
        if self.phase != Phase::Spawning {
            return false;
        }

        let (shape, color) = self.randomizer.draw();
        let piece = Piece::new(shape, color, spawn_anchor(shape, self.board.width()));

        if self.board.is_spawn_blocked(&piece.occupied_cells()) || !fits(&piece, &self.board) {
            info!(
                piece_id = self.piece_id,
                rows_cleared = self.rows_cleared,
                "spawn blocked, game over"
            );
            self.current = None;
            self.phase = Phase::GameOver;
            return false;
        }

        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(
            piece_id = self.piece_id,
            shape = shape.as_str(),
            color = color.as_str(),
            col = piece.anchor().col,
            "spawned piece"
        );
        self.current = Some(piece);
        self.phase = Phase::Falling;
        true
    }

    /// Advance gravity by one step.
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            Phase::GameOver => TickOutcome::Idle,
            Phase::Spawning | Phase::Locking | Phase::Clearing => {
                self.settle();
                TickOutcome::Idle
            }
            Phase::Falling => {
                let Some(mut piece) = self.current else {
                    return TickOutcome::Idle;
                };

                if can_move(&piece, &self.board, 1, 0) {
                    piece.move_down();
                    self.current = Some(piece);
                    return TickOutcome::Fell;
                }

                self.phase = Phase::Locking;
                self.settle();
                TickOutcome::Locked {
                    rows_cleared: self.last_cleared,
                }
            }
        }
    }

    /// Shift the falling piece one column. Returns false if the move was rejected.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(mut piece) = self.current else {
            return false;
        };

        if !can_move(&piece, &self.board, 0, direction.col_delta()) {
            return false;
        }

        match direction {
            Direction::Left => piece.move_left(),
            Direction::Right => piece.move_right(),
        }
        self.current = Some(piece);
        true
    }

    /// Run transient phases until the engine is `Falling` or `GameOver`.
    fn settle(&mut self) {
        while self.phase.is_transient() {
            self.step();
        }
    }

    /// Perform exactly one transition out of a transient phase.
    fn step(&mut self) {
        match self.phase {
            Phase::Spawning => {
                self.spawn_piece();
            }
            Phase::Locking => {
                if let Some(piece) = self.current.take() {
                    self.board.merge(&piece);
                    debug!(
                        piece_id = self.piece_id,
                        row = piece.anchor().row,
                        col = piece.anchor().col,
                        "locked piece"
                    );
                }
                self.phase = Phase::Clearing;
            }
            Phase::Clearing => {
                self.last_cleared = self.board.clear_filled_rows();
                if self.last_cleared > 0 {
                    self.rows_cleared += self.last_cleared as u32;
                    debug!(
                        cleared = self.last_cleared,
                        total = self.rows_cleared,
                        "cleared rows"
                    );
                }
                self.phase = Phase::Spawning;
            }
            Phase::Falling | Phase::GameOver => {}
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.current.map(ActiveSnapshot::from);
        out.phase = self.phase;
        out.game_over = self.game_over();
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_board(
            Board::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT),
            Randomizer::default(),
        )
    }
}
