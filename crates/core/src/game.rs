//! Game module - one session of 2048
//!
//! Ties the board, resolver, spawner and detector together and runs the
//! per-input state machine:
//!
//! ```text
//! Idle --slide--> (ticks) --+--> no-op ------------------------> Idle
//!                           +--> settled --spawn--> Continue ----> Idle
//!                                                +-> Lost ------> GameOver
//! GameOver --restart--> Idle
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::board::Board;
use crate::config::GameConfig;
use crate::detector::has_any_move;
use crate::resolver::{slide, SlideReport, TickObserver};
use crate::snapshot::GameSnapshot;
use crate::spawner::{spawn_after_move, spawn_initial, Verdict};
use crate::types::Direction;

/// Where the state machine rests between inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    GameOver,
}

/// Result of feeding one direction to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOutcome {
    /// Nothing could move; no tile was spawned
    NoOp,
    /// Tiles moved and the game goes on
    Continue,
    /// Tiles moved and the board is now stuck
    Lost,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: Rng = StdRng> {
    board: Board,
    rng: R,
    phase: Phase,
    /// Slides that changed the board in this episode.
    slides: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    last_report: SlideReport,
}

impl GameState<StdRng> {
    /// Create a new game with a seeded random source
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game and place the two opening tiles
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let mut board = Board::new(config.geometry);
        spawn_initial(&mut board, &mut rng);
        Self::from_board(board, rng)
    }

    /// Resume from an existing board
    ///
    /// A board with no moves left starts in `GameOver`.
    pub fn from_board(board: Board, rng: R) -> Self {
        let phase = if has_any_move(&board) {
            Phase::Idle
        } else {
            Phase::GameOver
        };
        Self {
            board,
            rng,
            phase,
            slides: 0,
            episode_id: 0,
            last_report: SlideReport::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn slides(&self) -> u32 {
        self.slides
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn last_report(&self) -> SlideReport {
        self.last_report
    }

    /// Slide without observing intermediate ticks
    pub fn slide(&mut self, direction: Direction) -> SlideOutcome {
        self.slide_with(direction, &mut |_: &Board| {})
    }

    /// Slide, handing the board to `observer` after every animation tick
    pub fn slide_with<O>(&mut self, direction: Direction, observer: &mut O) -> SlideOutcome
    where
        O: TickObserver + ?Sized,
    {
        if self.phase == Phase::GameOver {
            return SlideOutcome::NoOp;
        }

        let report = slide(&mut self.board, direction, observer);
        self.last_report = report;
        if report.is_noop() {
            return SlideOutcome::NoOp;
        }
        self.slides += 1;

        let mut verdict = spawn_after_move(&mut self.board, &mut self.rng);
        // The spawn may have filled the last cell; every later slide would be a
        // no-op that never reaches the spawner again.
        if verdict == Verdict::Continue && !has_any_move(&self.board) {
            verdict = Verdict::Lost;
        }

        match verdict {
            Verdict::Continue => SlideOutcome::Continue,
            Verdict::Lost => {
                self.phase = Phase::GameOver;
                info!(
                    episode = self.episode_id,
                    slides = self.slides,
                    best = self.board.max_value(),
                    "game lost"
                );
                SlideOutcome::Lost
            }
        }
    }

    /// Start over with a fresh two-tile board
    pub fn restart(&mut self) {
        self.board.clear();
        spawn_initial(&mut self.board, &mut self.rng);
        self.phase = Phase::Idle;
        self.slides = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_report = SlideReport::default();
        info!(episode = self.episode_id, "game restarted");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::of_board(&self.board);
        snap.game_over = self.is_over();
        snap.slides = self.slides;
        snap.episode_id = self.episode_id;
        snap
    }

    /// Get mutable access to the board (for testing)
    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
