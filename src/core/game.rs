//! Match controller: turn order, move history, score and the match state
//! machine. Holds no presentation state; front ends poll
//! [`GameEngine::current_state`] after each call.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{
    ai,
    board::{Board, Mark, Pos},
    common::{GameError, IllegalMove},
    config::{Configuration, Difficulty, GameMode, COMPUTER_MARK},
    rules::Rules,
};

/// How a finished match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    Win { player: Mark, line: Vec<Pos> },
    Draw,
}

/// Current status of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished(Outcome),
}

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum MoveOutcome {
    Continued,
    Won(Mark, Vec<Pos>),
    Drawn,
}

/// One entry of the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MoveRecord {
    pub pos: Pos,
    pub player: Mark,
}

/// Wins per mark; survives [`GameEngine::reset`], cleared by
/// [`GameEngine::new_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Score {
    pub x: u32,
    pub o: u32,
}

impl Score {
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn credit(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }

    fn revoke(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x = self.x.saturating_sub(1),
            Mark::O => self.o = self.o.saturating_sub(1),
        }
    }
}

/// Read-only projection of the match for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Mark,
    pub score: Score,
    pub active: bool,
    pub history_len: usize,
    pub status: GameStatus,
    pub reply_pending: bool,
}

/// Core match logic: owns the board for its whole lifetime.
pub struct GameEngine {
    config: Configuration,
    rules: Rules,
    board: Board,
    status: GameStatus,
    history: Vec<MoveRecord>,
    score: Score,
    reply_pending: bool,
    rng: SmallRng,
}

impl GameEngine {
    /// Create an engine that has not started a match yet.
    pub fn new(config: Configuration, rng: SmallRng) -> Self {
        Self {
            config,
            rules: Rules::from_config(&config),
            board: Board::from_config(&config),
            status: GameStatus::NotStarted,
            history: Vec::new(),
            score: Score::default(),
            reply_pending: false,
            rng,
        }
    }

    /// Engine whose random choices are reproducible from `seed`.
    pub fn seeded(config: Configuration, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }

    /// Engine seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy(config: Configuration) -> Self {
        let mut seed_rng = rand::rng();
        Self::new(config, SmallRng::from_rng(&mut seed_rng))
    }

    /// Begin a fresh match under `config`. The score is kept.
    pub fn start(&mut self, config: Configuration) {
        self.config = config;
        self.rules = Rules::from_config(&config);
        self.board = Board::from_config(&config);
        self.history.clear();
        self.reply_pending = false;
        self.status = GameStatus::InProgress;
        log::info!(
            "match started: {}x{}, {} in a row, {:?}, {:?}",
            config.board_size(),
            config.board_size(),
            config.win_length(),
            config.mode(),
            config.difficulty()
        );
    }

    /// Restart with the same configuration, keeping the score.
    pub fn reset(&mut self) {
        self.start(self.config);
    }

    /// Zero the score, then [`GameEngine::reset`].
    pub fn new_match(&mut self) {
        self.score = Score::default();
        self.reset();
    }

    /// Play a human move for the player whose turn it is.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;
        if self.reply_pending {
            return Err(IllegalMove::AwaitingComputer.into());
        }
        self.play(Pos::new(row, col))
    }

    /// Apply the computer's reply. Only legal while a reply is pending.
    pub fn submit_opponent_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;
        if !self.reply_pending {
            return Err(IllegalMove::NotComputerTurn.into());
        }
        self.play(Pos::new(row, col))
    }

    /// Compute and apply the computer's reply with the configured
    /// difficulty.
    pub fn play_opponent_turn(&mut self) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;
        if !self.reply_pending {
            return Err(IllegalMove::NotComputerTurn.into());
        }
        let pos = self
            .compute_opponent_move(self.config.difficulty())
            .ok_or(GameError::IllegalMove(IllegalMove::NoMoveAvailable))?;
        self.submit_opponent_move(pos.row, pos.col)
    }

    /// Ask the policy for `difficulty` which cell the player to move should
    /// take. The board is left untouched; `None` when the match is not in
    /// progress or the board is full.
    pub fn compute_opponent_move(&mut self, difficulty: Difficulty) -> Option<Pos> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        let mark = self.current_player();
        let policy = difficulty.policy();
        let pos = policy.select_move(
            &mut self.board,
            &self.rules,
            &self.config,
            mark,
            &mut self.rng,
        );
        log::debug!("{:?} policy suggests {:?} for {}", difficulty, pos, mark);
        pos
    }

    /// Suggest a move for the human in a human-vs-computer match.
    pub fn hint(&mut self) -> Result<Option<Pos>, GameError> {
        self.ensure_in_progress()?;
        if self.config.mode() != GameMode::HumanVsComputer
            || self.reply_pending
            || self.current_player() == COMPUTER_MARK
        {
            return Err(IllegalMove::HintUnavailable.into());
        }
        let mark = self.current_player();
        Ok(ai::heuristic_move(&mut self.board, &self.rules, mark, &mut self.rng))
    }

    /// Take back the last move, or the last two against the computer so the
    /// human is to move again.
    ///
    /// Undo reopens a finished match; a win credited by an undone stone is
    /// taken off the score again.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.history.is_empty() {
            return Err(GameError::NothingToUndo);
        }
        let count = match self.config.mode() {
            GameMode::HumanVsComputer => 2,
            GameMode::HumanVsHuman => 1,
        }
        .min(self.history.len());

        if let GameStatus::Finished(Outcome::Win { player, .. }) = self.status {
            self.score.revoke(player);
        }
        for _ in 0..count {
            if let Some(record) = self.history.pop() {
                self.board.clear(record.pos.row, record.pos.col)?;
                log::debug!("undo {} at {}", record.player, record.pos);
            }
        }
        self.status = GameStatus::InProgress;
        self.reply_pending = self.config.is_computer(self.current_player());
        Ok(())
    }

    /// Mark to move, derived from history parity.
    pub fn current_player(&self) -> Mark {
        if self.history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player(),
            score: self.score,
            active: self.is_active(),
            history_len: self.history.len(),
            status: self.status.clone(),
            reply_pending: self.reply_pending,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Whether the computer owes a reply before human input reopens.
    pub fn is_reply_pending(&self) -> bool {
        self.reply_pending
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn score(&self) -> Score {
        self.score
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status == GameStatus::InProgress {
            Ok(())
        } else {
            Err(IllegalMove::NotInProgress.into())
        }
    }

    fn play(&mut self, pos: Pos) -> Result<MoveOutcome, GameError> {
        let player = self.current_player();
        self.board.place(pos.row, pos.col, player)?;
        self.history.push(MoveRecord { pos, player });
        self.reply_pending = false;
        log::debug!("{} plays {}", player, pos);

        if let Some(line) = self.rules.check_win(&self.board, pos, player) {
            self.score.credit(player);
            self.status = GameStatus::Finished(Outcome::Win {
                player,
                line: line.clone(),
            });
            log::info!("{} wins with {:?}", player, line);
            return Ok(MoveOutcome::Won(player, line));
        }
        if self.rules.check_draw(&self.board) {
            self.status = GameStatus::Finished(Outcome::Draw);
            log::info!("match drawn after {} moves", self.history.len());
            return Ok(MoveOutcome::Drawn);
        }
        self.reply_pending = self.config.is_computer(self.current_player());
        Ok(MoveOutcome::Continued)
    }
}
