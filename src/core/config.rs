use crate::core::board::Mark;
use crate::core::common::{ConfigError, GameError};

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 10;
pub const MIN_WIN_LENGTH: usize = 3;
pub const MAX_WIN_LENGTH: usize = 6;

pub const DEFAULT_BOARD_SIZE: usize = 5;
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Mark played by the computer in a human-vs-computer match. The human
/// always opens with the other one.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Opponent strength, each level backed by one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Win, block, center, then random.
    #[default]
    Medium,
    /// Depth-limited minimax on small boards.
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum GameMode {
    #[default]
    #[cfg_attr(feature = "std", serde(rename = "human"), value(name = "human"))]
    HumanVsHuman,
    #[cfg_attr(feature = "std", serde(rename = "ai"), value(name = "ai"))]
    HumanVsComputer,
}

/// Validated match configuration.
///
/// Only constructible through [`Configuration::new`] or by adjusting a valid
/// value, so `3 <= win_length <= min(board_size, 6)` and
/// `3 <= board_size <= 10` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Configuration {
    board_size: usize,
    win_length: usize,
    difficulty: Difficulty,
    mode: GameMode,
}

impl Configuration {
    pub fn new(
        board_size: usize,
        win_length: usize,
        difficulty: Difficulty,
        mode: GameMode,
    ) -> Result<Self, GameError> {
        validate_board_size(board_size)?;
        let max = Self::max_win_length(board_size);
        if !(MIN_WIN_LENGTH..=max).contains(&win_length) {
            return Err(GameError::InvalidConfiguration(ConfigError::WinLength {
                win_length,
                max,
            }));
        }
        Ok(Self {
            board_size,
            win_length,
            difficulty,
            mode,
        })
    }

    /// Largest win length allowed on a board of side `board_size`.
    pub fn max_win_length(board_size: usize) -> usize {
        board_size.min(MAX_WIN_LENGTH)
    }

    /// Change the board size, clamping the win length if it no longer fits.
    ///
    /// An out-of-range win length falls back to `min(5, board_size)`.
    pub fn with_board_size(self, board_size: usize) -> Result<Self, GameError> {
        validate_board_size(board_size)?;
        let max = Self::max_win_length(board_size);
        let win_length = if (MIN_WIN_LENGTH..=max).contains(&self.win_length) {
            self.win_length
        } else {
            DEFAULT_WIN_LENGTH.min(board_size)
        };
        Ok(Self {
            board_size,
            win_length,
            ..self
        })
    }

    pub fn with_win_length(self, win_length: usize) -> Result<Self, GameError> {
        Self::new(self.board_size, win_length, self.difficulty, self.mode)
    }

    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self { difficulty, ..self }
    }

    pub fn with_mode(self, mode: GameMode) -> Self {
        Self { mode, ..self }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Whether `mark` is played by the computer under this configuration.
    pub fn is_computer(&self, mark: Mark) -> bool {
        self.mode == GameMode::HumanVsComputer && mark == COMPUTER_MARK
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
            difficulty: Difficulty::default(),
            mode: GameMode::default(),
        }
    }
}

pub(crate) fn validate_board_size(board_size: usize) -> Result<(), GameError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
        Ok(())
    } else {
        Err(GameError::InvalidConfiguration(ConfigError::BoardSize(
            board_size,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinking_board_clamps_win_length() {
        let cfg = Configuration::new(8, 6, Difficulty::Easy, GameMode::HumanVsHuman).unwrap();
        let cfg = cfg.with_board_size(4).unwrap();
        assert_eq!(cfg.board_size(), 4);
        assert_eq!(cfg.win_length(), 4);
    }

    #[test]
    fn growing_board_keeps_valid_win_length() {
        let cfg = Configuration::new(3, 3, Difficulty::Easy, GameMode::HumanVsHuman).unwrap();
        let cfg = cfg.with_board_size(10).unwrap();
        assert_eq!(cfg.win_length(), 3);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            Configuration::new(11, 5, Difficulty::Easy, GameMode::HumanVsHuman),
            Err(GameError::InvalidConfiguration(ConfigError::BoardSize(11)))
        );
        assert_eq!(
            Configuration::new(5, 6, Difficulty::Easy, GameMode::HumanVsHuman),
            Err(GameError::InvalidConfiguration(ConfigError::WinLength {
                win_length: 6,
                max: 5
            }))
        );
        assert!(Configuration::new(10, 7, Difficulty::Easy, GameMode::HumanVsHuman).is_err());
        assert!(Configuration::new(3, 2, Difficulty::Easy, GameMode::HumanVsHuman).is_err());
    }
}
