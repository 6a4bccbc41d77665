pub mod alpha_beta;
pub mod evaluation;
pub mod ordering;
pub mod parallel;

pub use alpha_beta::*;
pub use evaluation::*;
pub use ordering::*;
pub use parallel::*;

use crate::core::{Board, Color, Move};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Score de mate à raiz; um mate a `n` meios-lances vale `MATE_SCORE - n`.
pub const MATE_SCORE: i32 = 30_000;
pub const INF: i32 = 32_000;
pub const MAX_PLY: i32 = 128;
/// Scores acima disto (em valor absoluto) são mates.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY;
pub const DEFAULT_TT_MB: usize = 64;

#[inline]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_THRESHOLD
}

/// Configuração de uma busca
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub workers: usize,
    pub time_budget: Option<Duration>,
    pub tt_size_mb: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 4,
            workers: num_cpus::get().max(1),
            time_budget: None,
            tt_size_mb: DEFAULT_TT_MB,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(max_depth: u8) -> Self {
        SearchConfig { max_depth, ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Master,
    ];

    /// Profundidade, workers e tempo para cada nível.
    pub fn config(self) -> SearchConfig {
        let all_cores = num_cpus::get().max(1);
        let (max_depth, workers, secs) = match self {
            Difficulty::Beginner => (1, 1, 1),
            Difficulty::Easy => (2, 1, 2),
            Difficulty::Medium => (3, 2, 5),
            Difficulty::Hard => (5, all_cores, 10),
            Difficulty::Master => (6, all_cores, 30),
        };
        SearchConfig {
            max_depth,
            workers,
            time_budget: Some(Duration::from_secs(secs)),
            tt_size_mb: DEFAULT_TT_MB,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Master => "master",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty `{}` (beginner, easy, medium, hard, master)", s))
    }
}

/// Resultado da busca de um lance de raiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMoveReport {
    pub mv: Move,
    pub score: i32,
    pub nodes: u64,
}

/// Resultado da busca
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
    /// Lances da última iteração completa, na ordem de geração.
    pub root_moves: Vec<RootMoveReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    FiftyMoves,
    InsufficientMaterial,
    Threefold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    /// Estado decidível só a partir da posição (sem repetições).
    pub fn of(board: &Board) -> GameStatus {
        if !board.has_legal_move() {
            return if board.in_check() {
                GameStatus::Checkmate { winner: !board.to_move }
            } else {
                GameStatus::Stalemate
            };
        }
        if board.is_draw_by_50_moves() {
            GameStatus::Draw(DrawReason::FiftyMoves)
        } else if board.is_draw_by_insufficient_material() {
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        } else {
            GameStatus::Ongoing
        }
    }

    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw(DrawReason::FiftyMoves) => write!(f, "draw by the fifty-move rule"),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => write!(f, "draw by insufficient material"),
            GameStatus::Draw(DrawReason::Threefold) => write!(f, "draw by threefold repetition"),
        }
    }
}

/// O que a busca devolve: um lance, ou a razão de não haver nenhum.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    BestMove(SearchResult),
    GameOver(GameStatus),
}

impl SearchOutcome {
    pub fn best_move(&self) -> Option<Move> {
        match self {
            SearchOutcome::BestMove(result) => Some(result.best_move),
            SearchOutcome::GameOver(_) => None,
        }
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            SearchOutcome::BestMove(result) => Some(result),
            SearchOutcome::GameOver(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_mapping() {
        let beginner = Difficulty::Beginner.config();
        assert_eq!((beginner.max_depth, beginner.workers), (1, 1));
        assert_eq!(beginner.time_budget, Some(Duration::from_secs(1)));
        assert_eq!(Difficulty::Medium.config().workers, 2);
        assert_eq!(Difficulty::Master.config().max_depth, 6);
        assert_eq!(Difficulty::Hard.config().workers, num_cpus::get().max(1));
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_status_of_positions() {
        assert_eq!(GameStatus::of(&Board::new()), GameStatus::Ongoing);
        let mate = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1").unwrap();
        assert_eq!(GameStatus::of(&mate), GameStatus::Checkmate { winner: Color::White });
        let bare = Board::from_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(GameStatus::of(&bare), GameStatus::Draw(DrawReason::InsufficientMaterial));
    }
}
