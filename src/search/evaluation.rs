use crate::core::*;
use crate::error::EngineResult;
use crate::moves::{knight::knight_attacks, pawn::pawn_attacks, sliding::slider_attacks};
use serde::{Deserialize, Serialize};

/// Tabela peça-casa no layout visual: linha 0 = 8ª fila, vista pelas brancas.
pub type PieceSquareTable = [[i32; 8]; 8];

const FILE_A: Bitboard = 0x0101_0101_0101_0101;

// c3-f6
const CENTER: Bitboard = 0x0000_3C3C_3C3C_0000;

// Casas de origem de cavalos e bispos; casas de desenvolvimento c3, f3, d4, e4.
const WHITE_MINOR_HOME: Bitboard = 0x66;
const BLACK_MINOR_HOME: Bitboard = 0x66 << 56;
const WHITE_DEVELOPED: Bitboard = (1 << 18) | (1 << 21) | (1 << 27) | (1 << 28);
const BLACK_DEVELOPED: Bitboard = (1 << 42) | (1 << 45) | (1 << 35) | (1 << 36);

#[rustfmt::skip]
const PAWN_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [60, 60, 60, 60, 60, 60, 60, 60],
    [15, 15, 25, 35, 35, 25, 15, 15],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: PieceSquareTable = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 10, 10, 0, -20, -40],
    [-30, 10, 20, 25, 25, 20, 10, -30],
    [-30, 0, 25, 30, 30, 25, 0, -30],
    [-30, 5, 25, 30, 30, 25, 5, -30],
    [-30, 0, 20, 25, 25, 20, 0, -30],
    [-40, -20, 0, 10, 10, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: PieceSquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-10, 10, 15, 20, 20, 15, 10, -10],
    [-10, 0, 15, 20, 20, 15, 0, -10],
    [-10, 5, 10, 20, 20, 10, 5, -10],
    [-10, 0, 10, 15, 15, 10, 0, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: PieceSquareTable = [
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [5, 5, 5, 10, 10, 5, 5, 5],
    [5, 5, 5, 10, 10, 5, 5, 5],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

#[rustfmt::skip]
const QUEEN_TABLE: PieceSquareTable = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 5, 10, 10, 10, 10, 5, -10],
    [-5, 0, 10, 10, 10, 10, 0, -5],
    [0, 0, 10, 10, 10, 10, 0, -5],
    [-10, 5, 10, 10, 10, 10, 5, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_TABLE: PieceSquareTable = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

/// Pesos da avaliação. Carregáveis de JSON; campos em falta ficam com o valor padrão.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Valores base, indexados por `PieceKind::index()` (P, N, B, R, Q, K).
    pub piece_values: [i32; 6],
    pub pawn_table: PieceSquareTable,
    pub knight_table: PieceSquareTable,
    pub bishop_table: PieceSquareTable,
    pub rook_table: PieceSquareTable,
    pub queen_table: PieceSquareTable,
    pub king_table: PieceSquareTable,
    pub passed_pawn: i32,
    pub isolated_pawn: i32,
    pub doubled_pawn: i32,
    pub rook_open_file: i32,
    pub rook_semi_open_file: i32,
    pub rook_on_seventh: i32,
    pub king_shield: i32,
    pub mobility: i32,
    /// Por ataque de peão ou peça (sem o rei) a uma casa central.
    pub center_control: i32,
    /// Por cavalo/bispo desenvolvido, e penalização por cada um ainda em casa.
    pub development: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            piece_values: [100, 320, 330, 500, 900, 0],
            pawn_table: PAWN_TABLE,
            knight_table: KNIGHT_TABLE,
            bishop_table: BISHOP_TABLE,
            rook_table: ROOK_TABLE,
            queen_table: QUEEN_TABLE,
            king_table: KING_TABLE,
            passed_pawn: 20,
            isolated_pawn: 10,
            doubled_pawn: 10,
            rook_open_file: 25,
            rook_semi_open_file: 20,
            rook_on_seventh: 30,
            king_shield: 15,
            mobility: 2,
            center_control: 3,
            development: 15,
        }
    }
}

impl EvalWeights {
    /// Só material: tabelas e termos posicionais a zero.
    pub fn material_only() -> Self {
        EvalWeights {
            piece_values: [100, 320, 330, 500, 900, 0],
            pawn_table: [[0; 8]; 8],
            knight_table: [[0; 8]; 8],
            bishop_table: [[0; 8]; 8],
            rook_table: [[0; 8]; 8],
            queen_table: [[0; 8]; 8],
            king_table: [[0; 8]; 8],
            passed_pawn: 0,
            isolated_pawn: 0,
            doubled_pawn: 0,
            rook_open_file: 0,
            rook_semi_open_file: 0,
            rook_on_seventh: 0,
            king_shield: 0,
            mobility: 0,
            center_control: 0,
            development: 0,
        }
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn table(&self, kind: PieceKind) -> &PieceSquareTable {
        match kind {
            PieceKind::Pawn => &self.pawn_table,
            PieceKind::Knight => &self.knight_table,
            PieceKind::Bishop => &self.bishop_table,
            PieceKind::Rook => &self.rook_table,
            PieceKind::Queen => &self.queen_table,
            PieceKind::King => &self.king_table,
        }
    }

    /// Bónus da tabela para uma peça; as pretas leem a tabela espelhada.
    #[inline]
    pub fn pst(&self, piece: Piece, square: Square) -> i32 {
        let row = match piece.color {
            Color::White => 7 - rank_of(square),
            Color::Black => rank_of(square),
        };
        self.table(piece.kind)[row as usize][file_of(square) as usize]
    }
}

#[inline]
fn file_mask(file: u8) -> Bitboard {
    FILE_A << file
}

#[inline]
fn adjacent_files(file: u8) -> Bitboard {
    let mut mask = 0;
    if file > 0 {
        mask |= file_mask(file - 1);
    }
    if file < 7 {
        mask |= file_mask(file + 1);
    }
    mask
}

/// Casas à frente de `square` (do ponto de vista de `color`), na própria coluna e nas vizinhas.
fn passed_pawn_span(square: Square, color: Color) -> Bitboard {
    let file = file_of(square);
    let files = file_mask(file) | adjacent_files(file);
    let rank = rank_of(square);
    let ahead = match color {
        Color::White if rank < 7 => !0u64 << ((rank + 1) * 8),
        Color::Black if rank > 0 => !0u64 >> ((8 - rank) * 8),
        _ => 0,
    };
    files & ahead
}

/// Avaliação estática. Pura: só lê o tabuleiro.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Evaluator { weights }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Score em centipawns do ponto de vista de quem joga.
    pub fn evaluate(&self, board: &Board) -> i32 {
        let white = self.evaluate_side(board, Color::White);
        let black = self.evaluate_side(board, Color::Black);
        match board.to_move {
            Color::White => white - black,
            Color::Black => black - white,
        }
    }

    /// Termos de uma cor, sempre positivos a seu favor.
    fn evaluate_side(&self, board: &Board, color: Color) -> i32 {
        let w = &self.weights;
        let mut score = 0;

        for kind in PieceKind::ALL {
            let mut bb = board.pieces(kind, color);
            while bb != 0 {
                let square = bb.trailing_zeros() as Square;
                score += w.piece_values[kind.index()] + w.pst(Piece::new(kind, color), square);
                bb &= bb - 1;
            }
        }

        score += self.pawn_structure(board, color);
        score += self.rooks(board, color);
        score += self.king_shield(board, color);
        score += self.mobility(board, color);
        score += self.center_control(board, color);
        score += self.development(board, color);
        score
    }

    fn pawn_structure(&self, board: &Board, color: Color) -> i32 {
        let w = &self.weights;
        if w.passed_pawn == 0 && w.isolated_pawn == 0 && w.doubled_pawn == 0 {
            return 0;
        }
        let ours = board.pieces(PieceKind::Pawn, color);
        let theirs = board.pieces(PieceKind::Pawn, !color);
        let mut score = 0;

        for file in 0..8 {
            let on_file = (ours & file_mask(file)).count_ones() as i32;
            if on_file > 1 {
                score -= w.doubled_pawn * (on_file - 1);
            }
            if on_file > 0 && ours & adjacent_files(file) == 0 {
                score -= w.isolated_pawn * on_file;
            }
        }

        let mut bb = ours;
        while bb != 0 {
            let square = bb.trailing_zeros() as Square;
            if theirs & passed_pawn_span(square, color) == 0 {
                score += w.passed_pawn;
            }
            bb &= bb - 1;
        }
        score
    }

    fn rooks(&self, board: &Board, color: Color) -> i32 {
        let w = &self.weights;
        let own_pawns = board.pieces(PieceKind::Pawn, color);
        let all_pawns = board.pawns;
        let seventh = match color {
            Color::White => 6,
            Color::Black => 1,
        };
        let mut score = 0;

        let mut bb = board.pieces(PieceKind::Rook, color);
        while bb != 0 {
            let square = bb.trailing_zeros() as Square;
            let file = file_mask(file_of(square));
            if all_pawns & file == 0 {
                score += w.rook_open_file;
            } else if own_pawns & file == 0 {
                score += w.rook_semi_open_file;
            }
            if rank_of(square) == seventh {
                score += w.rook_on_seventh;
            }
            bb &= bb - 1;
        }
        score
    }

    /// Peças próprias nas três casas imediatamente à frente do rei.
    fn king_shield(&self, board: &Board, color: Color) -> i32 {
        if self.weights.king_shield == 0 {
            return 0;
        }
        let Some(king) = board.king_square(color) else { return 0 };
        let front = match color {
            Color::White if rank_of(king) < 7 => king + 8,
            Color::Black if rank_of(king) > 0 => king - 8,
            _ => return 0,
        };
        let file = file_of(front);
        let mut shield_squares = square_bb(front);
        if file > 0 {
            shield_squares |= square_bb(front - 1);
        }
        if file < 7 {
            shield_squares |= square_bb(front + 1);
        }
        let shield = shield_squares & board.pieces_of(color) & !board.kings;
        shield.count_ones() as i32 * self.weights.king_shield
    }

    /// Casas alcançáveis por cavalos, bispos, torres e damas (pseudo-legal).
    fn mobility(&self, board: &Board, color: Color) -> i32 {
        if self.weights.mobility == 0 {
            return 0;
        }
        let own = board.pieces_of(color);
        let occupancy = board.occupied();
        let mut reachable = 0;

        let mut knights = board.pieces(PieceKind::Knight, color);
        while knights != 0 {
            let square = knights.trailing_zeros() as Square;
            reachable += (knight_attacks(square) & !own).count_ones();
            knights &= knights - 1;
        }
        for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            let mut bb = board.pieces(kind, color);
            while bb != 0 {
                let square = bb.trailing_zeros() as Square;
                reachable += (slider_attacks(kind, square, occupancy) & !own).count_ones();
                bb &= bb - 1;
            }
        }
        reachable as i32 * self.weights.mobility
    }

    /// Ataques às 16 casas centrais, contados por peça atacante.
    fn center_control(&self, board: &Board, color: Color) -> i32 {
        if self.weights.center_control == 0 {
            return 0;
        }
        let own = board.pieces_of(color);
        let occupancy = board.occupied();
        let mut attacks = 0;

        for kind in [PieceKind::Pawn, PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            let mut bb = board.pieces(kind, color);
            while bb != 0 {
                let square = bb.trailing_zeros() as Square;
                let targets = match kind {
                    PieceKind::Pawn => pawn_attacks(square, color),
                    PieceKind::Knight => knight_attacks(square),
                    _ => slider_attacks(kind, square, occupancy),
                };
                attacks += (targets & CENTER & !own).count_ones();
                bb &= bb - 1;
            }
        }
        attacks as i32 * self.weights.center_control
    }

    fn development(&self, board: &Board, color: Color) -> i32 {
        if self.weights.development == 0 {
            return 0;
        }
        let (home, developed) = match color {
            Color::White => (WHITE_MINOR_HOME, WHITE_DEVELOPED),
            Color::Black => (BLACK_MINOR_HOME, BLACK_DEVELOPED),
        };
        let minors = board.pieces(PieceKind::Knight, color) | board.pieces(PieceKind::Bishop, color);
        let out = (minors & developed).count_ones() as i32;
        let undeveloped = (minors & home).count_ones() as i32;
        (out - undeveloped) * self.weights.development
    }
}
